use std::path::PathBuf;
use thiserror::Error;

/// Pre-flight failures that stop a run before any rename is attempted.
///
/// Per-item rename failures are not errors; they are recorded in the
/// [`RunResult`](crate::apply::RunResult) and the run continues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to list directory {path}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("digit width must be at least 1, got {0}")]
    InvalidWidth(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
