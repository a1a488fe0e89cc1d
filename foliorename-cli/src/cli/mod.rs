pub mod args;
pub mod types;

pub use args::{Cli, Commands, RuleArgs};
pub use types::{ModeArg, OutputFormat, PreviewArg, RectoMarkerArg, SideArg, VersoMarkerArg};
