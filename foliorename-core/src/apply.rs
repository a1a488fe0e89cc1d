use crate::planner::NamingPlan;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Options for executing a naming plan.
#[derive(Debug, Clone, Default)]
pub struct ExecuteOptions {
    /// Compute outcomes without touching the filesystem.
    pub dry_run: bool,
    /// Append a timestamped trace line per item to this file.
    pub log_file: Option<PathBuf>,
}

/// What happened to one plan item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Renamed,
    Simulated,
    Failed(String),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Renamed => write!(f, "renamed"),
            Self::Simulated => write!(f, "simulated (dry run)"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// One executed (or simulated) rename with its outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemResult {
    pub source_name: String,
    pub target_name: String,
    pub outcome: Outcome,
}

/// Aggregated tally for a whole run. Partial completion is a normal,
/// reportable state, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    pub attempted: usize,
    pub failed: usize,
    pub items: Vec<ItemResult>,
}

impl RunResult {
    pub fn renamed(&self) -> usize {
        self.items
            .iter()
            .filter(|i| i.outcome == Outcome::Renamed)
            .count()
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// The single filesystem seam of the executor, narrow so tests can inject a
/// fake.
pub trait Renamer {
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()>;
}

/// Renames through the real filesystem.
#[derive(Debug, Default)]
pub struct FsRenamer;

impl Renamer for FsRenamer {
    fn rename(&mut self, from: &Path, to: &Path) -> io::Result<()> {
        fs::rename(from, to)
    }
}

struct TraceLog {
    file: Option<File>,
}

impl TraceLog {
    fn open(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent).with_context(|| {
                            format!("failed to create log directory {}", parent.display())
                        })?;
                    }
                }
                Some(
                    OpenOptions::new()
                        .create(true)
                        .append(true)
                        .open(path)
                        .with_context(|| format!("failed to open log file {}", path.display()))?,
                )
            },
            None => None,
        };
        Ok(Self { file })
    }

    fn log(&mut self, message: &str) -> Result<()> {
        if let Some(ref mut file) = self.file {
            writeln!(
                file,
                "[{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                message
            )?;
            file.flush()?;
        }
        Ok(())
    }
}

/// Execute a plan against the real filesystem.
pub fn execute_plan(dir: &Path, plan: &NamingPlan, options: &ExecuteOptions) -> Result<RunResult> {
    execute_plan_with(dir, plan, options, &mut FsRenamer)
}

/// Execute a plan, renaming through `renamer`. Items are attempted in plan
/// order; a failure is recorded and counted, and the run continues with the
/// next item. No collision checks are made between targets.
pub fn execute_plan_with(
    dir: &Path,
    plan: &NamingPlan,
    options: &ExecuteOptions,
    renamer: &mut dyn Renamer,
) -> Result<RunResult> {
    let mut trace = TraceLog::open(options.log_file.as_deref())?;
    let mut result = RunResult::default();

    for item in &plan.items {
        result.attempted += 1;

        let outcome = if options.dry_run {
            Outcome::Simulated
        } else {
            let from = dir.join(&item.source_name);
            let to = dir.join(&item.target_name);
            match renamer.rename(&from, &to) {
                Ok(()) => Outcome::Renamed,
                Err(err) => {
                    result.failed += 1;
                    Outcome::Failed(err.to_string())
                },
            }
        };

        trace.log(&format!(
            "{} -> {}: {}",
            item.source_name, item.target_name, outcome
        ))?;

        result.items.push(ItemResult {
            source_name: item.source_name.clone(),
            target_name: item.target_name.clone(),
            outcome,
        });
    }

    Ok(result)
}
