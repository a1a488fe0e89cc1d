use crate::apply::RunResult;
use crate::config::Mode;
use crate::planner::NamingPlan;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::fmt::Write;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

/// Result of a plan operation
#[derive(Debug, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub directory: String,
    pub mode: Mode,
    pub planned: usize,
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<NamingPlan>,
}

/// Result of a run operation
#[derive(Debug, Serialize, Deserialize)]
pub struct RunReport {
    pub directory: String,
    pub mode: Mode,
    pub attempted: usize,
    pub renamed: usize,
    pub failed: usize,
    pub skipped: usize,
    pub dry_run: bool,
    pub aborted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RunResult>,
}

/// Result of a version command
#[derive(Debug, Serialize, Deserialize)]
pub struct VersionResult {
    pub name: String,
    pub version: String,
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for PlanOutcome {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "plan",
            "directory": self.directory,
            "mode": self.mode,
            "summary": {
                "planned": self.planned,
                "skipped": self.skipped,
            },
            "plan": self.plan,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();
        writeln!(
            output,
            "Folio naming plan for {} ({} mode)",
            self.directory,
            self.mode.as_str()
        )
        .unwrap();
        writeln!(
            output,
            "Planned: {} renames ({} entries skipped)",
            self.planned, self.skipped
        )
        .unwrap();
        output
    }
}

impl OutputFormatter for RunReport {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "run",
            "directory": self.directory,
            "mode": self.mode,
            "dry_run": self.dry_run,
            "aborted": self.aborted,
            "summary": {
                "attempted": self.attempted,
                "renamed": self.renamed,
                "failed": self.failed,
                "skipped": self.skipped,
            },
            "result": self.result,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        if self.aborted {
            return "Aborted.\n".to_string();
        }

        let mut output = String::new();

        if self.dry_run {
            writeln!(
                output,
                "Dry run: {} renames simulated, nothing changed",
                self.attempted
            )
            .unwrap();
            return output;
        }

        writeln!(
            output,
            "Renamed {} of {} entries in {}",
            self.renamed, self.attempted, self.directory
        )
        .unwrap();

        if self.failed == 0 {
            output.push_str("✓ All entries renamed successfully\n");
        } else {
            writeln!(output, "Completed with {} failure(s)", self.failed).unwrap();
        }

        output
    }
}

impl OutputFormatter for VersionResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "name": self.name,
            "version": self.version,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        format!("{} {}", self.name, self.version)
    }
}
