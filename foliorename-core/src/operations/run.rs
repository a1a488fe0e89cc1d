use crate::apply::{execute_plan, ExecuteOptions};
use crate::config::RuleConfig;
use crate::entries::list_entries;
use crate::output::RunReport;
use crate::planner::plan_renames;
use crate::preview::{render_plan, Preview};
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

/// Run operation - plan, confirm, execute.
///
/// The plan is built in full before any rename is attempted; a planning
/// failure leaves the filesystem untouched. Per-item rename failures are
/// tallied in the report and do not abort the run.
pub fn run_operation(
    directory: &Path,
    config: &RuleConfig,
    log_file: Option<PathBuf>,
    preview_format: Preview,
    use_color: bool,
    fixed_table_width: bool,
    auto_approve: bool,
) -> Result<(RunReport, Option<String>)> {
    let entries = list_entries(directory)
        .with_context(|| format!("failed to read entries from {}", directory.display()))?;

    let plan = plan_renames(&entries, config)?;

    let preview_content = match preview_format {
        Preview::None => None,
        format => Some(render_plan(&plan, format, use_color, fixed_table_width)),
    };

    // Show what is about to happen before asking for confirmation
    if !config.dry_run && !auto_approve {
        if let Some(ref preview) = preview_content {
            println!("{preview}");
        }
        if !get_user_confirmation(plan.items.len())? {
            return Ok((
                RunReport {
                    directory: directory.display().to_string(),
                    mode: config.mode,
                    attempted: 0,
                    renamed: 0,
                    failed: 0,
                    skipped: plan.skipped,
                    dry_run: false,
                    aborted: true,
                    result: None,
                },
                None,
            ));
        }
    }

    let options = ExecuteOptions {
        dry_run: config.dry_run,
        log_file,
    };
    let result = execute_plan(directory, &plan, &options)?;

    let report = RunReport {
        directory: directory.display().to_string(),
        mode: config.mode,
        attempted: result.attempted,
        renamed: result.renamed(),
        failed: result.failed,
        skipped: plan.skipped,
        dry_run: config.dry_run,
        aborted: false,
        result: Some(result),
    };

    Ok((report, preview_content))
}

fn get_user_confirmation(count: usize) -> Result<bool> {
    print!("Rename {count} entries? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "Yes"))
}
