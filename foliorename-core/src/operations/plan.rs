use crate::config::RuleConfig;
use crate::entries::list_entries;
use crate::output::PlanOutcome;
use crate::planner::plan_renames;
use crate::preview::{render_plan, Preview};
use anyhow::{Context, Result};
use std::path::Path;

/// Plan operation - list, sort, plan, render. Never mutates the filesystem.
pub fn plan_operation(
    directory: &Path,
    config: &RuleConfig,
    preview_format: Preview,
    use_color: bool,
    fixed_table_width: bool,
) -> Result<(PlanOutcome, Option<String>)> {
    let entries = list_entries(directory)
        .with_context(|| format!("failed to read entries from {}", directory.display()))?;

    let plan = plan_renames(&entries, config)?;

    let preview_content = match preview_format {
        Preview::None => None,
        format => Some(render_plan(&plan, format, use_color, fixed_table_width)),
    };

    let result = PlanOutcome {
        directory: directory.display().to_string(),
        mode: config.mode,
        planned: plan.items.len(),
        skipped: plan.skipped,
        plan: Some(plan),
    };

    Ok((result, preview_content))
}
