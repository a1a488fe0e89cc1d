use crate::cli::{OutputFormat, PreviewArg, RuleArgs};
use anyhow::Result;
use foliorename_core::{plan_operation, OutputFormatter};
use std::path::Path;

#[allow(clippy::fn_params_excessive_bools)]
pub fn handle_plan(
    directory: &Path,
    rules: &RuleArgs,
    preview: PreviewArg,
    fixed_table_width: bool,
    output: OutputFormat,
    use_color: bool,
) -> Result<i32> {
    let config = rules.to_rule_config(true)?;

    // JSON output carries the full plan; a preview would only duplicate it
    let preview_format = if output == OutputFormat::Json {
        foliorename_core::Preview::None
    } else {
        preview.into()
    };

    let (result, preview_content) = plan_operation(
        directory,
        &config,
        preview_format,
        use_color,
        fixed_table_width,
    )?;

    if let Some(preview) = preview_content {
        if !preview.is_empty() {
            println!("{preview}");
        }
    }
    println!("{}", result.format(output.into()));

    Ok(0)
}
