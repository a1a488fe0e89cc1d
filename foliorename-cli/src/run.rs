use crate::cli::{OutputFormat, PreviewArg, RuleArgs};
use anyhow::Result;
use foliorename_core::{run_operation, OutputFormatter};
use std::path::{Path, PathBuf};

#[allow(clippy::fn_params_excessive_bools)]
#[allow(clippy::too_many_arguments)]
pub fn handle_run(
    directory: &Path,
    rules: &RuleArgs,
    dry_run: bool,
    log_file: Option<PathBuf>,
    preview: PreviewArg,
    fixed_table_width: bool,
    output: OutputFormat,
    use_color: bool,
    auto_approve: bool,
) -> Result<i32> {
    let config = rules.to_rule_config(dry_run)?;

    let preview_format = if output == OutputFormat::Json {
        foliorename_core::Preview::None
    } else {
        preview.into()
    };

    let (report, preview_content) = run_operation(
        directory,
        &config,
        log_file,
        preview_format,
        use_color,
        fixed_table_width,
        auto_approve,
    )?;

    // the confirmation path already printed the preview
    if dry_run || auto_approve {
        if let Some(preview) = preview_content {
            if !preview.is_empty() {
                println!("{preview}");
            }
        }
    }
    println!("{}", report.format(output.into()));

    if report.aborted || report.failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}
