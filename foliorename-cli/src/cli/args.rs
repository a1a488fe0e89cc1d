use clap::{Args, Parser, Subcommand};
use foliorename_core::{
    parse_digit_width, parse_starting_number, RuleConfig, TargetKind, WidthGrowth,
};
use std::path::PathBuf;

use super::types::{ModeArg, OutputFormat, PreviewArg, RectoMarkerArg, SideArg, VersoMarkerArg};

/// Batch-rename files or folders to manuscript folio conventions (folio, recto, verso)
#[derive(Parser, Debug)]
#[command(name = "foliorename")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Assume yes for all prompts
    #[arg(short = 'y', long = "yes", global = true, env = "FOLIORENAME_YES")]
    pub yes: bool,
}

/// The renaming rules, shared by `plan` and `run`.
#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    /// Rename folders instead of files
    #[arg(long)]
    pub folders: bool,

    /// Each entry is a single face or a two-page spread
    #[arg(long, value_enum, default_value = "split")]
    pub mode: ModeArg,

    /// Treat the full file name as the base name (for files without a real extension)
    #[arg(long)]
    pub ignore_extension: bool,

    /// Literal text prepended to every generated name, e.g. "Paris, BnF, lat. 16480, fol. "
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Literal text appended after the recto/verso label, before the extension
    #[arg(long, default_value = "")]
    pub suffix: String,

    /// Folio number the automatic numbering starts from
    #[arg(long = "start", value_name = "N")]
    pub starting_number: String,

    /// Zero-pad width for folio numbers; grows automatically for large starting numbers
    #[arg(long = "digits", value_name = "W", default_value = "")]
    pub digit_width: String,

    /// Side of the first eligible entry (split mode only)
    #[arg(long, value_enum, default_value = "recto")]
    pub start_side: SideArg,

    /// Recto marker style
    #[arg(long, value_enum, default_value = "r", conflicts_with = "recto_text")]
    pub recto_marker: RectoMarkerArg,

    /// Verso marker style
    #[arg(long, value_enum, default_value = "v", conflicts_with = "verso_text")]
    pub verso_marker: VersoMarkerArg,

    /// Arbitrary recto marker text (overrides --recto-marker)
    #[arg(long)]
    pub recto_text: Option<String>,

    /// Arbitrary verso marker text (overrides --verso-marker)
    #[arg(long)]
    pub verso_text: Option<String>,

    /// Text immediately before the recto marker
    #[arg(long, default_value = "")]
    pub recto_label_prefix: String,

    /// Text immediately after the recto marker
    #[arg(long, default_value = "")]
    pub recto_label_suffix: String,

    /// Text immediately before the verso marker
    #[arg(long, default_value = "")]
    pub verso_label_prefix: String,

    /// Text immediately after the verso marker
    #[arg(long, default_value = "")]
    pub verso_label_suffix: String,

    /// Text between the verso and recto halves (combined mode only)
    #[arg(long, default_value = " - ")]
    pub separator: String,

    /// Grow the digit width from the running folio number instead of the configured start
    #[arg(long)]
    pub live_width_growth: bool,
}

impl RuleArgs {
    /// Validate the raw rule values and build the engine configuration.
    /// Numeric fields are rejected here, at the presentation boundary; the
    /// engine only ever sees parsed integers.
    pub fn to_rule_config(&self, dry_run: bool) -> anyhow::Result<RuleConfig> {
        let starting_number = parse_starting_number(&self.starting_number)?;
        let digit_width = parse_digit_width(&self.digit_width)?;

        let recto_marker = self
            .recto_text
            .clone()
            .unwrap_or_else(|| self.recto_marker.as_str().to_string());
        let verso_marker = self
            .verso_text
            .clone()
            .unwrap_or_else(|| self.verso_marker.as_str().to_string());

        Ok(RuleConfig {
            target_kind: if self.folders {
                TargetKind::Folders
            } else {
                TargetKind::Files
            },
            ignore_extension: self.ignore_extension,
            prefix: self.prefix.clone(),
            suffix: self.suffix.clone(),
            starting_number,
            digit_width,
            mode: self.mode.into(),
            start_side: self.start_side.into(),
            recto_label_prefix: self.recto_label_prefix.clone(),
            recto_label_suffix: self.recto_label_suffix.clone(),
            verso_label_prefix: self.verso_label_prefix.clone(),
            verso_label_suffix: self.verso_label_suffix.clone(),
            recto_marker,
            verso_marker,
            separator: self.separator.clone(),
            width_growth: if self.live_width_growth {
                WidthGrowth::Live
            } else {
                WidthGrowth::Configured
            },
            dry_run,
        })
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute and preview the naming plan without touching anything
    Plan {
        /// Directory whose entries will be renamed
        directory: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Preview output format
        #[arg(long, value_enum, default_value = "table")]
        preview: PreviewArg,

        /// Use fixed column widths for table output (useful in CI environments)
        #[arg(long)]
        fixed_table_width: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Plan and execute the renames
    Run {
        /// Directory whose entries will be renamed
        directory: PathBuf,

        #[command(flatten)]
        rules: RuleArgs,

        /// Compute the plan and the result, but rename nothing (test mode)
        #[arg(long)]
        dry_run: bool,

        /// Append a timestamped trace line per rename to this file
        #[arg(long, value_name = "PATH")]
        log_file: Option<PathBuf>,

        /// Preview output format
        #[arg(long, value_enum, default_value = "table")]
        preview: PreviewArg,

        /// Use fixed column widths for table output (useful in CI environments)
        #[arg(long)]
        fixed_table_width: bool,

        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },

    /// Print version information
    Version {
        /// Output format for machine consumption
        #[arg(long, value_enum, default_value = "summary")]
        output: OutputFormat,
    },
}
