#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod apply;
pub mod config;
pub mod entries;
pub mod error;
pub mod operations;
pub mod output;
pub mod planner;
pub mod preview;
pub mod sequence;

pub use apply::{
    execute_plan, execute_plan_with, ExecuteOptions, FsRenamer, ItemResult, Outcome, Renamer,
    RunResult,
};
pub use config::{
    parse_digit_width, parse_starting_number, Mode, RuleConfig, StartSide, TargetKind, WidthGrowth,
};
pub use entries::{list_entries, Entry};
pub use error::Error;
pub use operations::{plan_operation, run_operation};
pub use output::{OutputFormat, OutputFormatter, PlanOutcome, RunReport, VersionResult};
pub use planner::{plan_renames, NamingPlan, PlanItem};
pub use preview::{render_plan, render_summary, render_table, Preview};
pub use sequence::{format_folio, grown_width};
