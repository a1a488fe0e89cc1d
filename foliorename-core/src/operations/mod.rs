pub mod plan;
pub mod run;

pub use plan::plan_operation;
pub use run::run_operation;
