//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod run;
pub mod utils;

// Re-export main command functions
pub use models::{RunArgs, RunOutputs, TabulateArgs};
pub use run::{execute_run, validate_args};
pub use utils::{display_version, execute_init, execute_tabulate};
