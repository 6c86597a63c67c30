//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod benchmark;
pub mod models;
pub mod utils;
pub mod validate;

// Re-export main command functions
pub use benchmark::{execute_run, fibonacci, run_benchmarks, validate_args};
pub use models::{FibonacciResult, RunArgs, RunReport};
pub use utils::display_version;
pub use validate::validate_trace_file;
