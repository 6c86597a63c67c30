use crate::utils::config::{DEFAULT_FIBONACCI_DEPTHS, DEFAULT_SESSION_NAME, DEFAULT_TRACE_PATH};
use crate::session::SessionSummary;
use std::path::PathBuf;
use std::time::Duration;

/// Arguments for the run command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Name recorded for the session
    pub session_name: String,

    /// Output path for the trace document
    pub output: PathBuf,

    /// Fibonacci depth per benchmark thread
    pub depths: Vec<u32>,

    /// Iterations of each print loop (0 skips them)
    pub print_loops: usize,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            session_name: DEFAULT_SESSION_NAME.to_string(),
            output: PathBuf::from(DEFAULT_TRACE_PATH),
            depths: DEFAULT_FIBONACCI_DEPTHS.to_vec(),
            print_loops: 0,
        }
    }
}

/// Result of one benchmark thread
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FibonacciResult {
    pub depth: u32,
    pub value: u64,
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: SessionSummary,
    pub results: Vec<FibonacciResult>,
    pub elapsed: Duration,
}
