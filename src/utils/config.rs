//! Configuration and constants for trace sessions and the CLI.

/// Destination used when a session is begun without an explicit path
pub const DEFAULT_TRACE_PATH: &str = "result.json";

/// Session name used by the CLI when none is given
pub const DEFAULT_SESSION_NAME: &str = "Profile";

// Fixed fields of every complete event written to the document
pub const EVENT_CATEGORY: &str = "function";
pub const EVENT_PHASE: &str = "X";
pub const PROCESS_ID: u32 = 0;

// Document framing
pub const DOCUMENT_HEADER: &str = "{\"otherData\": {},\"traceEvents\":[";
pub const DOCUMENT_FOOTER: &str = "]}";

/// Upper bound for the benchmark workload; Fibonacci(n) opens ~fib(n) scopes
pub const MAX_FIBONACCI_DEPTH: u32 = 25;

/// Fibonacci depths run by `scope-trace run` when none are given
pub const DEFAULT_FIBONACCI_DEPTHS: &[u32] = &[9, 10];
