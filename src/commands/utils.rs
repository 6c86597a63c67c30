use crate::utils::config::{DEFAULT_TRACE_PATH, EVENT_PHASE};

/// Display version information
pub fn display_version() {
    println!("Scope Trace v{}", env!("CARGO_PKG_VERSION"));
    println!("Default output: {}", DEFAULT_TRACE_PATH);
    println!("Event phase: \"{}\" (complete events)", EVENT_PHASE);
    println!();
    println!("Scoped wall-clock instrumentation in Chrome trace-event JSON.");
}
