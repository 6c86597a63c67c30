//! Trace document output and input.
//!
//! This module handles:
//! - Framing events as Chrome trace-event JSON
//! - Name sanitization and path validation
//! - Reading finished documents back for validation

pub mod document;
pub mod reader;

// Re-export main functions
pub use document::{sanitize_name, validate_path, write_event, write_footer, write_header};
pub use reader::{parse_trace, read_trace, TraceDocument, TraceEventRecord};
