//! Trace sessions and the scoped timers that feed them.
//!
//! This module handles:
//! - Opening and finalizing trace documents
//! - Serializing concurrent event submissions
//! - Timing scopes and emitting exactly one event per timer

pub mod timer;
pub mod writer;

// Re-export main types
pub use timer::ScopedTimer;
pub use writer::{Session, SessionSummary, TraceSink};
