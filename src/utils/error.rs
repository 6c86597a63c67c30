//! Error types for the entire crate.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while recording or reading a trace
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("Failed to open trace sink {}: {source}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Session '{name}' is already open")]
    SessionAlreadyOpen { name: String },

    #[error("No trace session is open")]
    SessionNotOpen,

    #[error("Trace sink of session '{name}' failed mid-event; document is incomplete")]
    SinkBroken { name: String },

    #[error("Invalid event: end ({end}) is before start ({start})")]
    InvalidEvent { start: u64, end: u64 },

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Invalid trace document: {0}")]
    InvalidDocument(String),
}
