//! Reading finished trace documents back from disk.

use crate::utils::error::TraceError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete trace document as written by a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceDocument {
    #[serde(rename = "otherData")]
    pub other_data: serde_json::Value,

    #[serde(rename = "traceEvents")]
    pub trace_events: Vec<TraceEventRecord>,
}

/// One entry of `traceEvents`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEventRecord {
    pub cat: String,
    pub dur: u64,
    pub name: String,
    pub ph: String,
    pub pid: u32,
    pub tid: u64,
    pub ts: u64,
}

impl TraceDocument {
    /// Number of recorded events
    pub fn len(&self) -> usize {
        self.trace_events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace_events.is_empty()
    }
}

/// Parse a trace document from a string
pub fn parse_trace(raw: &str) -> Result<TraceDocument, TraceError> {
    let document: TraceDocument = serde_json::from_str(raw)?;
    if !document.other_data.is_object() {
        return Err(TraceError::InvalidDocument(
            "otherData must be an object".to_string(),
        ));
    }
    Ok(document)
}

/// Read and parse a trace document from a file
///
/// # Errors
/// * `TraceError::Io` - file cannot be opened
/// * `TraceError::Json` - contents are not a complete trace document
pub fn read_trace(input_path: impl AsRef<Path>) -> Result<TraceDocument, TraceError> {
    let input_path = input_path.as_ref();

    debug!("Reading trace from: {}", input_path.display());

    let raw = std::fs::read_to_string(input_path)?;
    let document = parse_trace(&raw)?;

    debug!("Trace loaded: {} events", document.len());

    Ok(document)
}
