//! Trace document writer.
//!
//! Frames events as a Chrome trace-event JSON array inside an envelope
//! object. Each event is serialized into a scratch buffer first and handed
//! to the sink in one `write_all`; flushing is left to the caller.

use crate::event::Event;
use crate::utils::config::{
    DOCUMENT_FOOTER, DOCUMENT_HEADER, EVENT_CATEGORY, EVENT_PHASE, PROCESS_ID,
};
use crate::utils::error::TraceError;
use log::debug;
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

/// Wire form of a complete ("X") event. Field order is the output order.
#[derive(Serialize)]
struct CompleteEvent<'a> {
    cat: &'static str,
    dur: u64,
    name: Cow<'a, str>,
    ph: &'static str,
    pid: u32,
    tid: u64,
    ts: u64,
}

impl<'a> From<&'a Event> for CompleteEvent<'a> {
    fn from(event: &'a Event) -> Self {
        Self {
            cat: EVENT_CATEGORY,
            dur: event.duration(),
            name: sanitize_name(event.name()),
            ph: EVENT_PHASE,
            pid: PROCESS_ID,
            tid: event.thread_id(),
            ts: event.start(),
        }
    }
}

/// Replace every `"` in a scope name with `'`
pub fn sanitize_name(name: &str) -> Cow<'_, str> {
    if name.contains('"') {
        Cow::Owned(name.replace('"', "'"))
    } else {
        Cow::Borrowed(name)
    }
}

/// Write the document envelope opening and flush
pub fn write_header<W: Write + ?Sized>(writer: &mut W) -> Result<(), TraceError> {
    writer.write_all(DOCUMENT_HEADER.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Close the event array and the envelope, then flush
pub fn write_footer<W: Write + ?Sized>(writer: &mut W) -> Result<(), TraceError> {
    writer.write_all(DOCUMENT_FOOTER.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Serialize one event, preceded by a comma when it is not the first.
///
/// Does not flush: once this returns `Ok` the bytes belong to the sink,
/// whether or not a later flush succeeds.
pub fn write_event<W: Write + ?Sized>(
    writer: &mut W,
    event: &Event,
    leading_comma: bool,
) -> Result<(), TraceError> {
    let mut buf = Vec::with_capacity(96 + event.name().len());
    if leading_comma {
        buf.push(b',');
    }
    serde_json::to_writer(&mut buf, &CompleteEvent::from(event))?;

    writer.write_all(&buf)?;
    Ok(())
}

/// Validate that a trace destination is usable
pub fn validate_path(path: &Path) -> Result<(), TraceError> {
    if path.as_os_str().is_empty() {
        return Err(TraceError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(TraceError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Parent directory will be created: {}", parent.display());
        }
    }

    Ok(())
}
