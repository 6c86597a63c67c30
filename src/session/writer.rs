//! The trace session: owner of the sink for one Begin/End interval.
//!
//! All state that changes while recording (the sink, the open flag, the
//! event count) lives behind one mutex, so the comma decision and the write
//! it guards happen as a single step even when many threads submit at once.

use super::timer::ScopedTimer;
use crate::event::Event;
use crate::output::document::{validate_path, write_event, write_footer, write_header};
use crate::utils::config::DEFAULT_TRACE_PATH;
use crate::utils::error::TraceError;
use log::{debug, info, trace, warn};
use std::borrow::Cow;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Writable destination owned by an open session
pub type TraceSink = Box<dyn Write + Send>;

struct ActiveSession {
    name: String,
    sink: TraceSink,
    event_count: u64,
    // set while an event is going into the sink; stays set if that write
    // errors or panics part way, leaving unknown bytes in the document
    broken: bool,
}

/// What a session wrote, returned by [`Session::end`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub name: String,
    pub event_count: u64,
}

/// A trace session shared by reference between every call site that records.
///
/// At most one document is open per session at a time; `begin` while open is
/// rejected and leaves the open document untouched. After `end` the same
/// session may be begun again.
#[derive(Default)]
pub struct Session {
    state: Mutex<Option<ActiveSession>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<ActiveSession>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Open `destination` and write the document header.
    ///
    /// # Errors
    /// * `TraceError::SessionAlreadyOpen` - a document is already open
    /// * `TraceError::InvalidPath` - destination is empty or a directory
    /// * `TraceError::SinkOpen` - destination cannot be created
    pub fn begin(
        &self,
        name: impl Into<String>,
        destination: impl AsRef<Path>,
    ) -> Result<(), TraceError> {
        let destination = destination.as_ref();
        let mut state = self.lock();
        ensure_closed(&state)?;

        validate_path(destination)?;

        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                debug!("Creating parent directories: {}", parent.display());
                std::fs::create_dir_all(parent).map_err(|source| TraceError::SinkOpen {
                    path: destination.to_path_buf(),
                    source,
                })?;
            }
        }

        let file = File::create(destination).map_err(|source| TraceError::SinkOpen {
            path: destination.to_path_buf(),
            source,
        })?;

        info!("Writing trace to: {}", destination.display());
        open(&mut state, name.into(), Box::new(BufWriter::new(file)))
    }

    /// [`begin`](Self::begin) with the default destination `result.json`
    pub fn begin_default(&self, name: impl Into<String>) -> Result<(), TraceError> {
        self.begin(name, DEFAULT_TRACE_PATH)
    }

    /// Begin a session that writes into an arbitrary sink
    pub fn begin_with_sink(
        &self,
        name: impl Into<String>,
        sink: TraceSink,
    ) -> Result<(), TraceError> {
        let mut state = self.lock();
        ensure_closed(&state)?;
        open(&mut state, name.into(), sink)
    }

    /// Append one event to the open document and flush it.
    ///
    /// The event counts as written once its bytes are in the sink, so a
    /// failed flush still leaves the next event its separator.
    ///
    /// # Errors
    /// * `TraceError::SessionNotOpen` - no document is open; the event is dropped
    /// * `TraceError::SinkBroken` - an earlier write failed part way; the event is dropped
    /// * `TraceError::Io` / `TraceError::Json` - the sink rejected the write or flush
    pub fn write_event(&self, event: Event) -> Result<(), TraceError> {
        let mut state = self.lock();
        let active = state.as_mut().ok_or(TraceError::SessionNotOpen)?;

        if active.broken {
            return Err(TraceError::SinkBroken {
                name: active.name.clone(),
            });
        }

        active.broken = true;
        write_event(&mut active.sink, &event, active.event_count > 0)?;
        active.broken = false;
        active.event_count += 1;

        active.sink.flush()?;

        trace!(
            "[{}] event #{}: {} ({}us, tid {})",
            active.name,
            active.event_count,
            event.name(),
            event.duration(),
            event.thread_id()
        );

        Ok(())
    }

    /// Write the footer, close the sink and reset the session.
    ///
    /// The session is reset even when the footer cannot be written or the
    /// sink broke earlier; the latter is reported as `TraceError::SinkBroken`.
    pub fn end(&self) -> Result<SessionSummary, TraceError> {
        let mut active = self.lock().take().ok_or(TraceError::SessionNotOpen)?;

        write_footer(&mut active.sink)?;

        if active.broken {
            warn!("Session '{}' ended with a broken sink", active.name);
            return Err(TraceError::SinkBroken { name: active.name });
        }

        info!(
            "Session '{}' ended ({} events)",
            active.name, active.event_count
        );

        Ok(SessionSummary {
            name: active.name,
            event_count: active.event_count,
        })
    }

    /// Start a scoped timer that reports to this session
    pub fn timer(&self, name: impl Into<Cow<'static, str>>) -> ScopedTimer<'_> {
        ScopedTimer::new(self, name)
    }

    pub fn is_open(&self) -> bool {
        self.lock().is_some()
    }

    /// Events written since the last `begin` (0 when closed)
    pub fn event_count(&self) -> u64 {
        self.lock().as_ref().map_or(0, |active| active.event_count)
    }

    /// Name of the open session, if any
    pub fn name(&self) -> Option<String> {
        self.lock().as_ref().map(|active| active.name.clone())
    }
}

fn ensure_closed(state: &Option<ActiveSession>) -> Result<(), TraceError> {
    match state {
        Some(active) => Err(TraceError::SessionAlreadyOpen {
            name: active.name.clone(),
        }),
        None => Ok(()),
    }
}

fn open(
    state: &mut Option<ActiveSession>,
    name: String,
    mut sink: TraceSink,
) -> Result<(), TraceError> {
    write_header(&mut sink)?;

    info!("Session '{}' started", name);

    *state = Some(ActiveSession {
        name,
        sink,
        event_count: 0,
        broken: false,
    });
    Ok(())
}

impl Drop for Session {
    fn drop(&mut self) {
        let state = self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(mut active) = state.take() {
            if let Err(e) = write_footer(&mut active.sink) {
                warn!("Session '{}' could not be finalized: {}", active.name, e);
            }
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.lock();
        f.debug_struct("Session")
            .field("is_open", &state.is_some())
            .field("name", &state.as_ref().map(|a| a.name.as_str()))
            .field("event_count", &state.as_ref().map_or(0, |a| a.event_count))
            .finish()
    }
}
