//! The recorded unit of a trace: one timed region on one thread.

use crate::utils::error::TraceError;
use std::borrow::Cow;

/// One completed scope, ready to be written to a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: Cow<'static, str>,
    start: u64,
    end: u64,
    thread_id: u64,
}

impl Event {
    /// Build an event from microsecond timestamps.
    ///
    /// # Errors
    /// * `TraceError::InvalidEvent` - `end` is earlier than `start`
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        start: u64,
        end: u64,
        thread_id: u64,
    ) -> Result<Self, TraceError> {
        if end < start {
            return Err(TraceError::InvalidEvent { start, end });
        }

        Ok(Self {
            name: name.into(),
            start,
            end,
            thread_id,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Start timestamp in microseconds since the epoch
    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn thread_id(&self) -> u64 {
        self.thread_id
    }

    /// Elapsed microseconds
    pub fn duration(&self) -> u64 {
        self.end - self.start
    }
}
