//! RAII scope timer.
//!
//! A [`ScopedTimer`] captures its start instant when created and submits
//! exactly one [`Event`] to its session: on the first explicit
//! [`stop`](ScopedTimer::stop), or when it is dropped if it was never stopped.
//! Dropping covers every way out of a scope, including `?` and panics.

use super::writer::Session;
use crate::event::{current_thread_id, Clock, Event};
use crate::utils::error::TraceError;
use log::warn;
use std::borrow::Cow;
use std::time::{Duration, Instant};

/// Times one region of code and reports it to a [`Session`]
#[must_use = "a timer records the scope it is bound to; bind it with `let _timer = ...`"]
pub struct ScopedTimer<'s> {
    session: &'s Session,
    name: Cow<'static, str>,
    start: Instant,
    stopped: bool,
}

impl<'s> ScopedTimer<'s> {
    pub fn new(session: &'s Session, name: impl Into<Cow<'static, str>>) -> Self {
        let start = Clock::global().now();
        Self {
            session,
            name: name.into(),
            start,
            stopped: false,
        }
    }

    /// Stop the timer and write its event.
    ///
    /// Only the first call records; later calls return `Ok(())`. A failed
    /// write still counts as the stop, so the event is never retried on drop.
    ///
    /// # Errors
    /// * `TraceError::SessionNotOpen` - the session was never begun or has ended
    pub fn stop(&mut self) -> Result<(), TraceError> {
        if self.stopped {
            return Ok(());
        }
        let end = Instant::now();
        self.stopped = true;

        let clock = Clock::global();
        let event = Event::new(
            self.name.clone(),
            clock.micros(self.start),
            clock.micros(end),
            current_thread_id(),
        )?;

        self.session.write_event(event)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Time since the timer was created
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if self.stopped {
            return;
        }
        if let Err(e) = self.stop() {
            warn!("Dropped event for scope '{}': {}", self.name, e);
        }
    }
}
