//! Scope Trace
//!
//! Wall-clock instrumentation of named code regions across threads,
//! written incrementally as a Chrome trace-event JSON document that
//! `chrome://tracing` or <https://ui.perfetto.dev> can open.
//!
//! ## Getting Started
//!
//! ```no_run
//! use scope_trace::Session;
//!
//! let session = Session::new();
//! session.begin("Profile", "result.json")?;
//! {
//!     let _timer = session.timer("load");
//!     // ... work ...
//! }
//! session.end()?;
//! # Ok::<(), scope_trace::TraceError>(())
//! ```

pub mod commands;
pub mod event;
pub mod macros;
pub mod output;
pub mod session;
pub mod utils;

pub use event::Event;
pub use session::{ScopedTimer, Session, SessionSummary};
pub use utils::error::TraceError;
