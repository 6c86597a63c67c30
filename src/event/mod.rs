//! Events and the timing sources they are built from.
//!
//! This module handles:
//! - The immutable `Event` record
//! - The process-wide microsecond clock
//! - Per-thread identifiers

pub mod clock;
pub mod schema;
pub mod thread_id;

// Re-export main types
pub use clock::Clock;
pub use schema::Event;
pub use thread_id::current_thread_id;
