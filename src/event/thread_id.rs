//! Small, stable integer identifiers for threads.
//!
//! Each thread draws the next number from a process-wide counter the first
//! time it asks, then keeps it for its whole life.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_THREAD_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    static THREAD_ID: u64 = NEXT_THREAD_ID.fetch_add(1, Ordering::Relaxed);
}

/// Identifier of the calling thread, unique within the process
pub fn current_thread_id() -> u64 {
    THREAD_ID.with(|id| *id)
}
