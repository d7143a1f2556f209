//! Progress hooks for batch parsing.
//!
//! The batch runner reports through [`ProgressCallback`] and never touches
//! a terminal itself.

use std::sync::Arc;

/// Receives progress updates while addresses are processed.
pub trait ProgressCallback: Send + Sync {
    /// Number of addresses expected, when known up front.
    fn set_total(&self, total: u64);

    /// Records `delta` more processed addresses.
    fn inc(&self, delta: u64);

    /// Label shown next to the count.
    fn set_message(&self, msg: String);

    /// Ends reporting with a summary line.
    fn finish(&self, msg: String);
}

/// Discards all updates. Used for stdin input, where no total is known.
pub struct NullProgress;

impl ProgressCallback for NullProgress {
    fn set_total(&self, _total: u64) {}
    fn inc(&self, _delta: u64) {}
    fn set_message(&self, _msg: String) {}
    fn finish(&self, _msg: String) {}
}

/// [`NullProgress`] behind an [`Arc`].
#[must_use]
pub fn null_progress() -> Arc<dyn ProgressCallback> {
    Arc::new(NullProgress)
}
