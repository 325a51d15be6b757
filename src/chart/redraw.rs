//! Redraw coalescing for resize-driven repaints.
//!
//! Resize notifications can arrive far faster than the display refreshes.
//! [`RedrawScheduler`] is a single-slot pending flag: any number of
//! [`request`] calls between frames collapse into one redraw, and the
//! frame that performs it always sees the latest input because the data
//! is read at frame time, not at request time.
//!
//! [`request`]: RedrawScheduler::request

use std::sync::atomic::{AtomicBool, Ordering};

/// Single-slot "run on next frame" primitive.
#[derive(Debug, Default)]
pub struct RedrawScheduler {
    pending: AtomicBool,
}

impl RedrawScheduler {
    pub const fn new() -> Self {
        Self {
            pending: AtomicBool::new(false),
        }
    }

    /// Mark a redraw as wanted.
    ///
    /// Returns `true` if this call scheduled the redraw, `false` if one
    /// was already pending (the caller need not notify the host again).
    pub fn request(&self) -> bool {
        !self.pending.swap(true, Ordering::AcqRel)
    }

    /// Consume the pending flag at the start of a frame.
    ///
    /// Returns `true` if a redraw was pending. At most one call per
    /// requested batch returns `true`.
    pub fn begin_frame(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}
