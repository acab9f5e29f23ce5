//! Change-coalescing flag between parameter writes and the update loop.

use crate::store::ChangeListener;
use std::sync::atomic::{AtomicBool, Ordering};

/// A single atomic bit: any number of marks between ticks collapse into
/// one pending rebuild.
///
/// The writer side calls [`mark`](DirtyFlag::mark) from wherever a
/// parameter changes; the update loop calls [`take`](DirtyFlag::take)
/// once per tick and rebuilds only when it returns `true`. `take` is a
/// test-and-clear so a mark landing right after it is kept for the next
/// tick, never lost.
#[derive(Debug, Default)]
pub struct DirtyFlag {
    pending: AtomicBool,
}

impl DirtyFlag {
    /// A clean flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that a rebuild is needed. Idempotent between takes.
    #[inline]
    pub fn mark(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Clears the flag and reports whether it was set.
    #[inline]
    pub fn take(&self) -> bool {
        self.pending
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// Non-consuming peek, for diagnostics only.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }
}

impl ChangeListener for DirtyFlag {
    fn parameter_changed(&self, _index: usize, _value: f32) {
        self.mark();
    }
}
