use crate::core::FetchStatus;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

const FINISHED: u8 = 0b01;
const SUCCESS: u8 = 0b10;

/// Tracks the outcome of pool refreshes and whether one is in flight.
///
/// The status is packed into one atomic so readers never observe a
/// finished flag paired with the previous cycle's success flag. Readers
/// may still see `is_pending() == true` alongside the previous status.
#[derive(Debug, Default)]
pub struct FetchStateTracker {
    status: AtomicU8,
    refreshing: AtomicBool,
}

impl FetchStateTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the refresh slot. Returns `None` when another refresh holds it.
    ///
    /// The slot is released when the returned guard is dropped.
    pub fn mark_started(&self) -> Option<RefreshGuard<'_>> {
        self.refreshing
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RefreshGuard { tracker: self })
    }

    pub fn mark_completed(&self, success: bool) {
        let bits = if success { FINISHED | SUCCESS } else { FINISHED };
        self.status.store(bits, Ordering::Release);
    }

    pub fn status(&self) -> FetchStatus {
        let bits = self.status.load(Ordering::Acquire);
        FetchStatus {
            finished_fetch: bits & FINISHED != 0,
            success: bits & SUCCESS != 0,
        }
    }

    /// A refresh has finished at least once. Check `status().success` too.
    pub fn is_ready(&self) -> bool {
        self.status().finished_fetch
    }

    pub fn is_pending(&self) -> bool {
        self.refreshing.load(Ordering::Acquire)
    }
}

/// Holds the refresh slot; releasing it on drop covers every exit path.
#[derive(Debug)]
pub struct RefreshGuard<'a> {
    tracker: &'a FetchStateTracker,
}

impl Drop for RefreshGuard<'_> {
    fn drop(&mut self) {
        self.tracker.refreshing.store(false, Ordering::Release);
    }
}
