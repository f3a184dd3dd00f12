/*!
 * Spin-Wait Ready Flag
 *
 * Single-flag handoff: one side publishes readiness, the other busy-polls
 * until it observes it. Never parks the thread.
 *
 * # Design: Two-Phase Backoff
 *
 * 1. **Tight spin phase** (first `SPIN_RETRIES` polls): `spin_loop()` hint
 * 2. **Yield phase** (afterwards): `yield_now()` every poll
 *
 * There is no sleep phase. A waiter stays runnable until the flag flips.
 */

use crate::core::limits::SPIN_RETRIES;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Ready flag polled by busy-waiting
///
/// `notify` is a release store and `wait` an acquire load, so everything the
/// notifier wrote before `notify` is visible to the waiter after `wait`.
#[derive(Debug, Default)]
#[repr(align(64))]
pub struct SpinWait {
    ready: AtomicBool,
}

impl SpinWait {
    /// Create a flag in the not-ready state
    pub const fn new() -> Self {
        Self {
            ready: AtomicBool::new(false),
        }
    }

    /// Spin until the flag is set
    ///
    /// Returns the number of polls that observed the flag unset.
    pub fn wait(&self) -> u32 {
        let mut polls = 0u32;

        while !self.ready.load(Ordering::Acquire) {
            if polls < SPIN_RETRIES {
                std::hint::spin_loop();
            } else {
                thread::yield_now();
            }
            polls = polls.saturating_add(1);
        }

        polls
    }

    /// Publish readiness
    #[inline]
    pub fn notify(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Clear readiness for the next round
    #[inline]
    pub fn reset(&self) {
        self.ready.store(false, Ordering::Release);
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }
}
