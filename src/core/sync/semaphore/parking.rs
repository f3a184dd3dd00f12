/*!
 * Parking Counting Semaphore
 *
 * Uses parking_lot_core for futex-like parking on the permit word itself.
 * On Linux this maps to futex syscalls.
 *
 * # Design
 *
 * The permit count lives in a single atomic; the fast path is one CAS.
 * Waiters park keyed on the count's address. The park validation re-reads
 * the count under the parking bucket lock, so a release that lands between a
 * failed CAS and the park is never lost: the waiter sees the permit and
 * retries instead of sleeping.
 */

use crate::core::sync::traits::WakeResult;
use parking_lot_core::{park, unpark_one, ParkToken, UnparkToken};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Counting semaphore whose permits never exceed the initial capacity
#[derive(Debug)]
pub struct Semaphore {
    permits: AtomicUsize,
    capacity: usize,
}

impl Semaphore {
    /// Create a semaphore with `capacity` permits available
    pub const fn new(capacity: usize) -> Self {
        Self {
            permits: AtomicUsize::new(capacity),
            capacity,
        }
    }

    #[inline]
    fn key(&self) -> usize {
        &self.permits as *const AtomicUsize as usize
    }

    /// Take a permit if one is available right now
    #[inline]
    pub fn try_acquire(&self) -> bool {
        self.permits
            .fetch_update(Ordering::Acquire, Ordering::Relaxed, |n| n.checked_sub(1))
            .is_ok()
    }

    /// Block until a permit is available, then take it
    pub fn acquire(&self) {
        loop {
            if self.try_acquire() {
                return;
            }

            // Every park outcome loops back to the CAS.
            // Safety: the key is the address of a field borrowed for the whole
            // call, and the callbacks neither park nor panic.
            let _ = unsafe {
                park(
                    self.key(),
                    || self.permits.load(Ordering::Acquire) == 0,
                    || {},
                    |_, _| {},
                    ParkToken(0),
                    None,
                )
            };
        }
    }

    /// Return a permit and wake one parked waiter
    ///
    /// A release that would push the count past capacity is dropped.
    pub fn release(&self) -> WakeResult {
        let capacity = self.capacity;
        let returned = self
            .permits
            .fetch_update(Ordering::Release, Ordering::Relaxed, |n| {
                (n < capacity).then_some(n + 1)
            })
            .is_ok();

        if !returned {
            return WakeResult::Saturated;
        }

        // Safety: same key as `acquire`; the callback does not touch parking_lot
        let result = unsafe { unpark_one(self.key(), |_| UnparkToken(0)) };
        if result.unparked_threads == 0 {
            WakeResult::NoWaiters
        } else {
            WakeResult::Woken(result.unparked_threads)
        }
    }

    pub fn available(&self) -> usize {
        self.permits.load(Ordering::Acquire)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
