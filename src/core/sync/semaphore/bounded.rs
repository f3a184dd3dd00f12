/*!
 * Bounded Semaphore
 *
 * Permit counter guarded by a parking_lot::Mutex with a Condvar signal.
 * Slower than the parking semaphore but every transition happens under one
 * lock, which keeps waiter accounting exact.
 */

use crate::core::sync::traits::WakeResult;
use parking_lot::{Condvar, Mutex};

#[derive(Debug)]
struct Permits {
    available: usize,
    waiting: usize,
}

/// Counting semaphore with an enforced upper bound
///
/// # Invariants
///
/// - `0 <= available <= capacity`
#[derive(Debug)]
pub struct BoundedSemaphore {
    state: Mutex<Permits>,
    condvar: Condvar,
    capacity: usize,
}

impl BoundedSemaphore {
    /// Create a semaphore with `capacity` permits available
    pub fn new(capacity: usize) -> Self {
        Self {
            state: Mutex::new(Permits {
                available: capacity,
                waiting: 0,
            }),
            condvar: Condvar::new(),
            capacity,
        }
    }

    /// Block while no permit is available, then take one
    pub fn acquire(&self) {
        let mut state = self.state.lock();
        while state.available == 0 {
            state.waiting += 1;
            self.condvar.wait(&mut state);
            state.waiting -= 1;
        }
        state.available -= 1;
    }

    pub fn try_acquire(&self) -> bool {
        let mut state = self.state.lock();
        if state.available == 0 {
            return false;
        }
        state.available -= 1;
        true
    }

    /// Return a permit and signal one waiter
    ///
    /// A release at full capacity is dropped.
    pub fn release(&self) -> WakeResult {
        let mut state = self.state.lock();
        if state.available == self.capacity {
            return WakeResult::Saturated;
        }
        state.available += 1;

        if state.waiting == 0 {
            return WakeResult::NoWaiters;
        }
        drop(state);

        if self.condvar.notify_one() {
            WakeResult::Woken(1)
        } else {
            WakeResult::NoWaiters
        }
    }

    pub fn available(&self) -> usize {
        self.state.lock().available
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
