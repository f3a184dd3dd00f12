/*!
 * Monitor
 *
 * Explicit enter/exit mutual exclusion with a condition-variable wait queue.
 *
 * State machine: Unlocked --enter--> Locked --exit--> Unlocked
 *
 * Unlike a guard-based lock, `exit` is a separate call. Calling it without a
 * matching `enter` on the same thread is a caller contract violation; it is
 * not detected and simply reopens the monitor.
 */

use parking_lot::{Condvar, Mutex};

/// Non-reentrant monitor
#[derive(Debug, Default)]
pub struct Monitor {
    locked: Mutex<bool>,
    condvar: Condvar,
}

impl Monitor {
    pub const fn new() -> Self {
        Self {
            locked: Mutex::new(false),
            condvar: Condvar::new(),
        }
    }

    /// Block while the monitor is held, then take it
    pub fn enter(&self) {
        let mut locked = self.locked.lock();
        while *locked {
            self.condvar.wait(&mut locked);
        }
        *locked = true;
    }

    /// Take the monitor only if it is free right now
    pub fn try_enter(&self) -> bool {
        let mut locked = self.locked.lock();
        if *locked {
            return false;
        }
        *locked = true;
        true
    }

    /// Release the monitor and wake one waiter
    pub fn exit(&self) {
        let mut locked = self.locked.lock();
        *locked = false;
        drop(locked);
        self.condvar.notify_one();
    }

    pub fn is_locked(&self) -> bool {
        *self.locked.lock()
    }
}
