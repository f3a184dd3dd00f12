/*!
 * Blocking Mutual Exclusion Lock
 * Binary free/held lock over parking_lot::Mutex
 */

use parking_lot::{Mutex, MutexGuard};

/// Blocking lock with explicit acquire/release vocabulary
///
/// Not reentrant: acquiring twice on one thread deadlocks.
#[derive(Debug, Default)]
pub struct ExclusiveLock {
    inner: Mutex<()>,
}

/// Proof of holding an `ExclusiveLock`; releases on drop
#[must_use = "if unused, the lock will release immediately"]
pub struct ExclusiveGuard<'a> {
    _held: MutexGuard<'a, ()>,
}

impl ExclusiveLock {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(()),
        }
    }

    /// Block until the lock is free, then hold it
    #[inline]
    pub fn acquire(&self) -> ExclusiveGuard<'_> {
        ExclusiveGuard {
            _held: self.inner.lock(),
        }
    }

    /// Hold the lock only if it is free right now
    #[inline]
    pub fn try_acquire(&self) -> Option<ExclusiveGuard<'_>> {
        self.inner.try_lock().map(|held| ExclusiveGuard { _held: held })
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }
}

impl ExclusiveGuard<'_> {
    /// Free the lock and wake at most one blocked acquirer
    #[inline]
    pub fn release(self) {
        drop(self);
    }
}
