/*!
 * Test-and-Set Spin Lock
 *
 * Busy-waiting lock owning the value it protects.
 *
 * # Memory Ordering
 *
 * The successful compare-exchange uses `Acquire` and the release store uses
 * `Release`. Every write made under the lock therefore happens-before the next
 * holder's reads, even for plain (non-atomic) data behind the guard.
 */

use crate::core::limits::SPIN_RETRIES;
use std::cell::UnsafeCell;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

/// Spin lock around a value of type `T`
pub struct SpinLock<T = ()> {
    locked: AtomicBool,
    value: UnsafeCell<T>,
}

// Safety: access to `value` is serialized by `locked`
unsafe impl<T: Send> Send for SpinLock<T> {}
unsafe impl<T: Send> Sync for SpinLock<T> {}

/// Exclusive access to the protected value; clears the flag on drop
#[must_use = "if unused, the lock will release immediately"]
pub struct SpinGuard<'a, T> {
    lock: &'a SpinLock<T>,
}

impl<T> SpinLock<T> {
    pub const fn new(value: T) -> Self {
        Self {
            locked: AtomicBool::new(false),
            value: UnsafeCell::new(value),
        }
    }

    /// Take the lock if the flag is clear right now
    #[inline]
    pub fn try_acquire(&self) -> Option<SpinGuard<'_, T>> {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| SpinGuard { lock: self })
    }

    /// Spin until the flag can be set
    pub fn acquire(&self) -> SpinGuard<'_, T> {
        let mut spins = 0u32;
        loop {
            if let Some(guard) = self.try_acquire() {
                return guard;
            }

            // Wait on a plain load so contended polling stays in shared cache state
            while self.locked.load(Ordering::Relaxed) {
                if spins < SPIN_RETRIES {
                    std::hint::spin_loop();
                    spins += 1;
                } else {
                    thread::yield_now();
                }
            }
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }
}

impl<T> std::fmt::Debug for SpinLock<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpinLock")
            .field("locked", &self.is_locked())
            .finish_non_exhaustive()
    }
}

impl<T: Default> Default for SpinLock<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> SpinGuard<'_, T> {
    /// Clear the flag with release ordering
    #[inline]
    pub fn release(self) {
        drop(self);
    }
}

impl<T> Deref for SpinGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        // Safety: the guard proves exclusive ownership of the flag
        unsafe { &*self.lock.value.get() }
    }
}

impl<T> DerefMut for SpinGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        // Safety: the guard proves exclusive ownership of the flag
        unsafe { &mut *self.lock.value.get() }
    }
}

impl<T> Drop for SpinGuard<'_, T> {
    fn drop(&mut self) {
        self.lock.locked.store(false, Ordering::Release);
    }
}
