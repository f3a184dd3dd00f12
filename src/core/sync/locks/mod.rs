/*!
 * Lock-Based Synchronization Primitives
 *
 * Primitives granting exclusive ownership of a critical section:
 * - Blocking mutual exclusion lock (parks waiters)
 * - Test-and-set spin lock (busy-waits)
 * - Monitor (explicit enter/exit with a wait queue)
 */

mod monitor;
mod mutex;
mod spin;

// Re-export public API
pub use monitor::Monitor;
pub use mutex::{ExclusiveGuard, ExclusiveLock};
pub use spin::{SpinGuard, SpinLock};
