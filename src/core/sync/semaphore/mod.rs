/*!
 * Counting Semaphores
 *
 * Two permit-counting primitives with the same contract:
 * - `Semaphore`: atomic count, waiters park on its address (futex-style)
 * - `BoundedSemaphore`: count under a mutex, waiters sleep on a condvar
 *
 * Both block while the count is zero, never let it exceed the initial
 * capacity, and drop redundant releases.
 */

mod bounded;
mod parking;

pub use bounded::BoundedSemaphore;
pub use parking::Semaphore;
