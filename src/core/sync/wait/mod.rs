/*!
 * Wait Primitives
 *
 * Primitives where a thread waits for a condition rather than for ownership:
 * - Spin-wait ready flag (busy-poll, never parks)
 * - Cyclic barrier (parks until the whole party has arrived)
 */

mod barrier;
mod spinwait;

pub use barrier::{Barrier, BarrierWaitResult};
pub use spinwait::SpinWait;
