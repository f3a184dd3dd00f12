/*!
 * Synchronization Primitives
 *
 * The primitives raced by the harness, and the strategy layer that puts
 * each one behind a common critical-section capability:
 * - Locks: blocking mutex, spin lock, monitor
 * - Semaphores: parking (futex-style) and bounded (mutex + condvar)
 * - Waits: spin-wait ready flag, cyclic barrier
 *
 * # Architecture
 *
 * Every primitive implements `CriticalSection`. `Strategy` picks one by
 * `StrategyKind` and dispatches through an enum, so a race can be written once
 * and run against each primitive in turn.
 */

mod config;
mod strategy;
mod traits;

pub mod locks;
pub mod semaphore;
pub mod wait;

pub use config::StrategyKind;
pub use strategy::{SpinRelay, Strategy};
pub use traits::{CriticalSection, WakeResult};

// Re-export primitives for direct use
pub use locks::{ExclusiveGuard, ExclusiveLock, Monitor, SpinGuard, SpinLock};
pub use semaphore::{BoundedSemaphore, Semaphore};
pub use wait::{Barrier, BarrierWaitResult, SpinWait};
