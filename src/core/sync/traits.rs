/*!
 * Synchronization Traits
 *
 * Core abstraction shared by every race strategy.
 *
 * # Design: Scoped Sections Over Raw Enter/Exit
 *
 * Each strategy brackets a closure with its own acquire/release pair instead
 * of exposing unpaired `enter`/`exit` calls. The release always runs on the
 * same thread that acquired, and an unmatched release cannot be expressed.
 * `Strategy` uses enum dispatch over the implementations; the trait is what
 * each primitive adapter implements.
 */

/// Result of a release or notify operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeResult {
    /// Successfully woke N waiters (N >= 1)
    Woken(usize),
    /// No waiters were waiting
    NoWaiters,
    /// The permit was discarded because the count was already at capacity
    Saturated,
}

/// A provider of critical sections for a fixed set of participants
///
/// Implementations must be:
/// - **Thread-safe**: shared by reference between all racers
/// - **Balanced**: every acquire performed by `with_section` is released
///   before it returns
///
/// `participant` is the zero-based racer index, always `< parties` for the
/// party size the provider was built with. Only per-participant primitives
/// (the spin-wait relay) look at it.
pub trait CriticalSection: Send + Sync {
    /// Run `body` inside one critical section and return its result
    fn with_section<R>(&self, participant: usize, body: impl FnOnce() -> R) -> R;

    /// Label used in the race transcript
    fn name(&self) -> &'static str;
}
