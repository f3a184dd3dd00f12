/*!
 * Cyclic Barrier with Generation Counter
 *
 * Fixed-party rendezvous built on parking_lot::Condvar.
 *
 * # Design: Generations Over a Bare Arrival Count
 *
 * A bare arrival counter that resets to zero lets a fast thread lap into the
 * next round while slower peers are still inside the previous wait, and a
 * spurious wake-up is indistinguishable from a real release. Every round
 * therefore carries a generation number: the last arrival bumps it and wakes
 * everyone, and a waiter only leaves once the generation it arrived in has
 * ended.
 */

use parking_lot::{Condvar, Mutex};

#[derive(Debug)]
struct BarrierState {
    arrived: usize,
    generation: u64,
}

/// Result of `Barrier::arrive_and_wait`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarrierWaitResult {
    leader: bool,
    generation: u64,
}

impl BarrierWaitResult {
    /// True for exactly one participant per round: the last to arrive
    pub fn is_leader(&self) -> bool {
        self.leader
    }

    /// The round this wait completed (0-based)
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Reusable rendezvous for a fixed number of parties
///
/// # Invariants
///
/// - `0 <= arrived < parties` between rounds
/// - all parties of generation `g` leave before any party can complete `g + 1`
#[derive(Debug)]
pub struct Barrier {
    state: Mutex<BarrierState>,
    condvar: Condvar,
    parties: usize,
}

impl Barrier {
    /// Create a barrier for `parties` threads (0 behaves like 1)
    pub fn new(parties: usize) -> Self {
        Self {
            state: Mutex::new(BarrierState {
                arrived: 0,
                generation: 0,
            }),
            condvar: Condvar::new(),
            parties: parties.max(1),
        }
    }

    pub fn parties(&self) -> usize {
        self.parties
    }

    /// Block until all parties of the current round have arrived
    pub fn arrive_and_wait(&self) -> BarrierWaitResult {
        let mut state = self.state.lock();
        let generation = state.generation;
        state.arrived += 1;

        if state.arrived == self.parties {
            state.arrived = 0;
            state.generation = state.generation.wrapping_add(1);
            drop(state);
            self.condvar.notify_all();
            return BarrierWaitResult {
                leader: true,
                generation,
            };
        }

        while state.generation == generation {
            self.condvar.wait(&mut state);
        }

        BarrierWaitResult {
            leader: false,
            generation,
        }
    }

    /// Parties currently blocked in the open round
    pub fn arrived(&self) -> usize {
        self.state.lock().arrived
    }
}
