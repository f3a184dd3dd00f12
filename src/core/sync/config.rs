/*!
 * Strategy Selection
 *
 * The closed set of synchronization strategies raced by the harness
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Blocking mutual exclusion lock
    Mutex,
    /// Parking counting semaphore with a single permit
    Semaphore,
    /// Lock + condition bounded semaphore with a single permit
    SemaphoreSlim,
    /// Test-and-set busy-wait lock
    SpinLock,
    /// Enter/exit monitor with a waiting queue
    Monitor,
    /// Per-racer spin-wait self relay (no cross-thread exclusion)
    SpinWait,
    /// Cyclic barrier after every emission (lock-step rounds)
    Barrier,
}

impl StrategyKind {
    /// Every strategy, in race order
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Mutex,
        StrategyKind::Semaphore,
        StrategyKind::SemaphoreSlim,
        StrategyKind::SpinLock,
        StrategyKind::Monitor,
        StrategyKind::SpinWait,
        StrategyKind::Barrier,
    ];

    /// Label printed in the race transcript
    pub const fn name(self) -> &'static str {
        match self {
            StrategyKind::Mutex => "Mutex",
            StrategyKind::Semaphore => "Semaphore",
            StrategyKind::SemaphoreSlim => "SemaphoreSlim",
            StrategyKind::SpinLock => "SpinLock",
            StrategyKind::Monitor => "Monitor",
            StrategyKind::SpinWait => "SpinWait",
            StrategyKind::Barrier => "Barrier",
        }
    }

    /// Whether at most one racer can be inside a section at a time
    pub const fn is_exclusive(self) -> bool {
        match self {
            StrategyKind::Mutex
            | StrategyKind::Semaphore
            | StrategyKind::SemaphoreSlim
            | StrategyKind::SpinLock
            | StrategyKind::Monitor => true,
            StrategyKind::SpinWait | StrategyKind::Barrier => false,
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_race_order() {
        let names: Vec<_> = StrategyKind::ALL.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            [
                "Mutex",
                "Semaphore",
                "SemaphoreSlim",
                "SpinLock",
                "Monitor",
                "SpinWait",
                "Barrier"
            ]
        );
    }

    #[test]
    fn test_all_distinct() {
        let set: HashSet<_> = StrategyKind::ALL.iter().collect();
        assert_eq!(set.len(), StrategyKind::ALL.len());
    }

    #[test]
    fn test_display_matches_name() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_exclusive_set() {
        let exclusive: Vec<_> = StrategyKind::ALL
            .into_iter()
            .filter(|k| k.is_exclusive())
            .collect();
        assert_eq!(exclusive.len(), 5);
        assert!(!StrategyKind::Barrier.is_exclusive());
    }
}
