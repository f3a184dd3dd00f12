/*!
 * Race Configuration
 *
 * Workload sizes for a race run. There is no file or CLI layer: the binary
 * always races with the defaults, tests and benches build their own.
 */

use crate::core::errors::{HarnessError, HarnessResult};
use crate::core::limits::{NUM_THREADS, RACE_PERMITS, TARGET_COUNT};
use serde::{Deserialize, Serialize};

/// Race configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Racers per strategy, also the barrier party size
    pub threads: usize,
    /// Characters each racer emits
    pub target: usize,
    /// Permits held by the semaphore strategies
    pub permits: usize,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            threads: NUM_THREADS,
            target: TARGET_COUNT,
            permits: RACE_PERMITS,
        }
    }
}

impl RaceConfig {
    /// Configuration with binary semaphores
    pub const fn new(threads: usize, target: usize) -> Self {
        Self {
            threads,
            target,
            permits: RACE_PERMITS,
        }
    }

    /// Configuration for a single uncontended racer
    pub const fn solo(target: usize) -> Self {
        Self::new(1, target)
    }

    pub const fn with_permits(mut self, permits: usize) -> Self {
        self.permits = permits;
        self
    }

    /// Reject configurations that cannot race or would never finish
    pub fn validate(&self) -> HarnessResult<()> {
        if self.threads == 0 {
            return Err(HarnessError::InvalidConfig("threads must be >= 1".into()));
        }
        if self.target == 0 {
            return Err(HarnessError::InvalidConfig("target must be >= 1".into()));
        }
        if self.permits == 0 {
            // Semaphore strategies would block forever
            return Err(HarnessError::InvalidConfig("permits must be >= 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RaceConfig::default();
        assert_eq!(config.threads, 3);
        assert_eq!(config.target, 5);
        assert_eq!(config.permits, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        assert!(RaceConfig::new(0, 5).validate().is_err());
        assert!(RaceConfig::new(3, 0).validate().is_err());
        assert!(RaceConfig::new(3, 5).with_permits(0).validate().is_err());
        assert!(RaceConfig::solo(1).validate().is_ok());
    }
}
