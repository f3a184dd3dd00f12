/*!
 * Race Limits and Constants
 *
 * Centralized location for the race workload sizes, spin budgets and
 * filter defaults. Organized by domain.
 *
 * - Performance-relevant constants are marked with [PERF]
 */

use std::time::Duration;

// =============================================================================
// RACE WORKLOAD
// =============================================================================

/// Worker threads spawned per strategy (3 racers)
/// Also the barrier party size
pub const NUM_THREADS: usize = 3;

/// Characters each racer emits before finishing (5)
pub const TARGET_COUNT: usize = 5;

/// Permits held by the semaphores used in the race (binary semaphore)
pub const RACE_PERMITS: usize = 1;

/// Printable ASCII range used for emitted characters (space through tilde)
pub const PRINTABLE_FIRST: u8 = b' ';
pub const PRINTABLE_LAST: u8 = b'~';

/// Upper bound for a whole strategy run on an idle machine
/// Used by liveness checks, the primitives themselves never time out
pub const RACE_LIVENESS_TIMEOUT: Duration = Duration::from_secs(5);

// =============================================================================
// SPIN TUNING
// =============================================================================

/// Tight spins before yielding to the scheduler (10 iterations)
/// [PERF] Covers sub-microsecond hold times without a context switch
pub const SPIN_RETRIES: u32 = 10;

/// Runs slower than this are logged as slow at warn level
pub const SLOW_RACE_THRESHOLD: Duration = Duration::from_millis(100);

// =============================================================================
// PRODUCT FILTER
// =============================================================================

/// Partitions used by the parallel filter (5 workers)
pub const FILTER_PARTITIONS: usize = 5;

/// Default calorie ceiling per portion (kcal)
pub const FILTER_MAX_CALORIES: f64 = 100.0;

/// Default carbohydrate ceiling, exclusive (grams)
pub const FILTER_MAX_CARBS: f64 = 15.0;
