/*!
 * Sync Race Library
 * Thread-synchronization primitives and the race harness that compares them
 */

pub mod core;
pub mod filter;
pub mod monitoring;
pub mod race;

// Re-exports
pub use crate::core::sync::{CriticalSection, Strategy, StrategyKind};
pub use crate::core::{HarnessError, HarnessResult};
pub use monitoring::{init_tracing, StopWatch};
pub use race::{RaceConfig, RaceHarness, RaceReport, RaceResult, StrategyRun};
