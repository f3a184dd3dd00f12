/*!
 * Synchronization Race
 *
 * Spawns a fixed pool of racers per strategy; each racer repeatedly enters
 * the strategy's critical section, prints one random character, and leaves,
 * until it has printed its quota. Completion times are collected per racer.
 */

mod config;
mod harness;
mod output;
mod report;

pub use config::RaceConfig;
pub use harness::{race_worker, random_printable, RaceHarness};
pub use output::RaceOutput;
pub use report::{RaceReport, RaceResult, StrategyRun};
