/*!
 * Race Report
 * Per-racer results and their aggregation across strategies
 */

use crate::core::sync::StrategyKind;
use serde::{Deserialize, Serialize};

/// Outcome of one racer in one strategy run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    /// 1-based racer id, as printed in the transcript
    pub thread_id: usize,
    pub strategy: StrategyKind,
    pub elapsed_ms: f64,
    /// Always equal to the configured target
    pub emitted: usize,
}

/// All racers of one strategy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyRun {
    pub strategy: StrategyKind,
    /// Ordered by thread id
    pub results: Vec<RaceResult>,
    /// Wall-clock time from spawning the first racer to joining the last
    pub elapsed_ms: f64,
}

impl StrategyRun {
    pub fn total_emitted(&self) -> usize {
        self.results.iter().map(|r| r.emitted).sum()
    }

    /// Time of the racer that finished last
    pub fn slowest_ms(&self) -> f64 {
        self.results
            .iter()
            .map(|r| r.elapsed_ms)
            .fold(0.0, f64::max)
    }
}

/// Every strategy run, in race order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RaceReport {
    pub runs: Vec<StrategyRun>,
}

impl RaceReport {
    pub fn push(&mut self, run: StrategyRun) {
        self.runs.push(run);
    }

    pub fn total_emitted(&self) -> usize {
        self.runs.iter().map(StrategyRun::total_emitted).sum()
    }

    /// Run with the lowest wall-clock time
    pub fn fastest(&self) -> Option<&StrategyRun> {
        self.runs
            .iter()
            .min_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
