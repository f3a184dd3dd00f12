/*!
 * Harness behaviour across every strategy: quotas, exclusion, liveness
 */

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;
use sync_race::core::limits::RACE_LIVENESS_TIMEOUT;
use sync_race::{CriticalSection, RaceConfig, RaceHarness, Strategy, StrategyKind};

/// Wraps a strategy and records how many racers were inside at once
struct Occupancy {
    inner: Strategy,
    inside: AtomicUsize,
    peak: AtomicUsize,
}

impl Occupancy {
    fn new(inner: Strategy) -> Self {
        Self {
            inner,
            inside: AtomicUsize::new(0),
            peak: AtomicUsize::new(0),
        }
    }

    fn peak(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }
}

impl CriticalSection for Occupancy {
    fn with_section<R>(&self, participant: usize, body: impl FnOnce() -> R) -> R {
        self.inner.with_section(participant, || {
            let now = self.inside.fetch_add(1, Ordering::SeqCst) + 1;
            self.peak.fetch_max(now, Ordering::SeqCst);
            thread::yield_now();
            let result = body();
            self.inside.fetch_sub(1, Ordering::SeqCst);
            result
        })
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

#[test]
fn test_every_racer_hits_quota() {
    let harness = RaceHarness::new(RaceConfig::default(), Vec::new()).unwrap();
    let report = harness.run_all().unwrap();

    let order: Vec<_> = report.runs.iter().map(|r| r.strategy).collect();
    assert_eq!(order, StrategyKind::ALL.to_vec());

    for run in &report.runs {
        assert_eq!(run.results.len(), 3, "{} lost a racer", run.strategy);
        for result in &run.results {
            assert_eq!(result.emitted, 5);
            assert_eq!(result.strategy, run.strategy);
            assert!(result.elapsed_ms >= 0.0);
        }
    }
    assert_eq!(report.total_emitted(), 7 * 15);
}

#[test]
fn test_harness_excludes_for_exclusive_strategies() {
    let config = RaceConfig::new(4, 50);
    let harness = RaceHarness::new(config, std::io::sink()).unwrap();

    for kind in StrategyKind::ALL.into_iter().filter(|k| k.is_exclusive()) {
        let tracked = Occupancy::new(Strategy::new(kind, config.threads));
        let run = harness.run_with(kind, &tracked).unwrap();

        assert_eq!(run.total_emitted(), 200);
        assert_eq!(tracked.peak(), 1, "{kind} overlapped");
    }
}

#[test]
fn test_harness_bounded_permits() {
    let config = RaceConfig::new(5, 40).with_permits(2);
    let harness = RaceHarness::new(config, std::io::sink()).unwrap();

    for kind in [StrategyKind::Semaphore, StrategyKind::SemaphoreSlim] {
        let tracked = Occupancy::new(Strategy::with_permits(kind, config.threads, config.permits));
        harness.run_with(kind, &tracked).unwrap();
        assert!(tracked.peak() <= 2, "{kind} peak {}", tracked.peak());
    }
}

#[test]
fn test_barrier_lets_whole_party_in() {
    let config = RaceConfig::default();
    let harness = RaceHarness::new(config, std::io::sink()).unwrap();
    let tracked = Occupancy::new(Strategy::new(StrategyKind::Barrier, config.threads));

    let run = harness.run_with(StrategyKind::Barrier, &tracked).unwrap();
    assert_eq!(run.total_emitted(), 15);
    // Sections are not exclusive, the barrier only orders rounds
    assert!(tracked.peak() <= config.threads);
}

#[test]
fn test_every_strategy_finishes_in_time() {
    for kind in StrategyKind::ALL {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let harness = RaceHarness::new(RaceConfig::default(), Vec::new()).unwrap();
            let _ = tx.send(harness.run(kind).map(|run| run.total_emitted()));
        });

        let emitted = rx
            .recv_timeout(RACE_LIVENESS_TIMEOUT)
            .unwrap_or_else(|_| panic!("{kind} race did not finish within {RACE_LIVENESS_TIMEOUT:?}"))
            .unwrap();
        assert_eq!(emitted, 15);
    }
}

#[test]
fn test_solo_racer_every_strategy() {
    let harness = RaceHarness::new(RaceConfig::solo(5), Vec::new()).unwrap();
    let report = harness.run_all().unwrap();

    for run in &report.runs {
        assert_eq!(run.results.len(), 1);
        assert_eq!(run.results[0].thread_id, 1);
        assert_eq!(run.results[0].emitted, 5);
    }
}
