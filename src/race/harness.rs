/*!
 * Race Harness
 *
 * Runs the same contended workload under each synchronization strategy.
 *
 * # Flow
 *
 * For every strategy, in `StrategyKind::ALL` order:
 * 1. Build a fresh primitive (no state crosses strategy boundaries)
 * 2. Spawn one named OS thread per racer, all held at a start gate
 * 3. Open the gate; each racer loops section → emit → count until its quota
 * 4. Join every racer before moving on
 *
 * The gate exists so a failed spawn can be unwound: racers already started
 * are told to stand down instead of waiting forever at a barrier sized for
 * the full party.
 */

use super::config::RaceConfig;
use super::output::RaceOutput;
use super::report::{RaceReport, RaceResult, StrategyRun};
use crate::core::errors::{HarnessError, HarnessResult};
use crate::core::limits::{PRINTABLE_FIRST, PRINTABLE_LAST};
use crate::core::sync::{CriticalSection, Strategy, StrategyKind};
use crate::monitoring::{RaceSpan, StopWatch};
use parking_lot::{Condvar, Mutex};
use rand::Rng;
use std::io::Write;
use std::thread;
use tracing::{debug, error, info};

/// Pick a printable ASCII character (space through tilde)
pub fn random_printable<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(rng.gen_range(PRINTABLE_FIRST..=PRINTABLE_LAST))
}

/// One racer: emit `target` characters, each inside a critical section
///
/// `participant` is the 0-based racer index handed to the section; the
/// transcript and the result carry it as the 1-based thread id. The random
/// generator is thread-local, so racers share no RNG state.
pub fn race_worker<S, W>(
    participant: usize,
    strategy: StrategyKind,
    section: &S,
    output: &RaceOutput<W>,
    target: usize,
) -> RaceResult
where
    S: CriticalSection + ?Sized,
    W: Write,
{
    let stopwatch = StopWatch::start();
    let mut rng = rand::thread_rng();
    let thread_id = participant + 1;
    let mut emitted = 0;

    while emitted < target {
        section.with_section(participant, || {
            output.emit(thread_id, strategy, random_printable(&mut rng));
        });
        emitted += 1;
    }

    let elapsed_ms = stopwatch.elapsed_ms();
    output.finish(thread_id, elapsed_ms);

    RaceResult {
        thread_id,
        strategy,
        elapsed_ms,
        emitted,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gate {
    Closed,
    Open,
    Aborted,
}

/// Holds racers until every thread of the run exists
struct StartGate {
    state: Mutex<Gate>,
    condvar: Condvar,
}

impl StartGate {
    fn new() -> Self {
        Self {
            state: Mutex::new(Gate::Closed),
            condvar: Condvar::new(),
        }
    }

    /// Block while closed; true if the race should go ahead
    fn wait(&self) -> bool {
        let mut state = self.state.lock();
        while *state == Gate::Closed {
            self.condvar.wait(&mut state);
        }
        *state == Gate::Open
    }

    fn set(&self, gate: Gate) {
        *self.state.lock() = gate;
        self.condvar.notify_all();
    }
}

/// Runs races against a shared output
pub struct RaceHarness<W> {
    config: RaceConfig,
    output: RaceOutput<W>,
}

impl<W: Write + Send> RaceHarness<W> {
    pub fn new(config: RaceConfig, writer: W) -> HarnessResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            output: RaceOutput::new(writer),
        })
    }

    pub fn output(&self) -> &RaceOutput<W> {
        &self.output
    }

    pub fn into_writer(self) -> W {
        self.output.into_inner()
    }

    /// Race every strategy in order, joining fully between them
    pub fn run_all(&self) -> HarnessResult<RaceReport> {
        let mut report = RaceReport::default();

        for kind in StrategyKind::ALL {
            let run = self.run(kind)?;
            info!(
                strategy = %kind,
                elapsed_ms = run.elapsed_ms,
                slowest_ms = run.slowest_ms(),
                "strategy finished"
            );
            report.push(run);
        }

        Ok(report)
    }

    /// Race one strategy on a freshly built primitive
    pub fn run(&self, kind: StrategyKind) -> HarnessResult<StrategyRun> {
        let strategy = Strategy::with_permits(kind, self.config.threads, self.config.permits);
        self.run_with(kind, &strategy)
    }

    /// Race any critical-section provider under the label `kind`
    ///
    /// The provider must accept participants `0..threads`.
    pub fn run_with<S>(&self, kind: StrategyKind, section: &S) -> HarnessResult<StrategyRun>
    where
        S: CriticalSection + ?Sized,
    {
        let RaceConfig {
            threads, target, ..
        } = self.config;
        let race_span = RaceSpan::new(kind.name(), threads, target);
        let stopwatch = StopWatch::start();
        let gate = StartGate::new();
        let output = &self.output;

        let joined = thread::scope(|scope| {
            let mut handles = Vec::with_capacity(threads);

            for participant in 0..threads {
                let thread_id = participant + 1;
                let gate = &gate;
                let span = race_span.span().clone();
                let spawned = thread::Builder::new()
                    .name(format!("race-{kind}-{thread_id}"))
                    .spawn_scoped(scope, move || {
                        let _entered = span.enter();
                        if !gate.wait() {
                            return None;
                        }
                        let result = race_worker(participant, kind, section, output, target);
                        debug!(thread_id, elapsed_ms = result.elapsed_ms, "racer finished");
                        Some(result)
                    });

                match spawned {
                    Ok(handle) => handles.push((thread_id, handle)),
                    Err(source) => {
                        gate.set(Gate::Aborted);
                        for (_, handle) in handles {
                            let _ = handle.join();
                        }
                        return Err(HarnessError::Spawn { thread_id, source });
                    }
                }
            }

            gate.set(Gate::Open);

            let mut results = Vec::with_capacity(threads);
            let mut failure = None;
            for (thread_id, handle) in handles {
                match handle.join() {
                    Ok(Some(result)) => results.push(result),
                    Ok(None) => {}
                    Err(_) => {
                        failure.get_or_insert(HarnessError::WorkerPanicked {
                            thread_id,
                            strategy: kind.name(),
                        });
                    }
                }
            }

            match failure {
                Some(err) => Err(err),
                None => Ok(results),
            }
        });

        let results = match joined {
            Ok(results) => results,
            Err(err) => {
                // Clear the latched write error so it cannot surface on the next run
                if let Some(lost) = self.output.take_error() {
                    debug!(strategy = %kind, error = %lost, "output error dropped with aborted race");
                }
                error!(strategy = %kind, error = %err, "race aborted");
                race_span.record_error(&err.to_string());
                return Err(err);
            }
        };

        if let Some(err) = self.output.take_error() {
            race_span.record_error(&err.to_string());
            return Err(HarnessError::Output(err));
        }

        let run = StrategyRun {
            strategy: kind,
            results,
            elapsed_ms: stopwatch.elapsed_ms(),
        };
        race_span.record_emitted(run.total_emitted());
        race_span.record_result(true);

        Ok(run)
    }
}
