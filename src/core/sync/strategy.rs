/*!
 * Race Strategy
 *
 * Binds each `StrategyKind` to a primitive and to the way the race brackets
 * one emission with it.
 *
 * # Design: Enum Dispatch Over a Closed Set
 *
 * `CriticalSection::with_section` is generic over the body, so the trait is
 * not object safe. The seven strategies are a closed set anyway: `Strategy`
 * holds an enum of the concrete primitives and matches exhaustively, which
 * inlines every body and makes adding a primitive a compile error until each
 * match is updated.
 */

use super::config::StrategyKind;
use super::locks::{ExclusiveLock, Monitor, SpinLock};
use super::semaphore::{BoundedSemaphore, Semaphore};
use super::traits::CriticalSection;
use super::wait::{Barrier, SpinWait};
use crate::core::limits::RACE_PERMITS;

/// Runs a release action when dropped, including during unwinding
struct OnExit<F: FnOnce()>(Option<F>);

impl<F: FnOnce()> OnExit<F> {
    fn new(exit: F) -> Self {
        Self(Some(exit))
    }
}

impl<F: FnOnce()> Drop for OnExit<F> {
    fn drop(&mut self) {
        if let Some(exit) = self.0.take() {
            exit();
        }
    }
}

impl CriticalSection for ExclusiveLock {
    #[inline]
    fn with_section<R>(&self, _participant: usize, body: impl FnOnce() -> R) -> R {
        let _guard = self.acquire();
        body()
    }

    fn name(&self) -> &'static str {
        StrategyKind::Mutex.name()
    }
}

impl CriticalSection for Semaphore {
    #[inline]
    fn with_section<R>(&self, _participant: usize, body: impl FnOnce() -> R) -> R {
        self.acquire();
        let _release = OnExit::new(|| {
            self.release();
        });
        body()
    }

    fn name(&self) -> &'static str {
        StrategyKind::Semaphore.name()
    }
}

impl CriticalSection for BoundedSemaphore {
    #[inline]
    fn with_section<R>(&self, _participant: usize, body: impl FnOnce() -> R) -> R {
        self.acquire();
        let _release = OnExit::new(|| {
            self.release();
        });
        body()
    }

    fn name(&self) -> &'static str {
        StrategyKind::SemaphoreSlim.name()
    }
}

impl CriticalSection for SpinLock {
    #[inline]
    fn with_section<R>(&self, _participant: usize, body: impl FnOnce() -> R) -> R {
        let _guard = self.acquire();
        body()
    }

    fn name(&self) -> &'static str {
        StrategyKind::SpinLock.name()
    }
}

impl CriticalSection for Monitor {
    #[inline]
    fn with_section<R>(&self, _participant: usize, body: impl FnOnce() -> R) -> R {
        self.enter();
        let _exit = OnExit::new(|| self.exit());
        body()
    }

    fn name(&self) -> &'static str {
        StrategyKind::Monitor.name()
    }
}

/// Emission gated by a rendezvous: emit, then wait for the whole party
impl CriticalSection for Barrier {
    #[inline]
    fn with_section<R>(&self, _participant: usize, body: impl FnOnce() -> R) -> R {
        let result = body();
        self.arrive_and_wait();
        result
    }

    fn name(&self) -> &'static str {
        StrategyKind::Barrier.name()
    }
}

/// One spin-wait flag per participant, each used as a self relay
///
/// A racer notifies its own flag, spins on it, emits, then resets it. Racers
/// never touch each other's flags, so this strategy provides no exclusion;
/// the spin-wait only acts as a yield point between emissions.
#[derive(Debug)]
pub struct SpinRelay {
    lanes: Box<[SpinWait]>,
}

impl SpinRelay {
    pub fn new(parties: usize) -> Self {
        Self {
            lanes: (0..parties.max(1)).map(|_| SpinWait::new()).collect(),
        }
    }

    /// The flag owned by `participant`
    pub fn lane(&self, participant: usize) -> &SpinWait {
        &self.lanes[participant]
    }
}

impl CriticalSection for SpinRelay {
    #[inline]
    fn with_section<R>(&self, participant: usize, body: impl FnOnce() -> R) -> R {
        let lane = self.lane(participant);
        lane.notify();
        lane.wait();
        let result = body();
        lane.reset();
        result
    }

    fn name(&self) -> &'static str {
        StrategyKind::SpinWait.name()
    }
}

/// Strategy implementation (enum dispatch for zero overhead)
#[derive(Debug)]
enum StrategyImpl {
    Mutex(ExclusiveLock),
    Semaphore(Semaphore),
    SemaphoreSlim(BoundedSemaphore),
    SpinLock(SpinLock),
    Monitor(Monitor),
    SpinWait(SpinRelay),
    Barrier(Barrier),
}

/// A freshly built primitive for one strategy run
///
/// # Examples
///
/// ```
/// use sync_race::core::sync::{CriticalSection, Strategy, StrategyKind};
///
/// let strategy = Strategy::new(StrategyKind::Monitor, 3);
/// let value = strategy.with_section(0, || 2 + 2);
/// assert_eq!(value, 4);
/// assert_eq!(strategy.name(), "Monitor");
/// ```
#[derive(Debug)]
pub struct Strategy {
    kind: StrategyKind,
    inner: StrategyImpl,
}

impl Strategy {
    /// Build the primitive for `kind`, sized for `parties` racers
    pub fn new(kind: StrategyKind, parties: usize) -> Self {
        Self::with_permits(kind, parties, RACE_PERMITS)
    }

    /// Like `new`, with an explicit permit count for the semaphore strategies
    pub fn with_permits(kind: StrategyKind, parties: usize, permits: usize) -> Self {
        let inner = match kind {
            StrategyKind::Mutex => StrategyImpl::Mutex(ExclusiveLock::new()),
            StrategyKind::Semaphore => StrategyImpl::Semaphore(Semaphore::new(permits)),
            StrategyKind::SemaphoreSlim => {
                StrategyImpl::SemaphoreSlim(BoundedSemaphore::new(permits))
            }
            StrategyKind::SpinLock => StrategyImpl::SpinLock(SpinLock::new(())),
            StrategyKind::Monitor => StrategyImpl::Monitor(Monitor::new()),
            StrategyKind::SpinWait => StrategyImpl::SpinWait(SpinRelay::new(parties)),
            StrategyKind::Barrier => StrategyImpl::Barrier(Barrier::new(parties)),
        };

        Self { kind, inner }
    }

    #[inline]
    pub fn kind(&self) -> StrategyKind {
        self.kind
    }
}

impl CriticalSection for Strategy {
    #[inline(always)]
    fn with_section<R>(&self, participant: usize, body: impl FnOnce() -> R) -> R {
        match &self.inner {
            StrategyImpl::Mutex(s) => s.with_section(participant, body),
            StrategyImpl::Semaphore(s) => s.with_section(participant, body),
            StrategyImpl::SemaphoreSlim(s) => s.with_section(participant, body),
            StrategyImpl::SpinLock(s) => s.with_section(participant, body),
            StrategyImpl::Monitor(s) => s.with_section(participant, body),
            StrategyImpl::SpinWait(s) => s.with_section(participant, body),
            StrategyImpl::Barrier(s) => s.with_section(participant, body),
        }
    }

    fn name(&self) -> &'static str {
        self.kind.name()
    }
}
