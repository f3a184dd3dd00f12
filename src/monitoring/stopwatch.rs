/*!
 * Stopwatch
 * Monotonic wall-clock interval timer
 */

use std::time::{Duration, Instant};

/// Interval timer started at construction
#[derive(Debug, Clone, Copy)]
pub struct StopWatch {
    start: Instant,
}

impl StopWatch {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in fractional milliseconds
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }
}

impl Default for StopWatch {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_elapsed_monotonic() {
        let sw = StopWatch::start();
        thread::sleep(Duration::from_millis(10));
        let first = sw.elapsed_ms();
        assert!(first >= 10.0);
        assert!(sw.elapsed_ms() >= first);
    }
}
