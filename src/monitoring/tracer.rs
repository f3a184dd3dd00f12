/*!
 * Structured Tracing
 * Diagnostics for race runs using the tracing crate
 *
 * Features:
 * - Human-readable or JSON logs on stderr (stdout carries the race transcript)
 * - One span per strategy run with its results recorded as fields
 * - Slow runs flagged at warn level
 */

use crate::core::limits::SLOW_RACE_THRESHOLD;
use std::time::Instant;
use tracing::{debug, info, span, warn, Level, Span};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - RACE_TRACE_JSON: Enable JSON output (default: false)
///
/// Calling it again after a subscriber is installed is a no-op.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Check if JSON output is requested
    let use_json = std::env::var("RACE_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        // JSON output for parsing
        let installed = registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
            .is_ok();
        if installed {
            info!("Structured tracing initialized with JSON output");
        }
    } else {
        // Human-readable output for development
        let installed = registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .compact(),
            )
            .try_init()
            .is_ok();
        if installed {
            debug!("Structured tracing initialized");
        }
    }
}

/// Span covering one strategy run
pub struct RaceSpan {
    span: Span,
    start: Instant,
    strategy: &'static str,
}

impl RaceSpan {
    pub fn new(strategy: &'static str, threads: usize, target: usize) -> Self {
        let span = span!(
            Level::INFO,
            "race",
            strategy = strategy,
            threads = threads,
            target = target,
            emitted = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        let _entered = span.enter();
        debug!(strategy, threads, target, "race started");
        drop(_entered);

        Self {
            span,
            start: Instant::now(),
            strategy,
        }
    }

    /// Total characters emitted by all racers
    pub fn record_emitted(&self, count: usize) {
        self.span.record("emitted", count);
    }

    pub fn record_result(&self, success: bool) {
        self.span
            .record("result", if success { "success" } else { "error" });
    }

    pub fn record_error(&self, error: &str) {
        self.span.record("error", error);
        self.span.record("result", "error");
    }

    /// The span itself, for parenting worker spans on other threads
    pub fn span(&self) -> &Span {
        &self.span
    }
}

impl Drop for RaceSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        let _entered = self.span.enter();
        self.span.record("duration_ms", duration.as_millis() as u64);

        if duration > SLOW_RACE_THRESHOLD {
            warn!(
                strategy = self.strategy,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow race detected"
            );
        } else {
            debug!(
                strategy = self.strategy,
                duration_us = duration.as_micros() as u64,
                "race completed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;

    /// In-memory writer shared with the subscriber
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn text(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(f: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, f);
        captured.text()
    }

    #[test]
    fn test_race_span_records() {
        let logs = capture(|| {
            let span = RaceSpan::new("Mutex", 3, 5);
            span.record_emitted(15);
            span.record_result(true);
        });

        assert!(logs.contains("race started"), "{logs}");
        assert!(logs.contains("race completed"), "{logs}");
        assert!(logs.contains("emitted=15"), "{logs}");
        assert!(logs.contains("success"), "{logs}");
    }

    #[test]
    fn test_race_span_error() {
        let logs = capture(|| {
            let span = RaceSpan::new("Barrier", 3, 5);
            span.record_error("racer 2 panicked");
        });

        assert!(logs.contains("racer 2 panicked"), "{logs}");
        assert!(!logs.contains("success"), "{logs}");
    }

    #[test]
    fn test_init_tracing_idempotent() {
        init_tracing();
        init_tracing();
        assert!(tracing::dispatcher::has_been_set());
    }
}
