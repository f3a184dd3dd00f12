/*!
 * Race Output
 *
 * Line-oriented transcript shared by all racers, guarded by its own lock
 * independent of the strategy under test. Each line is written and flushed
 * while the lock is held, so lines never interleave.
 *
 * Write failures are latched rather than returned: a racer that bailed out
 * mid-race could leave its peers stuck at a barrier. The first error is kept,
 * later lines are dropped, and the harness reports it after joining.
 */

use crate::core::sync::StrategyKind;
use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};

struct Sink<W> {
    writer: W,
    lines: usize,
    error: Option<io::Error>,
}

/// Shared, line-atomic transcript writer
pub struct RaceOutput<W> {
    sink: Mutex<Sink<W>>,
}

impl<W: Write> RaceOutput<W> {
    pub fn new(writer: W) -> Self {
        Self {
            sink: Mutex::new(Sink {
                writer,
                lines: 0,
                error: None,
            }),
        }
    }

    /// `Thread <id> (<Strategy>): <char>`
    pub fn emit(&self, thread_id: usize, strategy: StrategyKind, ch: char) {
        self.write_line(format_args!("Thread {thread_id} ({strategy}): {ch}"));
    }

    /// `Thread <id> finished race in <elapsed> milliseconds.`
    pub fn finish(&self, thread_id: usize, elapsed_ms: f64) {
        self.write_line(format_args!(
            "Thread {thread_id} finished race in {elapsed_ms:.3} milliseconds."
        ));
    }

    fn write_line(&self, line: fmt::Arguments<'_>) {
        let mut sink = self.sink.lock();
        if sink.error.is_some() {
            return;
        }

        let written = writeln!(sink.writer, "{line}").and_then(|_| sink.writer.flush());
        match written {
            Ok(()) => sink.lines += 1,
            Err(e) => sink.error = Some(e),
        }
    }

    /// Lines successfully written so far
    pub fn lines_written(&self) -> usize {
        self.sink.lock().lines
    }

    /// Take the latched write error, re-enabling output
    pub fn take_error(&self) -> Option<io::Error> {
        self.sink.lock().error.take()
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().writer
    }
}

impl<W> fmt::Debug for RaceOutput<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sink = self.sink.lock();
        f.debug_struct("RaceOutput")
            .field("lines", &sink.lines)
            .field("failed", &sink.error.is_some())
            .finish()
    }
}
