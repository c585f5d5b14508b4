use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Sink;
use crate::argument::{Argument, render_arguments};
use crate::channel::Channel;
use crate::line_mode::LineMode;

/// [`ConsoleSink`] bound to the process's standard output and error streams.
pub type StdioSink = ConsoleSink<io::Stdout, io::Stderr>;

/// Line-oriented sink that renders each call into one of two writers.
///
/// [`Channel::Error`] and [`Channel::Warn`] are written to the error writer,
/// [`Channel::Info`] and [`Channel::Debug`] to the output writer. Each call
/// renders its arguments with [`render_arguments`] and, under the default
/// [`LineMode::WithNewline`], terminates the line. Plain strings are rendered
/// quoted; wrap them in [`Text`](crate::Text) to write them verbatim.
///
/// Both writers sit behind mutexes so the sink can be shared across threads.
/// Write failures are discarded: a console never reports errors back to the
/// code that is logging.
///
/// # Examples
///
/// ```
/// use logging_sink::{ConsoleSink, Sink};
///
/// let sink = ConsoleSink::new(Vec::new(), Vec::new());
/// sink.info(&[&format_args!("ready"), &3]);
/// sink.error(&[&format_args!("failed")]);
///
/// let (out, err, _) = sink.into_parts();
/// assert_eq!(out, b"ready 3\n");
/// assert_eq!(err, b"failed\n");
/// ```
pub struct ConsoleSink<O, E> {
    out: Mutex<O>,
    err: Mutex<E>,
    line_mode: Mutex<LineMode>,
}

impl StdioSink {
    /// Creates a sink writing to [`io::stdout`] and [`io::stderr`].
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl Default for StdioSink {
    fn default() -> Self {
        Self::stdio()
    }
}

impl<O, E> ConsoleSink<O, E> {
    /// Creates a sink that appends a newline after each call.
    #[must_use]
    pub fn new(out: O, err: E) -> Self {
        Self::with_line_mode(out, err, LineMode::WithNewline)
    }

    /// Creates a sink with the provided [`LineMode`].
    #[must_use]
    pub fn with_line_mode(out: O, err: E, line_mode: LineMode) -> Self {
        Self {
            out: Mutex::new(out),
            err: Mutex::new(err),
            line_mode: Mutex::new(line_mode),
        }
    }

    /// Returns the current [`LineMode`].
    #[must_use]
    pub fn line_mode(&self) -> LineMode {
        *lock(&self.line_mode)
    }

    /// Updates the [`LineMode`] used for subsequent calls.
    pub fn set_line_mode(&self, line_mode: LineMode) {
        *lock(&self.line_mode) = line_mode;
    }

    /// Consumes the sink and returns the output writer, error writer, and line mode.
    #[must_use]
    pub fn into_parts(self) -> (O, E, LineMode) {
        (
            into_inner(self.out),
            into_inner(self.err),
            into_inner(self.line_mode),
        )
    }
}

impl<O, E> ConsoleSink<O, E>
where
    O: Write,
    E: Write,
{
    fn write_line(writer: &mut dyn Write, line: &str, line_mode: LineMode) -> io::Result<()> {
        writer.write_all(line.as_bytes())?;
        if line_mode.append_newline() {
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }
}

impl<O, E> Sink for ConsoleSink<O, E>
where
    O: Write,
    E: Write,
{
    fn emit(&self, channel: Channel, args: &[Argument<'_>]) {
        let line = render_arguments(args);
        let line_mode = self.line_mode();
        let _ = if channel.is_diagnostic() {
            Self::write_line(&mut *lock(&self.err), &line, line_mode)
        } else {
            Self::write_line(&mut *lock(&self.out), &line, line_mode)
        };
    }
}

impl<O, E> fmt::Debug for ConsoleSink<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSink")
            .field("line_mode", &self.line_mode())
            .finish_non_exhaustive()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn into_inner<T>(mutex: Mutex<T>) -> T {
    mutex.into_inner().unwrap_or_else(PoisonError::into_inner)
}
