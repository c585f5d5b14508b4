use std::sync::Arc;

use crate::argument::Argument;
use crate::channel::Channel;

mod console;
mod recording;
#[cfg(feature = "tracing")]
mod tracing;

pub use console::{ConsoleSink, StdioSink};
pub use recording::{Record, RecordingSink};
#[cfg(feature = "tracing")]
pub use self::tracing::TracingSink;

/// Destination for leveled logging calls.
///
/// A sink exposes one function per [`Channel`]. Each provided method forwards
/// to [`emit`](Self::emit) with the matching channel, so implementors only
/// need `emit` but may override an individual channel when it needs special
/// handling. Arguments arrive exactly as the caller supplied them, in order.
///
/// # Examples
///
/// ```
/// use std::sync::Mutex;
/// use logging_sink::{Argument, Channel, Sink};
///
/// #[derive(Default)]
/// struct Counter(Mutex<usize>);
///
/// impl Sink for Counter {
///     fn emit(&self, _channel: Channel, args: &[Argument<'_>]) {
///         *self.0.lock().unwrap() += args.len();
///     }
/// }
///
/// let counter = Counter::default();
/// counter.error(&[&"a", &"b"]);
/// counter.debug(&[]);
/// assert_eq!(*counter.0.lock().unwrap(), 2);
/// ```
pub trait Sink {
    /// Delivers `args` on `channel`.
    fn emit(&self, channel: Channel, args: &[Argument<'_>]);

    /// Delivers `args` on [`Channel::Error`].
    fn error(&self, args: &[Argument<'_>]) {
        self.emit(Channel::Error, args);
    }

    /// Delivers `args` on [`Channel::Warn`].
    fn warn(&self, args: &[Argument<'_>]) {
        self.emit(Channel::Warn, args);
    }

    /// Delivers `args` on [`Channel::Info`].
    fn info(&self, args: &[Argument<'_>]) {
        self.emit(Channel::Info, args);
    }

    /// Delivers `args` on [`Channel::Debug`].
    fn debug(&self, args: &[Argument<'_>]) {
        self.emit(Channel::Debug, args);
    }
}

macro_rules! forward_sink {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<S: Sink + ?Sized> Sink for $ty {
                fn emit(&self, channel: Channel, args: &[Argument<'_>]) {
                    (**self).emit(channel, args);
                }

                fn error(&self, args: &[Argument<'_>]) {
                    (**self).error(args);
                }

                fn warn(&self, args: &[Argument<'_>]) {
                    (**self).warn(args);
                }

                fn info(&self, args: &[Argument<'_>]) {
                    (**self).info(args);
                }

                fn debug(&self, args: &[Argument<'_>]) {
                    (**self).debug(args);
                }
            }
        )*
    };
}

forward_sink!(&S, Box<S>, Arc<S>);
