use std::sync::{Mutex, MutexGuard, PoisonError};

use super::Sink;
use crate::argument::Argument;
use crate::channel::Channel;

/// One call captured by a [`RecordingSink`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The sink function that was invoked.
    pub channel: Channel,
    /// The `Debug` rendering of each argument, in call order.
    pub arguments: Vec<String>,
}

impl Record {
    /// Builds a record from a channel and already-rendered arguments.
    pub fn new<I, A>(channel: Channel, arguments: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            channel,
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }
}

/// In-memory sink that keeps every call it receives.
///
/// Arguments are rendered with `Debug` at the moment of the call, so later
/// mutation of the caller's values does not affect what was recorded.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Record>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Takes all recorded calls, leaving the recorder empty.
    pub fn drain(&self) -> Vec<Record> {
        self.lock().drain(..).collect()
    }

    /// Number of calls recorded and not yet drained.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no calls are pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for RecordingSink {
    fn emit(&self, channel: Channel, args: &[Argument<'_>]) {
        let arguments = args.iter().map(|arg| format!("{arg:?}")).collect();
        self.lock().push(Record { channel, arguments });
    }
}
