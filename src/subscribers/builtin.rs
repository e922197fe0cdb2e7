//! Ready-made subscribers.

use super::subscriber::Subscriber;
use crossbeam_channel::{unbounded, Receiver, Sender};
use parking_lot::Mutex;
use std::fmt::{self, Display};
use std::io::{self, Write};

/// Writes `"<name>, <item>"` lines to a text sink (stdout by default).
pub struct ConsoleSubscriber {
    name: String,
    out: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSubscriber {
    /// Subscriber writing to stdout.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_writer(name, io::stdout())
    }

    /// Subscriber writing to an arbitrary sink.
    pub fn with_writer(name: impl Into<String>, writer: impl Write + Send + 'static) -> Self {
        Self {
            name: name.into(),
            out: Mutex::new(Box::new(writer)),
        }
    }
}

impl<T: Display> Subscriber<T> for ConsoleSubscriber {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, item: &T) {
        let mut out = self.out.lock();
        if let Err(e) = writeln!(out, "{}, {}", self.name, item).and_then(|_| out.flush()) {
            tracing::warn!(subscriber = %self.name, error = %e, "failed to write item");
        }
    }
}

impl fmt::Debug for ConsoleSubscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSubscriber")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Records every received item, in order.
#[derive(Debug)]
pub struct CollectingSubscriber<T> {
    name: String,
    items: Mutex<Vec<T>>,
}

impl<T: Clone> CollectingSubscriber<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Mutex::new(Vec::new()),
        }
    }

    /// Copy of everything received so far.
    pub fn items(&self) -> Vec<T> {
        self.items.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    pub fn clear(&self) {
        self.items.lock().clear();
    }
}

impl<T: Clone + Send> Subscriber<T> for CollectingSubscriber<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, item: &T) {
        self.items.lock().push(item.clone());
    }
}

/// Forwards items into a channel.
///
/// The channel is unbounded, so `receive` never blocks. Once the receiver is
/// dropped, items are discarded.
#[derive(Debug)]
pub struct ChannelSubscriber<T> {
    name: String,
    sender: Sender<T>,
}

impl<T> ChannelSubscriber<T> {
    /// Create a subscriber and the receiving end of its channel.
    pub fn new(name: impl Into<String>) -> (Self, Receiver<T>) {
        let (sender, receiver) = unbounded();
        (
            Self {
                name: name.into(),
                sender,
            },
            receiver,
        )
    }
}

impl<T: Clone + Send> Subscriber<T> for ChannelSubscriber<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, item: &T) {
        if self.sender.send(item.clone()).is_err() {
            tracing::debug!(subscriber = %self.name, "receiver dropped, discarding item");
        }
    }
}
