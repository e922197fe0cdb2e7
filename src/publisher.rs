//! Publisher that broadcasts items to registered subscribers.

use crate::error::{NotifierError, Result};
use crate::subscribers::{same_subscriber, Subscriber};
use crate::types::{PublisherConfig, PublisherStats};
use parking_lot::RwLock;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared handle to a registered subscriber.
pub type SubscriberHandle<T> = Arc<dyn Subscriber<T>>;

/// Broadcasts items to subscribers, synchronously and in registration order.
///
/// All operations take `&self`. Locks are never held while a subscriber runs,
/// so a subscriber may call back into the publisher from `receive`.
pub struct Publisher<T> {
    config: PublisherConfig,
    /// Registered subscribers, in registration order. Duplicates allowed.
    subscribers: RwLock<Vec<SubscriberHandle<T>>>,
    /// Most recently published item.
    latest_item: RwLock<Option<T>>,
    published: AtomicU64,
    deliveries: AtomicU64,
}

impl<T: Clone> Publisher<T> {
    /// Create a publisher with the default config.
    pub fn new() -> Self {
        Self::with_config(PublisherConfig::default())
    }

    /// Create a publisher with a custom config.
    pub fn with_config(config: PublisherConfig) -> Self {
        let subscribers = Vec::with_capacity(config.initial_capacity);
        Self {
            config,
            subscribers: RwLock::new(subscribers),
            latest_item: RwLock::new(None),
            published: AtomicU64::new(0),
            deliveries: AtomicU64::new(0),
        }
    }

    // --- Registration ---

    /// Append a subscriber. Registering the same subscriber twice makes it
    /// receive every item twice.
    pub fn add_subscriber(&self, subscriber: SubscriberHandle<T>) {
        let name = subscriber.name().to_string();
        self.subscribers.write().push(subscriber);

        tracing::info!(
            publisher = %self.config.name,
            subscriber = %name,
            "{} has been added as a new subscriber",
            name
        );
    }

    /// Remove the first registration of `subscriber`.
    ///
    /// Fails with [`NotifierError::SubscriberNotFound`] if it is not
    /// registered, leaving the list untouched.
    pub fn remove_subscriber<S>(&self, subscriber: &Arc<S>) -> Result<()>
    where
        S: Subscriber<T> + ?Sized,
    {
        let name = subscriber.name().to_string();

        {
            let mut subs = self.subscribers.write();
            match subs.iter().position(|s| same_subscriber(s, subscriber)) {
                Some(pos) => {
                    subs.remove(pos);
                }
                None => {
                    tracing::debug!(
                        publisher = %self.config.name,
                        subscriber = %name,
                        "remove requested for unregistered subscriber"
                    );
                    return Err(NotifierError::SubscriberNotFound(name));
                }
            }
        }

        tracing::info!(
            publisher = %self.config.name,
            subscriber = %name,
            "{} has been removed as subscriber",
            name
        );
        Ok(())
    }

    // --- Broadcasting ---

    /// Store `item` as the latest item and deliver it to every subscriber.
    ///
    /// The item delivered is always the one passed in, even if another thread
    /// publishes concurrently.
    pub fn publish(&self, item: T) {
        *self.latest_item.write() = Some(item.clone());
        self.published.fetch_add(1, Ordering::Relaxed);
        self.deliver(&item);
    }

    /// Deliver the latest item to every subscriber registered right now.
    ///
    /// Does nothing if no item has been published yet, rather than handing
    /// subscribers an empty value: `receive` always gets a real item.
    pub fn notify(&self) {
        let Some(item) = self.latest_item.read().clone() else {
            tracing::debug!(publisher = %self.config.name, "nothing published yet");
            return;
        };
        self.deliver(&item);
    }

    /// Call `receive(item)` on a snapshot of the subscriber list.
    ///
    /// Registrations changed from inside a `receive` call take effect on the
    /// next broadcast.
    fn deliver(&self, item: &T) {
        let snapshot: Vec<SubscriberHandle<T>> = self.subscribers.read().clone();

        tracing::debug!(
            publisher = %self.config.name,
            subscribers = snapshot.len(),
            "notifying subscribers"
        );

        for subscriber in &snapshot {
            subscriber.receive(item);
            self.deliveries.fetch_add(1, Ordering::Relaxed);
        }
    }

    // --- Accessors ---

    /// The most recently published item, if any.
    pub fn latest_item(&self) -> Option<T> {
        self.latest_item.read().clone()
    }

    /// Number of registrations (duplicates counted).
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().len()
    }

    /// Subscriber names in registration order.
    pub fn subscriber_names(&self) -> Vec<String> {
        self.subscribers
            .read()
            .iter()
            .map(|s| s.name().to_string())
            .collect()
    }

    /// Whether `subscriber` is currently registered at least once.
    pub fn is_subscribed<S>(&self, subscriber: &Arc<S>) -> bool
    where
        S: Subscriber<T> + ?Sized,
    {
        self.subscribers
            .read()
            .iter()
            .any(|s| same_subscriber(s, subscriber))
    }

    /// Label used in log events.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Config this publisher was created with.
    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// Current publish and delivery counters.
    pub fn stats(&self) -> PublisherStats {
        PublisherStats {
            published: self.published.load(Ordering::Relaxed),
            deliveries: self.deliveries.load(Ordering::Relaxed),
            subscribers: self.subscriber_count(),
        }
    }
}

impl<T: Clone> Default for Publisher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Publisher")
            .field("name", &self.config.name)
            .field("subscribers", &self.subscribers.read().len())
            .finish_non_exhaustive()
    }
}
