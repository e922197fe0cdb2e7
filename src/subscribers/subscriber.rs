//! The subscriber capability.

use std::fmt;
use std::sync::Arc;

/// Receiver of items broadcast by a [`Publisher`](crate::Publisher).
///
/// `receive` is called synchronously from `publish`, once per registration,
/// in registration order. It has no failure path: implementations handle
/// their own errors.
pub trait Subscriber<T>: Send + Sync {
    /// Identifying name, used in confirmations and errors.
    fn name(&self) -> &str;

    /// Handle one broadcast item.
    fn receive(&self, item: &T);
}

/// Whether two handles point at the same subscriber.
///
/// Identity is the allocation, not the name.
pub(crate) fn same_subscriber<A: ?Sized, B: ?Sized>(a: &Arc<A>, b: &Arc<B>) -> bool {
    Arc::as_ptr(a).cast::<()>() == Arc::as_ptr(b).cast::<()>()
}

/// Subscriber backed by a closure.
pub struct FnSubscriber<F> {
    name: String,
    callback: F,
}

impl<F> FnSubscriber<F> {
    pub fn new(name: impl Into<String>, callback: F) -> Self {
        Self {
            name: name.into(),
            callback,
        }
    }
}

impl<T, F> Subscriber<T> for FnSubscriber<F>
where
    F: Fn(&T) + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, item: &T) {
        (self.callback)(item)
    }
}

impl<F> fmt::Debug for FnSubscriber<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnSubscriber")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
