//! Subscribers that receive broadcast items.
//!
//! Anything implementing [`Subscriber`] can be registered with a publisher.
//! This module also ships a few ready-made ones:
//! - [`ConsoleSubscriber`] prints `"<name>, <item>"` lines
//! - [`CollectingSubscriber`] keeps everything it receives
//! - [`FnSubscriber`] wraps a closure
//! - [`ChannelSubscriber`] forwards into a crossbeam channel
//!
//! # Example
//!
//! ```ignore
//! let (sub, rx) = ChannelSubscriber::new("audit");
//! publisher.add_subscriber(Arc::new(sub));
//!
//! publisher.publish("hello".to_string());
//! assert_eq!(rx.recv().unwrap(), "hello");
//! ```

mod builtin;
mod subscriber;

pub use builtin::{ChannelSubscriber, CollectingSubscriber, ConsoleSubscriber};
pub(crate) use subscriber::same_subscriber;
pub use subscriber::{FnSubscriber, Subscriber};
