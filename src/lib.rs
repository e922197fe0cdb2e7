//! # Notifier
//!
//! An in-process publish-subscribe notifier. A [`Publisher`] keeps an ordered
//! list of subscribers and the most recently published item. Publishing
//! delivers the item to every subscriber, synchronously, in registration
//! order.
//!
//! ## Core Concepts
//!
//! - **Publisher**: registers, deregisters and broadcasts
//! - **Subscriber**: anything implementing [`Subscriber`], identified by its allocation
//! - **Snapshot delivery**: changes made from inside `receive` apply to the next broadcast
//!
//! ## Example
//!
//! ```ignore
//! use notifier::{ConsoleSubscriber, Publisher};
//! use std::sync::Arc;
//!
//! let publisher = Publisher::new();
//! let reader = Arc::new(ConsoleSubscriber::new("Subscriber-1"));
//!
//! publisher.add_subscriber(reader.clone());
//! publisher.publish("New sports article has been published");
//!
//! publisher.remove_subscriber(&reader)?;
//! ```

pub mod error;
pub mod publisher;
pub mod subscribers;
pub mod types;

// Re-exports
pub use error::{NotifierError, Result};
pub use publisher::{Publisher, SubscriberHandle};
pub use subscribers::{
    ChannelSubscriber, CollectingSubscriber, ConsoleSubscriber, FnSubscriber, Subscriber,
};
pub use types::{PublisherConfig, PublisherStats};
