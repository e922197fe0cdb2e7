//! News feed walkthrough: two readers subscribe, one leaves, two articles go out.
//!
//! Run with `cargo run --example news`.

use notifier::{ConsoleSubscriber, Publisher, PublisherConfig};
use std::sync::Arc;

fn main() -> notifier::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .without_time()
        .init();

    let publisher: Publisher<String> = Publisher::with_config(PublisherConfig::named("news"));
    let reader1 = Arc::new(ConsoleSubscriber::new("Subscriber-1"));
    let reader2 = Arc::new(ConsoleSubscriber::new("Subscriber-2"));

    publisher.add_subscriber(reader1.clone());
    publisher.add_subscriber(reader2.clone());
    println!();

    publisher.publish("New sports article has been published".to_string());
    println!();

    publisher.remove_subscriber(&reader1)?;
    println!();

    publisher.publish("New global article has been published".to_string());

    tracing::info!(stats = ?publisher.stats(), "done");
    Ok(())
}
