//! End-to-end publish/subscribe scenarios.

use notifier::{
    ChannelSubscriber, CollectingSubscriber, ConsoleSubscriber, FnSubscriber, Publisher,
    PublisherConfig, Subscriber,
};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn news_publisher() -> Publisher<String> {
    init_tracing();
    Publisher::with_config(PublisherConfig::named("news"))
}

/// Delivery log shared by several subscribers, so cross-subscriber order is visible.
type DeliveryLog = Arc<Mutex<Vec<(String, String)>>>;

fn logging_subscriber(name: &str, log: &DeliveryLog) -> Arc<dyn Subscriber<String>> {
    let log = Arc::clone(log);
    let owned = name.to_string();
    Arc::new(FnSubscriber::new(name, move |item: &String| {
        log.lock().push((owned.clone(), item.clone()));
    }))
}

// --- Scenarios ---

#[test]
fn test_register_publish_remove_publish() {
    let publisher = news_publisher();
    let log: DeliveryLog = Arc::default();
    let a = logging_subscriber("A", &log);
    let b = logging_subscriber("B", &log);

    publisher.add_subscriber(Arc::clone(&a));
    publisher.add_subscriber(Arc::clone(&b));
    publisher.publish("X".to_string());

    assert_eq!(
        *log.lock(),
        vec![
            ("A".to_string(), "X".to_string()),
            ("B".to_string(), "X".to_string()),
        ]
    );

    log.lock().clear();
    publisher.remove_subscriber(&a).unwrap();
    publisher.publish("Y".to_string());

    assert_eq!(*log.lock(), vec![("B".to_string(), "Y".to_string())]);
    assert_eq!(publisher.latest_item().as_deref(), Some("Y"));
}

#[test]
fn test_publish_same_item_twice() {
    let publisher = news_publisher();
    let a = Arc::new(CollectingSubscriber::<String>::new("A"));
    let b = Arc::new(CollectingSubscriber::<String>::new("B"));
    publisher.add_subscriber(a.clone());
    publisher.add_subscriber(b.clone());

    publisher.publish("same".to_string());
    publisher.publish("same".to_string());

    assert_eq!(a.items(), vec!["same", "same"]);
    assert_eq!(b.items(), vec!["same", "same"]);
    assert_eq!(publisher.stats().deliveries, 4);
}

#[test]
fn test_duplicate_registration_notified_independently() {
    let publisher = news_publisher();
    let a = Arc::new(CollectingSubscriber::<String>::new("A"));
    publisher.add_subscriber(a.clone());
    publisher.add_subscriber(a.clone());

    publisher.publish("X".to_string());
    assert_eq!(a.len(), 2);
    assert_eq!(publisher.subscriber_names(), vec!["A", "A"]);
}

#[test]
fn test_subscriber_shared_between_publishers() {
    let sports = news_publisher();
    let world = news_publisher();
    let reader = Arc::new(CollectingSubscriber::<String>::new("reader"));

    sports.add_subscriber(reader.clone());
    world.add_subscriber(reader.clone());

    sports.publish("goal".to_string());
    world.publish("summit".to_string());
    sports.remove_subscriber(&reader).unwrap();
    sports.publish("offside".to_string());

    assert_eq!(reader.items(), vec!["goal", "summit"]);
    assert!(world.is_subscribed(&reader));
}

#[test]
fn test_channel_subscriber_receives_in_order() {
    let publisher = news_publisher();
    let (sub, rx) = ChannelSubscriber::<String>::new("audit");
    publisher.add_subscriber(Arc::new(sub));

    for i in 0..5 {
        publisher.publish(format!("item-{}", i));
    }

    let received: Vec<String> = rx.try_iter().collect();
    assert_eq!(
        received,
        vec!["item-0", "item-1", "item-2", "item-3", "item-4"]
    );
}

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_console_news_walkthrough() {
    let publisher = news_publisher();
    let out = SharedBuf::default();
    let reader1 = Arc::new(ConsoleSubscriber::with_writer("Subscriber-1", out.clone()));
    let reader2 = Arc::new(ConsoleSubscriber::with_writer("Subscriber-2", out.clone()));

    publisher.add_subscriber(reader1.clone());
    publisher.add_subscriber(reader2.clone());
    publisher.publish("New sports article has been published".to_string());
    publisher.remove_subscriber(&reader1).unwrap();
    publisher.publish("New global article has been published".to_string());

    let text = String::from_utf8(out.0.lock().clone()).unwrap();
    assert_eq!(
        text,
        "Subscriber-1, New sports article has been published\n\
         Subscriber-2, New sports article has been published\n\
         Subscriber-2, New global article has been published\n"
    );
}

#[test]
fn test_reentrant_publish_from_receive() {
    let publisher: Arc<Publisher<u32>> = Arc::new(Publisher::new());
    let seen = Arc::new(CollectingSubscriber::<u32>::new("seen"));

    let weak = Arc::downgrade(&publisher);
    publisher.add_subscriber(Arc::new(FnSubscriber::new("echo", move |n: &u32| {
        if *n == 1 {
            if let Some(p) = weak.upgrade() {
                p.publish(2);
            }
        }
    })));
    publisher.add_subscriber(seen.clone());

    publisher.publish(1);

    // The nested round for 2 completes before the outer round reaches `seen`.
    assert_eq!(seen.items(), vec![2, 1]);
    assert_eq!(publisher.latest_item(), Some(2));
    assert_eq!(publisher.stats().published, 2);
}
