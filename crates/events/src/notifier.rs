//! Synchronous in-process change notifier.
//!
//! The store publishes one event per successful mutation; every subscribed
//! view receives it inline, in subscription order, before the mutating call
//! returns. There is no queue and no background delivery.

use std::panic::{self, AssertUnwindSafe};

use tracing::warn;

use crate::event::Event;

/// Subscriber callback.
///
/// Returning an error only affects this subscriber: it is logged and
/// delivery continues with the next one.
type Handler<E> = Box<dyn FnMut(&E) -> anyhow::Result<()>>;

/// Token returned by [`ChangeNotifier::subscribe`]; pass it back to unsubscribe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionToken(u64);

/// Outcome of a single [`ChangeNotifier::publish`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Delivery {
    /// Handlers that returned `Ok`.
    pub delivered: usize,
    /// Handlers that returned an error or panicked.
    pub failed: usize,
}

/// Fan-out of events to registered handlers.
pub struct ChangeNotifier<E> {
    next_token: u64,
    subscribers: Vec<(SubscriptionToken, Handler<E>)>,
}

impl<E> ChangeNotifier<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<E> Default for ChangeNotifier<E> {
    fn default() -> Self {
        Self {
            next_token: 1,
            subscribers: Vec::new(),
        }
    }
}

impl<E> core::fmt::Debug for ChangeNotifier<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<E: Event> ChangeNotifier<E> {
    /// Register `handler`; it sees every event published from now on.
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionToken
    where
        F: FnMut(&E) -> anyhow::Result<()> + 'static,
    {
        let token = SubscriptionToken(self.next_token);
        self.next_token += 1;
        self.subscribers.push((token, Box::new(handler)));
        token
    }

    /// Remove the handler registered under `token`.
    ///
    /// Unknown or already-removed tokens are ignored. Returns whether a handler
    /// was removed.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(t, _)| *t != token);
        before != self.subscribers.len()
    }

    /// Deliver `event` to every current subscriber, in subscription order.
    ///
    /// A failing or panicking handler is isolated: the failure is logged and
    /// counted, and the remaining handlers still run.
    pub fn publish(&mut self, event: &E) -> Delivery {
        let mut delivery = Delivery::default();

        for (token, handler) in self.subscribers.iter_mut() {
            match panic::catch_unwind(AssertUnwindSafe(|| handler(event))) {
                Ok(Ok(())) => delivery.delivered += 1,
                Ok(Err(err)) => {
                    delivery.failed += 1;
                    warn!(
                        subscriber = token.0,
                        event_type = event.event_type(),
                        error = %err,
                        "change handler failed"
                    );
                }
                Err(payload) => {
                    delivery.failed += 1;
                    warn!(
                        subscriber = token.0,
                        event_type = event.event_type(),
                        panic = panic_message(payload.as_ref()),
                        "change handler panicked"
                    );
                }
            }
        }

        delivery
    }
}

fn panic_message(payload: &(dyn core::any::Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::{DateTime, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Ping(u32);

    impl Event for Ping {
        fn event_type(&self) -> &'static str {
            "test.ping"
        }

        fn version(&self) -> u32 {
            1
        }

        fn occurred_at(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    fn recorder(log: &Rc<RefCell<Vec<String>>>, name: &'static str) -> impl FnMut(&Ping) -> anyhow::Result<()> + 'static {
        let log = Rc::clone(log);
        move |ev: &Ping| {
            log.borrow_mut().push(format!("{name}:{}", ev.0));
            Ok(())
        }
    }

    #[test]
    fn delivers_in_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(recorder(&log, "a"));
        notifier.subscribe(recorder(&log, "b"));

        let delivery = notifier.publish(&Ping(1));
        notifier.publish(&Ping(2));

        assert_eq!(delivery, Delivery { delivered: 2, failed: 0 });
        assert_eq!(*log.borrow(), vec!["a:1", "b:1", "a:2", "b:2"]);
    }

    #[test]
    fn unsubscribe_is_idempotent() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        let a = notifier.subscribe(recorder(&log, "a"));
        notifier.subscribe(recorder(&log, "b"));

        assert!(notifier.unsubscribe(a));
        assert!(!notifier.unsubscribe(a));
        assert!(!notifier.unsubscribe(SubscriptionToken(999)));

        notifier.publish(&Ping(7));
        assert_eq!(*log.borrow(), vec!["b:7"]);
        assert_eq!(notifier.subscriber_count(), 1);
    }

    #[test]
    fn failing_handler_does_not_block_later_handlers() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(|_: &Ping| Err(anyhow::anyhow!("view went away")));
        notifier.subscribe(|_: &Ping| -> anyhow::Result<()> { panic!("render bug") });
        notifier.subscribe(recorder(&log, "c"));

        let delivery = notifier.publish(&Ping(3));

        assert_eq!(delivery, Delivery { delivered: 1, failed: 2 });
        assert_eq!(*log.borrow(), vec!["c:3"]);
    }

    #[test]
    fn tokens_are_never_reused() {
        let mut notifier: ChangeNotifier<Ping> = ChangeNotifier::new();
        let a = notifier.subscribe(|_| Ok(()));
        notifier.unsubscribe(a);
        let b = notifier.subscribe(|_| Ok(()));
        assert_ne!(a, b);
    }
}
