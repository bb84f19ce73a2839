//! Change events and the notifier that delivers them to views.

pub mod event;
pub mod notifier;

pub use event::{ChangeEvent, ChangeKind, Event};
pub use notifier::{ChangeNotifier, Delivery, SubscriptionToken};
