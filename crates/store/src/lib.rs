//! `stockdesk-store` — in-memory entity store.
//!
//! One [`EntityStore`] owns one collection and mediates every mutation of it.
//! Views read snapshots through [`EntityStore::list`] / [`EntityStore::get`]
//! and keep in sync by subscribing to change events.

pub mod query;
pub mod store;

pub use query::{Query, SortDirection};
pub use store::EntityStore;
