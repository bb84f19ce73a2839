use chrono::{DateTime, Utc};
use serde::Serialize;

use stockdesk_core::{Record, RecordId};

/// A domain-agnostic event.
///
/// Events are:
/// - **immutable** (treat them as facts)
/// - **versioned** (schema evolution)
/// - delivered in the order they happened within one source
pub trait Event: Clone + core::fmt::Debug + 'static {
    /// Stable event name/type identifier (e.g. "record.created").
    fn event_type(&self) -> &'static str;

    /// Schema version for this event type.
    fn version(&self) -> u32;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}

/// Which mutation produced a [`ChangeEvent`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

impl core::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            ChangeKind::Created => "created",
            ChangeKind::Updated => "updated",
            ChangeKind::Deleted => "deleted",
        })
    }
}

/// Event: one successful mutation of an entity store.
///
/// `record` is the state after the mutation; for deletions it is the record
/// as it was when removed, so views can drop it without asking the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub collection: &'static str,
    pub kind: ChangeKind,
    pub id: RecordId,
    /// Position of this mutation in the store's history, starting at 1.
    pub sequence: u64,
    pub occurred_at: DateTime<Utc>,
    pub record: Record,
}

impl Event for ChangeEvent {
    fn event_type(&self) -> &'static str {
        match self.kind {
            ChangeKind::Created => "record.created",
            ChangeKind::Updated => "record.updated",
            ChangeKind::Deleted => "record.deleted",
        }
    }

    fn version(&self) -> u32 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        self.occurred_at
    }
}
