//! In-memory entity store: the sole point of mutation for one collection.

use std::sync::Arc;

use tracing::{debug, info};

use stockdesk_core::{Clock, DomainError, DomainResult, Payload, Record, RecordId, Schema};
use stockdesk_events::{ChangeEvent, ChangeKind, ChangeNotifier, Delivery, SubscriptionToken};

use crate::query::Query;

/// Authoritative holder of one ordered collection of records.
///
/// - Insertion order is preserved; updates keep a record's position.
/// - Ids are unique within the collection and never change.
/// - Every successful mutation publishes exactly one [`ChangeEvent`]; a
///   failed one publishes nothing and leaves the collection untouched.
///
/// Mutations take `&mut self`, so there is exactly one writer and subscribers
/// always observe a fully applied change.
pub struct EntityStore {
    schema: Schema,
    clock: Arc<dyn Clock>,
    records: Vec<Record>,
    /// Next candidate for sequence-based id policies.
    next_id: u64,
    /// Number of events published so far.
    last_sequence: u64,
    notifier: ChangeNotifier<ChangeEvent>,
}

impl core::fmt::Debug for EntityStore {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EntityStore")
            .field("collection", &self.schema.collection())
            .field("records", &self.records.len())
            .field("last_sequence", &self.last_sequence)
            .field("notifier", &self.notifier)
            .finish()
    }
}

impl EntityStore {
    pub fn new(schema: Schema, clock: Arc<dyn Clock>) -> Self {
        info!(collection = schema.collection(), "entity store created");
        Self {
            schema,
            clock,
            records: Vec::new(),
            next_id: 1,
            last_sequence: 0,
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn collection(&self) -> &'static str {
        self.schema.collection()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    /// Snapshot of the records `query` selects.
    pub fn list(&self, query: &Query) -> Vec<Record> {
        query.apply(&self.records)
    }

    /// Snapshot of the records `predicate` accepts, in insertion order.
    pub fn list_by(&self, predicate: impl Fn(&Record) -> bool) -> Vec<Record> {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    pub fn get(&self, id: &RecordId) -> DomainResult<Record> {
        self.position(id)
            .map(|idx| self.records[idx].clone())
            .ok_or_else(|| self.not_found(id))
    }

    /// Append a new record built from `payload`.
    ///
    /// The payload id is used when present and must be unused; otherwise the
    /// schema's id policy assigns one.
    pub fn create(&mut self, payload: Payload) -> DomainResult<Record> {
        let fields = self.schema.build_fields(&payload)?;

        let policy = self.schema.id_policy();
        let id = match payload.id() {
            Some(raw) => {
                let id: RecordId = raw.parse()?;
                if self.contains(&id) {
                    return Err(DomainError::validation(format!(
                        "{}: id {id} already exists",
                        self.collection()
                    )));
                }
                if let Some(n) = policy.sequence_of(&id) {
                    self.next_id = self.next_id.max(n.saturating_add(1));
                }
                id
            }
            None => {
                let records = &self.records;
                policy.generate(&mut self.next_id, |candidate| {
                    records.iter().any(|r| r.id() == candidate)
                })?
            }
        };

        let record = Record::new(id, fields, self.clock.now());
        self.records.push(record.clone());
        self.emit(ChangeKind::Created, record.clone());
        Ok(record)
    }

    /// Replace every field of `id` with `payload`, keeping id, `created_at`
    /// and position. Any id carried by the payload is ignored.
    pub fn update(&mut self, id: &RecordId, payload: Payload) -> DomainResult<Record> {
        let idx = self.position(id).ok_or_else(|| self.not_found(id))?;
        let fields = self.schema.build_fields(&payload)?;

        let at = self.clock.now().max(self.records[idx].updated_at());
        let record = &mut self.records[idx];
        record.replace_fields(fields, at);
        let record = record.clone();

        self.emit(ChangeKind::Updated, record.clone());
        Ok(record)
    }

    /// Merge `changes` onto the current fields of `id` and save the result.
    ///
    /// Blank values in `changes` clear the field. Validation, timestamps and
    /// events follow [`update`](Self::update).
    pub fn patch(&mut self, id: &RecordId, changes: Payload) -> DomainResult<Record> {
        let current = self.get(id)?;
        self.update(id, changes.merged_onto(current.to_payload()))
    }

    /// Remove `id` permanently. Returns the removed record.
    pub fn delete(&mut self, id: &RecordId) -> DomainResult<Record> {
        let idx = self.position(id).ok_or_else(|| self.not_found(id))?;
        let removed = self.records.remove(idx);
        self.emit(ChangeKind::Deleted, removed.clone());
        Ok(removed)
    }

    /// Register a view; see [`ChangeNotifier::subscribe`].
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionToken
    where
        F: FnMut(&ChangeEvent) -> anyhow::Result<()> + 'static,
    {
        self.notifier.subscribe(handler)
    }

    /// Unregister a view. Unknown tokens are a no-op.
    pub fn unsubscribe(&mut self, token: SubscriptionToken) -> bool {
        self.notifier.unsubscribe(token)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    fn not_found(&self, id: &RecordId) -> DomainError {
        DomainError::not_found(self.collection(), id.clone())
    }

    fn emit(&mut self, kind: ChangeKind, record: Record) -> Delivery {
        self.last_sequence += 1;
        let event = ChangeEvent {
            collection: self.schema.collection(),
            kind,
            id: record.id().clone(),
            sequence: self.last_sequence,
            occurred_at: record.updated_at(),
            record,
        };

        let delivery = self.notifier.publish(&event);
        debug!(
            collection = event.collection,
            id = %event.id,
            kind = %kind,
            sequence = event.sequence,
            delivered = delivery.delivered,
            failed = delivery.failed,
            "record {kind}"
        );
        delivery
    }
}
