//! The inventory collections and the operations that span them.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use stockdesk_core::{Clock, DomainError, DomainResult, Payload, Record, RecordId};
use stockdesk_store::EntityStore;

use crate::fixtures;
use crate::schema::{allocated_stock_schema, stock_item_schema};

/// Handing `quantity` units of a stock item to a department or person.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocationRequest {
    pub quantity: i64,
    pub allocated_to: String,
    pub location: Option<String>,
    pub date: NaiveDate,
}

/// One store per inventory collection.
#[derive(Debug)]
pub struct Inventory {
    pub stock: EntityStore,
    pub allocated: EntityStore,
}

impl Inventory {
    /// Empty collections.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            stock: EntityStore::new(stock_item_schema(), clock.clone()),
            allocated: EntityStore::new(allocated_stock_schema(), clock),
        }
    }

    /// Collections preloaded with the sample stock and allocations.
    pub fn seeded(clock: Arc<dyn Clock>) -> DomainResult<Self> {
        let mut inventory = Self::new(clock);
        for payload in fixtures::stock_items() {
            inventory.stock.create(payload)?;
        }
        for payload in fixtures::allocated_stock() {
            inventory.allocated.create(payload)?;
        }
        info!(
            stock = inventory.stock.len(),
            allocated = inventory.allocated.len(),
            "inventory seeded"
        );
        Ok(inventory)
    }

    /// Move units from a stock item into a new allocation record.
    ///
    /// The allocation copies name, category and condition from the stock item
    /// and the stock quantity drops by the allocated amount. Fails with
    /// `Validation` when the quantity is not positive or exceeds what is on
    /// hand; neither collection changes in that case.
    pub fn allocate(&mut self, stock_id: &RecordId, request: AllocationRequest) -> DomainResult<Record> {
        let item = self.stock.get(stock_id)?;
        let on_hand = item.integer("quantity").unwrap_or(0);

        if request.quantity <= 0 {
            return Err(DomainError::validation("allocation quantity must be positive"));
        }
        if request.quantity > on_hand {
            return Err(DomainError::validation(format!(
                "cannot allocate {} of {stock_id}: only {on_hand} on hand",
                request.quantity
            )));
        }

        let mut payload = Payload::new()
            .set("name", item.text("name").unwrap_or_default())
            .set("category", item.text("category").unwrap_or_default())
            .set("condition", item.text("condition").unwrap_or_default())
            .set("quantity", request.quantity.to_string())
            .set("allocated_to", request.allocated_to)
            .set("allocation_date", request.date.to_string())
            .set("stock_id", stock_id.to_string());
        if let Some(location) = request.location {
            payload.insert("location", location);
        }

        let allocation = self.allocated.create(payload)?;
        let remaining = Payload::new().set("quantity", (on_hand - request.quantity).to_string());
        if let Err(err) = self.stock.patch(stock_id, remaining) {
            self.allocated.delete(allocation.id())?;
            return Err(err);
        }

        info!(
            stock_id = %stock_id,
            allocation_id = %allocation.id(),
            quantity = request.quantity,
            "stock allocated"
        );
        Ok(allocation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use chrono::{TimeZone, Utc};
    use stockdesk_core::ManualClock;
    use stockdesk_events::ChangeKind;
    use stockdesk_store::Query;

    use crate::tags::{CATEGORY, CONDITION};

    fn test_clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2025, 3, 20, 8, 0, 0).unwrap()))
    }

    fn request(quantity: i64) -> AllocationRequest {
        AllocationRequest {
            quantity,
            allocated_to: "Chemistry Department".to_string(),
            location: Some("Chem Lab 2".to_string()),
            date: NaiveDate::from_ymd_opt(2025, 3, 20).unwrap(),
        }
    }

    #[test]
    fn seeded_collections_hold_sample_rows() {
        let inventory = Inventory::seeded(test_clock()).unwrap();
        assert_eq!(inventory.stock.len(), 5);
        assert_eq!(inventory.allocated.len(), 5);

        let electronics = inventory
            .stock
            .list(&Query::all().where_eq("category", "electronics"));
        assert_eq!(electronics.len(), 2);

        let paper = inventory.stock.get(&RecordId::from("STK005")).unwrap();
        assert_eq!(paper.date("warranty_end"), None);
    }

    #[test]
    fn every_seeded_tag_is_in_its_table() {
        let inventory = Inventory::seeded(test_clock()).unwrap();
        let rows = inventory
            .stock
            .list(&Query::all())
            .into_iter()
            .chain(inventory.allocated.list(&Query::all()));
        for row in rows {
            CATEGORY.badge(row.text("category").unwrap()).unwrap();
            CONDITION.badge(row.text("condition").unwrap()).unwrap();
        }
    }

    #[test]
    fn new_stock_continues_the_seeded_numbering() {
        let mut inventory = Inventory::seeded(test_clock()).unwrap();
        let created = inventory
            .stock
            .create(
                Payload::new()
                    .set("name", "Projector")
                    .set("category", "electronics")
                    .set("quantity", "4"),
            )
            .unwrap();
        assert_eq!(created.id(), &RecordId::from("STK006"));
    }

    #[test]
    fn allocate_moves_quantity_between_collections() {
        let mut inventory = Inventory::seeded(test_clock()).unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        inventory.stock.subscribe(move |ev| {
            sink.borrow_mut().push(ev.kind);
            Ok(())
        });

        let stock_id = RecordId::from("STK003");
        let allocation = inventory.allocate(&stock_id, request(2)).unwrap();

        assert_eq!(allocation.id(), &RecordId::from("ASTK006"));
        assert_eq!(allocation.text("name"), Some("Printer"));
        assert_eq!(allocation.text("stock_id"), Some("STK003"));
        assert_eq!(allocation.text("location"), Some("Chem Lab 2"));
        assert_eq!(allocation.integer("quantity"), Some(2));
        assert_eq!(inventory.stock.get(&stock_id).unwrap().integer("quantity"), Some(3));
        assert_eq!(*events.borrow(), vec![ChangeKind::Updated]);
    }

    #[test]
    fn over_allocation_changes_nothing() {
        let mut inventory = Inventory::seeded(test_clock()).unwrap();
        let stock_id = RecordId::from("STK003");

        let err = inventory.allocate(&stock_id, request(6)).unwrap_err();
        assert!(err.is_validation());
        assert!(inventory.allocate(&stock_id, request(0)).unwrap_err().is_validation());

        assert_eq!(inventory.allocated.len(), 5);
        assert_eq!(inventory.stock.get(&stock_id).unwrap().integer("quantity"), Some(5));
    }

    #[test]
    fn allocating_unknown_stock_is_not_found() {
        let mut inventory = Inventory::seeded(test_clock()).unwrap();
        let err = inventory.allocate(&RecordId::from("STK404"), request(1)).unwrap_err();
        assert!(err.is_not_found());
    }
}
