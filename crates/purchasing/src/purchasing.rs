//! The purchasing collections and the operations that span them.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use stockdesk_core::{Clock, DomainError, DomainResult, Money, Payload, Record, RecordId};
use stockdesk_format::{Badge, line_total};
use stockdesk_store::{EntityStore, Query};

use crate::fixtures;
use crate::schema::{purchase_item_schema, purchase_order_schema, purchase_request_schema};
use crate::tags::{PENDING, RECEIVED};

/// One store per purchasing collection.
#[derive(Debug)]
pub struct Purchasing {
    pub items: EntityStore,
    pub orders: EntityStore,
    pub requests: EntityStore,
}

impl Purchasing {
    /// Empty collections.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            items: EntityStore::new(purchase_item_schema(), clock.clone()),
            orders: EntityStore::new(purchase_order_schema(), clock.clone()),
            requests: EntityStore::new(purchase_request_schema(), clock),
        }
    }

    /// Collections preloaded with the sample orders, items and requests.
    pub fn seeded(clock: Arc<dyn Clock>) -> DomainResult<Self> {
        let mut purchasing = Self::new(clock);
        for payload in fixtures::purchase_orders() {
            purchasing.orders.create(payload)?;
        }
        for payload in fixtures::purchase_items() {
            purchasing.items.create(payload)?;
        }
        for payload in fixtures::purchase_requests() {
            purchasing.requests.create(payload)?;
        }
        info!(
            orders = purchasing.orders.len(),
            items = purchasing.items.len(),
            requests = purchasing.requests.len(),
            "purchasing seeded"
        );
        Ok(purchasing)
    }

    /// Set `received_date` on a purchase item that has not been received yet.
    pub fn mark_received(&mut self, item_id: &RecordId, on: NaiveDate) -> DomainResult<Record> {
        let item = self.items.get(item_id)?;
        if let Some(existing) = item.date("received_date") {
            return Err(DomainError::validation(format!(
                "purchase item {item_id} was already received on {existing}"
            )));
        }

        let record = self
            .items
            .patch(item_id, Payload::new().set("received_date", on.to_string()))?;
        info!(item_id = %item_id, received_date = %on, "purchase item received");
        Ok(record)
    }

    /// Items bought under `order_id`, in insertion order.
    pub fn items_of(&self, order_id: &RecordId) -> Vec<Record> {
        self.items
            .list(&Query::all().where_eq("order_id", order_id.as_str()))
    }

    /// Sum of `quantity × unit_cost` over the order's items.
    ///
    /// Computed on demand, never stored. Fails with `NotFound` for an unknown
    /// order and `Validation` if the sum overflows.
    pub fn order_total(&self, order_id: &RecordId) -> DomainResult<Money> {
        self.orders.get(order_id)?;

        self.items_of(order_id)
            .iter()
            .try_fold(Money::ZERO, |acc, item| {
                let quantity = item.integer("quantity").unwrap_or(0);
                let cost = item.money("unit_cost").unwrap_or(Money::ZERO);
                line_total(quantity, cost)
                    .and_then(|line| acc.minor().checked_add(line.minor()))
                    .map(Money::from_minor)
            })
            .ok_or_else(|| DomainError::validation(format!("order {order_id} total overflows")))
    }
}

/// Pending/received badge derived from a purchase item's `received_date`.
pub fn received_status(item: &Record) -> Badge {
    match item.date("received_date") {
        Some(_) => RECEIVED,
        None => PENDING,
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
    use stockdesk_format::{FormatOptions, format_currency};

    use crate::tags::{DEPARTMENT, ITEM_CATEGORY, ORDER_STATUS, PRIORITY, REQUEST_CATEGORY};

    fn seeded() -> Purchasing {
        let clock = Arc::new(ManualClock::new(Utc.with_ymd_and_hms(2023, 5, 21, 10, 0, 0).unwrap()));
        Purchasing::seeded(clock).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 21).unwrap()
    }

    #[test]
    fn seeded_collections_hold_sample_rows() {
        let purchasing = seeded();
        assert_eq!(purchasing.items.len(), 5);
        assert_eq!(purchasing.orders.len(), 3);
        assert_eq!(purchasing.requests.len(), 2);

        let laptop = purchasing.items.get(&RecordId::from("1")).unwrap();
        assert_eq!(laptop.money("unit_cost"), Some(Money::from_major(89_000)));
        assert_eq!(laptop.text("remarks"), Some("For new hires"));
    }

    #[test]
    fn every_seeded_tag_is_in_its_table() {
        let purchasing = seeded();
        for item in purchasing.items.list(&Query::all()) {
            ITEM_CATEGORY.badge(item.text("category_name").unwrap()).unwrap();
        }
        for order in purchasing.orders.list(&Query::all()) {
            ORDER_STATUS.badge(order.text("status").unwrap()).unwrap();
        }
        for request in purchasing.requests.list(&Query::all()) {
            REQUEST_CATEGORY.badge(request.text("category").unwrap()).unwrap();
            PRIORITY.badge(request.text("priority").unwrap()).unwrap();
            DEPARTMENT.badge(request.text("department").unwrap()).unwrap();
        }
    }

    #[test]
    fn mark_received_sets_date_once() {
        let mut purchasing = seeded();
        let printer = RecordId::from("2");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        purchasing.items.subscribe(move |ev| {
            sink.borrow_mut().push((ev.kind, ev.id.clone()));
            Ok(())
        });

        assert_eq!(received_status(&purchasing.items.get(&printer).unwrap()), PENDING);

        let received = purchasing.mark_received(&printer, today()).unwrap();
        assert_eq!(received.date("received_date"), Some(today()));
        assert_eq!(received.text("item_name"), Some("HP LaserJet Pro Printer"));
        assert_eq!(received_status(&received), RECEIVED);

        let err = purchasing.mark_received(&printer, today()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(*seen.borrow(), vec![(ChangeKind::Updated, printer)]);
    }

    #[test]
    fn mark_received_unknown_item_is_not_found() {
        let mut purchasing = seeded();
        let err = purchasing.mark_received(&RecordId::from("99"), today()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn order_total_sums_line_totals() {
        let purchasing = seeded();
        let total = purchasing.order_total(&RecordId::from("PO-2023-001")).unwrap();
        // 5 × 89,000 + 2 × 35,000
        assert_eq!(total, Money::from_major(515_000));
        assert_eq!(format_currency(total, &FormatOptions::default()), "₹515,000");

        let err = purchasing.order_total(&RecordId::from("PO-1999-001")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn new_items_continue_the_numbering() {
        let mut purchasing = seeded();
        let created = purchasing
            .items
            .create(
                Payload::new()
                    .set("item_name", "Microsoft Office License")
                    .set("category_name", "Software")
                    .set("vendor_name", "Tech Solutions Ltd")
                    .set("quantity", "10")
                    .set("unit_cost", "4999.99"),
            )
            .unwrap();
        assert_eq!(created.id(), &RecordId::from("6"));
        assert_eq!(created.money("unit_cost"), Some(Money::from_minor(499_999)));
    }
}
