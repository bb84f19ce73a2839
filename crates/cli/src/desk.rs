//! Application state: one store per collection, built at start-up.

use std::sync::Arc;

use clap::ValueEnum;

use stockdesk_core::{Clock, DomainResult, Record};
use stockdesk_inventory::Inventory;
use stockdesk_purchasing::Purchasing;
use stockdesk_store::EntityStore;

/// Collections addressable from the command line.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Collection {
    Stock,
    Allocated,
    PurchaseItems,
    PurchaseOrders,
    PurchaseRequests,
}

impl Collection {
    /// Noun used in notifications ("Item \"Printer\" has been deleted.").
    pub fn noun(self) -> &'static str {
        match self {
            Collection::Stock => "Stock item",
            Collection::Allocated => "Allocation",
            Collection::PurchaseItems => "Item",
            Collection::PurchaseOrders => "Purchase order",
            Collection::PurchaseRequests => "Purchase request",
        }
    }

    /// Human-facing name of a record: its name field, falling back to the id.
    pub fn display_name(self, record: &Record) -> String {
        let field = match self {
            Collection::Stock | Collection::Allocated => Some("name"),
            Collection::PurchaseItems => Some("item_name"),
            Collection::PurchaseOrders | Collection::PurchaseRequests => None,
        };
        field
            .and_then(|f| record.text(f))
            .map(str::to_string)
            .unwrap_or_else(|| record.id().to_string())
    }
}

/// Everything the desk holds for one process lifetime.
#[derive(Debug)]
pub struct Desk {
    pub inventory: Inventory,
    pub purchasing: Purchasing,
}

impl Desk {
    pub fn seeded(clock: Arc<dyn Clock>) -> DomainResult<Self> {
        Ok(Self {
            inventory: Inventory::seeded(clock.clone())?,
            purchasing: Purchasing::seeded(clock)?,
        })
    }

    pub fn store(&self, collection: Collection) -> &EntityStore {
        match collection {
            Collection::Stock => &self.inventory.stock,
            Collection::Allocated => &self.inventory.allocated,
            Collection::PurchaseItems => &self.purchasing.items,
            Collection::PurchaseOrders => &self.purchasing.orders,
            Collection::PurchaseRequests => &self.purchasing.requests,
        }
    }

    pub fn store_mut(&mut self, collection: Collection) -> &mut EntityStore {
        match collection {
            Collection::Stock => &mut self.inventory.stock,
            Collection::Allocated => &mut self.inventory.allocated,
            Collection::PurchaseItems => &mut self.purchasing.items,
            Collection::PurchaseOrders => &mut self.purchasing.orders,
            Collection::PurchaseRequests => &mut self.purchasing.requests,
        }
    }
}
