//! Inventory domain module: stock on hand and stock allocated out.
//!
//! Schemas, tag tables and sample data for the two collections, plus the
//! allocation operation that moves quantity between them.

pub mod fixtures;
pub mod inventory;
pub mod schema;
pub mod tags;

pub use inventory::{AllocationRequest, Inventory};
pub use schema::{ALLOCATED_STOCK, STOCK_ITEMS, allocated_stock_schema, stock_item_schema};
