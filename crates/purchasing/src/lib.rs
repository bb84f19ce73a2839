//! Purchasing domain module: purchase items, orders and requests.
//!
//! Schemas, tag tables and sample data for the three collections, plus the
//! receive and order-total operations.

pub mod fixtures;
pub mod purchasing;
pub mod schema;
pub mod tags;

pub use purchasing::{Purchasing, received_status};
pub use schema::{
    PURCHASE_ITEMS, PURCHASE_ORDERS, PURCHASE_REQUESTS, purchase_item_schema, purchase_order_schema,
    purchase_request_schema,
};
