//! Field layout of the inventory collections.

use stockdesk_core::{FieldKind, IdPolicy, Schema};

pub const STOCK_ITEMS: &str = "stock_items";
pub const ALLOCATED_STOCK: &str = "allocated_stock";

/// Items held in the store room (`STK001`, …).
pub fn stock_item_schema() -> Schema {
    Schema::new(STOCK_ITEMS, IdPolicy::Prefixed { prefix: "STK", width: 3 })
        .required("name", FieldKind::Text)
        .required("category", FieldKind::Text)
        .required("quantity", FieldKind::Integer)
        .optional("supplier", FieldKind::Text)
        .optional("condition", FieldKind::Text)
        .optional("purchase_date", FieldKind::Date)
        .optional("warranty_end", FieldKind::Date)
}

/// Stock handed out to a department or person (`ASTK001`, …).
pub fn allocated_stock_schema() -> Schema {
    Schema::new(ALLOCATED_STOCK, IdPolicy::Prefixed { prefix: "ASTK", width: 3 })
        .required("name", FieldKind::Text)
        .required("category", FieldKind::Text)
        .required("quantity", FieldKind::Integer)
        .required("allocated_to", FieldKind::Text)
        .optional("location", FieldKind::Text)
        .optional("condition", FieldKind::Text)
        .optional("allocation_date", FieldKind::Date)
        .optional("stock_id", FieldKind::Text)
}
