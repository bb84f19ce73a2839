//! Field layout of the purchasing collections.

use stockdesk_core::{FieldKind, IdPolicy, Schema};

pub const PURCHASE_ITEMS: &str = "purchase_items";
pub const PURCHASE_ORDERS: &str = "purchase_orders";
pub const PURCHASE_REQUESTS: &str = "purchase_requests";

/// Line items bought under an order; numbered `1`, `2`, ….
pub fn purchase_item_schema() -> Schema {
    Schema::new(PURCHASE_ITEMS, IdPolicy::Sequential)
        .required("item_name", FieldKind::Text)
        .required("category_name", FieldKind::Text)
        .required("vendor_name", FieldKind::Text)
        .required("quantity", FieldKind::Integer)
        .required("unit_cost", FieldKind::Money)
        .optional("order_id", FieldKind::Text)
        .optional("received_date", FieldKind::Date)
        .optional("remarks", FieldKind::Text)
}

pub fn purchase_order_schema() -> Schema {
    Schema::new(PURCHASE_ORDERS, IdPolicy::Prefixed { prefix: "PO-", width: 3 })
        .required("vendor_name", FieldKind::Text)
        .required("order_date", FieldKind::Date)
        .required("status", FieldKind::Text)
        .optional("expected_delivery", FieldKind::Date)
        .optional("remarks", FieldKind::Text)
}

pub fn purchase_request_schema() -> Schema {
    Schema::new(PURCHASE_REQUESTS, IdPolicy::Prefixed { prefix: "PR-", width: 3 })
        .required("department", FieldKind::Text)
        .required("category", FieldKind::Text)
        .required("priority", FieldKind::Text)
        .required("requested_by", FieldKind::Text)
        .required("items", FieldKind::Text)
        .optional("justification", FieldKind::Text)
        .optional("estimated_cost", FieldKind::Money)
        .optional("required_by", FieldKind::Date)
}
