//! Sample data loaded at start-up.

use stockdesk_core::Payload;

pub fn purchase_items() -> Vec<Payload> {
    vec![
        item(1, "PO-2023-001", "Dell XPS 13 Laptop", "Equipment", "Tech Solutions Ltd", 5, "89000", "2023-05-20", "For new hires"),
        item(2, "PO-2023-001", "HP LaserJet Pro Printer", "Equipment", "Tech Solutions Ltd", 2, "35000", "", ""),
        item(3, "PO-2023-002", "Lab Oscilloscope", "Equipment", "Lab Equipment Inc", 3, "120000", "2023-05-18", "For physics lab"),
        item(4, "PO-2023-003", "Office Chairs", "Furniture", "Office Supplies Co", 20, "7500", "2023-05-12", "For new office setup"),
        item(5, "PO-2023-003", "Stationery Set", "Supplies", "Office Supplies Co", 50, "250", "2023-05-12", ""),
    ]
}

pub fn purchase_orders() -> Vec<Payload> {
    vec![
        order("PO-2023-001", "Tech Solutions Ltd", "2023-05-15", "approved", "2023-05-25"),
        order("PO-2023-002", "Lab Equipment Inc", "2023-05-10", "received", "2023-05-18"),
        order("PO-2023-003", "Office Supplies Co", "2023-05-05", "closed", "2023-05-12"),
    ]
}

pub fn purchase_requests() -> Vec<Payload> {
    vec![
        Payload::new()
            .with_id("PR-001")
            .set("department", "physics")
            .set("category", "equipment")
            .set("priority", "high")
            .set("requested_by", "Dr. John Smith")
            .set("items", "Digital multimeter x 10\nBreadboard kit x 20")
            .set("justification", "Replacement for the second-year electronics lab")
            .set("estimated_cost", "45000")
            .set("required_by", "2023-06-30"),
        Payload::new()
            .with_id("PR-002")
            .set("department", "admin")
            .set("category", "supplies")
            .set("priority", "low")
            .set("requested_by", "Office Manager")
            .set("items", "A4 paper x 40 reams")
            .set("estimated_cost", "9200.50"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: u64,
    order_id: &str,
    item_name: &str,
    category_name: &str,
    vendor_name: &str,
    quantity: i64,
    unit_cost: &str,
    received_date: &str,
    remarks: &str,
) -> Payload {
    Payload::new()
        .with_id(id.to_string())
        .set("order_id", order_id)
        .set("item_name", item_name)
        .set("category_name", category_name)
        .set("vendor_name", vendor_name)
        .set("quantity", quantity.to_string())
        .set("unit_cost", unit_cost)
        .set("received_date", received_date)
        .set("remarks", remarks)
}

fn order(id: &str, vendor_name: &str, order_date: &str, status: &str, expected_delivery: &str) -> Payload {
    Payload::new()
        .with_id(id)
        .set("vendor_name", vendor_name)
        .set("order_date", order_date)
        .set("status", status)
        .set("expected_delivery", expected_delivery)
}
