//! Sample data loaded at start-up.

use stockdesk_core::Payload;

pub fn stock_items() -> Vec<Payload> {
    vec![
        stock("STK001", "Desktop Computer", "electronics", 25, "TechSupplies Ltd.", "2024-10-15", "2026-10-15"),
        stock("STK002", "Office Chair", "furniture", 50, "Furniture Masters", "2024-11-05", "2027-11-05"),
        stock("STK003", "Printer", "electronics", 5, "TechSupplies Ltd.", "2025-01-20", "2027-01-20"),
        stock("STK004", "Whiteboard", "equipment", 10, "Office Solutions", "2025-02-10", "2030-02-10"),
        stock("STK005", "A4 Paper (Reams)", "stationery", 100, "Office Solutions", "2025-03-15", ""),
    ]
}

pub fn allocated_stock() -> Vec<Payload> {
    vec![
        allocation("ASTK001", "Desktop Computer", "electronics", 20, "Computer Science Dept.", "Computer Lab 1", "good", "2025-01-10"),
        allocation("ASTK002", "Office Chair", "furniture", 15, "Administrative Office", "Admin Block", "good", "2025-01-15"),
        allocation("ASTK003", "Laptop", "electronics", 5, "Dr. John Smith", "Principal Office", "good", "2025-02-05"),
        allocation("ASTK004", "Projector", "electronics", 2, "Physics Department", "Physics Lab", "needs-maintenance", "2025-02-10"),
        allocation("ASTK005", "Filing Cabinet", "furniture", 3, "Library", "Library Office", "average", "2025-02-15"),
    ]
}

fn stock(
    id: &str,
    name: &str,
    category: &str,
    quantity: i64,
    supplier: &str,
    purchase_date: &str,
    warranty_end: &str,
) -> Payload {
    Payload::new()
        .with_id(id)
        .set("name", name)
        .set("category", category)
        .set("quantity", quantity.to_string())
        .set("supplier", supplier)
        .set("condition", "good")
        .set("purchase_date", purchase_date)
        .set("warranty_end", warranty_end)
}

#[allow(clippy::too_many_arguments)]
fn allocation(
    id: &str,
    name: &str,
    category: &str,
    quantity: i64,
    allocated_to: &str,
    location: &str,
    condition: &str,
    allocation_date: &str,
) -> Payload {
    Payload::new()
        .with_id(id)
        .set("name", name)
        .set("category", category)
        .set("quantity", quantity.to_string())
        .set("allocated_to", allocated_to)
        .set("location", location)
        .set("condition", condition)
        .set("allocation_date", allocation_date)
}
