//! Plain-text tables and detail views for each collection.

use stockdesk_core::{DomainResult, Record};
use stockdesk_format::{
    DateStyle, FormatOptions, TagTable, format_currency, format_date, format_line_total, format_timestamp,
    format_value,
};
use stockdesk_inventory::tags::{CATEGORY, CONDITION};
use stockdesk_purchasing::tags::{DEPARTMENT, ITEM_CATEGORY, ORDER_STATUS, PRIORITY, REQUEST_CATEGORY};
use stockdesk_purchasing::{Purchasing, received_status};

use crate::desk::{Collection, Desk};

/// Column-aligned text table.
#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let mut out = Vec::with_capacity(self.rows.len() + 2);
        out.push(pad_line(self.headers.iter().copied(), &widths));
        out.push(pad_line(rule.iter().map(String::as_str), &widths));
        for row in &self.rows {
            out.push(pad_line(row.iter().map(String::as_str), &widths));
        }
        out.join("\n")
    }
}

fn pad_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, w)| format!("{cell}{}", " ".repeat(w.saturating_sub(cell.chars().count()))))
        .collect();
    padded.join("  ").trim_end().to_string()
}

fn tag(table: &TagTable, record: &Record, field: &str, opts: &FormatOptions) -> DomainResult<String> {
    match record.text(field) {
        Some(value) => Ok(table.badge(value)?.label.to_string()),
        None => Ok(opts.placeholder.clone()),
    }
}

fn text(record: &Record, field: &str, opts: &FormatOptions) -> String {
    record
        .text(field)
        .map(str::to_string)
        .unwrap_or_else(|| opts.placeholder.clone())
}

fn quantity(record: &Record, opts: &FormatOptions) -> String {
    format_value(record.get("quantity"), opts)
}

/// Listing of `records` in the layout of `collection`.
///
/// A tag outside its lookup table fails the whole render rather than
/// showing a blank cell.
pub fn table(desk: &Desk, collection: Collection, records: &[Record], opts: &FormatOptions) -> DomainResult<Table> {
    let mut table = match collection {
        Collection::Stock => Table::new(vec![
            "ID", "Item Name", "Category", "Quantity", "Supplier", "Condition", "Created At", "Last Updated",
        ]),
        Collection::Allocated => Table::new(vec![
            "ID", "Item Name", "Category", "Quantity", "Allocated To", "Location", "Condition", "Allocated On",
            "Last Updated",
        ]),
        Collection::PurchaseItems => Table::new(vec![
            "ID", "Order", "Item", "Category", "Vendor", "Qty", "Unit Cost", "Total", "Received",
        ]),
        Collection::PurchaseOrders => Table::new(vec!["ID", "Vendor", "Order Date", "Status", "Items", "Total"]),
        Collection::PurchaseRequests => Table::new(vec![
            "ID", "Department", "Category", "Priority", "Requested By", "Est. Cost", "Required By",
        ]),
    };

    for r in records {
        let row = match collection {
            Collection::Stock => vec![
                r.id().to_string(),
                text(r, "name", opts),
                tag(&CATEGORY, r, "category", opts)?,
                quantity(r, opts),
                text(r, "supplier", opts),
                tag(&CONDITION, r, "condition", opts)?,
                format_timestamp(r.created_at(), DateStyle::DateTime, opts),
                format_timestamp(r.updated_at(), DateStyle::DateTime, opts),
            ],
            Collection::Allocated => vec![
                r.id().to_string(),
                text(r, "name", opts),
                tag(&CATEGORY, r, "category", opts)?,
                quantity(r, opts),
                text(r, "allocated_to", opts),
                text(r, "location", opts),
                tag(&CONDITION, r, "condition", opts)?,
                format_date(r.date("allocation_date"), DateStyle::Medium, opts),
                format_timestamp(r.updated_at(), DateStyle::DateTimeNoYear, opts),
            ],
            Collection::PurchaseItems => vec![
                r.id().to_string(),
                text(r, "order_id", opts),
                text(r, "item_name", opts),
                tag(&ITEM_CATEGORY, r, "category_name", opts)?,
                text(r, "vendor_name", opts),
                quantity(r, opts),
                format_value(r.get("unit_cost"), opts),
                format_line_total(r.integer("quantity"), r.money("unit_cost"), opts),
                match r.date("received_date") {
                    Some(d) => format_date(Some(d), DateStyle::Numeric, opts),
                    None => received_status(r).label.to_string(),
                },
            ],
            Collection::PurchaseOrders => {
                let items = desk.purchasing.items_of(r.id());
                vec![
                    r.id().to_string(),
                    text(r, "vendor_name", opts),
                    format_date(r.date("order_date"), DateStyle::Medium, opts),
                    tag(&ORDER_STATUS, r, "status", opts)?,
                    items.len().to_string(),
                    order_total(&desk.purchasing, r, opts)?,
                ]
            }
            Collection::PurchaseRequests => vec![
                r.id().to_string(),
                tag(&DEPARTMENT, r, "department", opts)?,
                tag(&REQUEST_CATEGORY, r, "category", opts)?,
                tag(&PRIORITY, r, "priority", opts)?,
                text(r, "requested_by", opts),
                format_value(r.get("estimated_cost"), opts),
                format_date(r.date("required_by"), DateStyle::Medium, opts),
            ],
        };
        table.push(row);
    }
    Ok(table)
}

fn order_total(purchasing: &Purchasing, order: &Record, opts: &FormatOptions) -> DomainResult<String> {
    Ok(format_currency(purchasing.order_total(order.id())?, opts))
}

/// Field-by-field view of one record.
pub fn detail(desk: &Desk, collection: Collection, record: &Record, opts: &FormatOptions) -> DomainResult<String> {
    let mut lines = vec![format!("{}: {}", collection.noun(), collection.display_name(record))];
    lines.push(format!("  id: {}", record.id()));

    for (name, value) in record.fields() {
        lines.push(format!("  {name}: {}", format_value(Some(value), opts)));
    }

    match collection {
        Collection::PurchaseItems => {
            lines.push(format!(
                "  total: {}",
                format_line_total(record.integer("quantity"), record.money("unit_cost"), opts)
            ));
            lines.push(format!("  status: {}", received_status(record).label));
        }
        Collection::PurchaseOrders => {
            lines.push(format!("  total: {}", order_total(&desk.purchasing, record, opts)?));
        }
        _ => {}
    }

    lines.push(format!(
        "  created: {}",
        format_timestamp(record.created_at(), DateStyle::DateTime, opts)
    ));
    lines.push(format!(
        "  updated: {}",
        format_timestamp(record.updated_at(), DateStyle::DateTime, opts)
    ));
    Ok(lines.join("\n"))
}
