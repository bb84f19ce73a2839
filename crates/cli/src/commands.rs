//! Command execution against a seeded desk.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use tracing::debug;

use stockdesk_core::{Clock, DomainError, Payload, RecordId};
use stockdesk_events::{ChangeEvent, ChangeKind};
use stockdesk_inventory::AllocationRequest;
use stockdesk_store::{Query, SortDirection};

use crate::args::Command;
use crate::config::Settings;
use crate::desk::{Collection, Desk};
use crate::render;

/// Run one command and return what it prints.
///
/// Mutating commands also print one confirmation line per change event the
/// affected stores publish.
pub fn run(desk: &mut Desk, command: Command, settings: &Settings, clock: &dyn Clock) -> Result<String> {
    let opts = &settings.format;

    match command {
        Command::List {
            collection,
            filters,
            search,
            sort,
            desc,
            json,
        } => {
            let mut query = Query::all();
            for (field, value) in filters {
                query = query.where_eq(field, value);
            }
            if let Some(term) = search {
                query = query.search(term);
            }
            if let Some(field) = sort {
                let direction = if desc { SortDirection::Descending } else { SortDirection::Ascending };
                query = query.sort_by(field, direction);
            }

            let records = desk.store(collection).list(&query);
            debug!(collection = ?collection, matched = records.len(), "listing");
            if json {
                return serde_json::to_string_pretty(&records).context("serializing records");
            }
            Ok(render::table(desk, collection, &records, opts)?.render())
        }
        Command::Show { collection, id } => {
            let record = desk.store(collection).get(&id.parse()?)?;
            Ok(render::detail(desk, collection, &record, opts)?)
        }
        Command::Add { collection, fields } => {
            let payload: Payload = fields.into_iter().collect();
            with_notices(desk, &[collection], |desk| {
                desk.store_mut(collection).create(payload)?;
                Ok(())
            })
        }
        Command::Edit { collection, id, fields } => {
            let id: RecordId = id.parse()?;
            let changes: Payload = fields.into_iter().collect();
            if changes.id().is_some() {
                return Err(DomainError::validation(format!("{id}: ids cannot be changed")).into());
            }
            with_notices(desk, &[collection], |desk| {
                desk.store_mut(collection).patch(&id, changes)?;
                Ok(())
            })
        }
        Command::Remove { collection, id } => {
            let id: RecordId = id.parse()?;
            with_notices(desk, &[collection], |desk| {
                desk.store_mut(collection).delete(&id)?;
                Ok(())
            })
        }
        Command::Receive { id, date } => {
            let id: RecordId = id.parse()?;
            let on = date.unwrap_or_else(|| clock.today());
            with_notices(desk, &[Collection::PurchaseItems], |desk| {
                desk.purchasing.mark_received(&id, on)?;
                Ok(())
            })
        }
        Command::Allocate {
            stock_id,
            quantity,
            allocated_to,
            location,
            date,
        } => {
            let stock_id: RecordId = stock_id.parse()?;
            let request = AllocationRequest {
                quantity,
                allocated_to,
                location,
                date: date.unwrap_or_else(|| clock.today()),
            };
            with_notices(desk, &[Collection::Allocated, Collection::Stock], |desk| {
                desk.inventory.allocate(&stock_id, request)?;
                Ok(())
            })
        }
    }
}

/// Confirmation line for one change, e.g. `Item "Printer" has been deleted.`
pub fn notice(collection: Collection, event: &ChangeEvent) -> String {
    let verb = match event.kind {
        ChangeKind::Created => "added",
        ChangeKind::Updated => "updated",
        ChangeKind::Deleted => "deleted",
    };
    format!(
        "{} \"{}\" has been {verb}.",
        collection.noun(),
        collection.display_name(&event.record)
    )
}

fn with_notices(
    desk: &mut Desk,
    collections: &[Collection],
    mutate: impl FnOnce(&mut Desk) -> Result<()>,
) -> Result<String> {
    let notices = Rc::new(RefCell::new(Vec::new()));

    let mut tokens = Vec::with_capacity(collections.len());
    for &collection in collections {
        let sink = Rc::clone(&notices);
        let token = desk.store_mut(collection).subscribe(move |event| {
            sink.borrow_mut().push(notice(collection, event));
            Ok(())
        });
        tokens.push((collection, token));
    }

    let outcome = mutate(desk);

    for (collection, token) in tokens {
        desk.store_mut(collection).unsubscribe(token);
    }
    outcome?;

    let lines = notices.borrow().join("\n");
    Ok(lines)
}
