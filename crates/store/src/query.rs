//! Listing queries: field filters, free-text search and an optional sort.

use core::cmp::Ordering;

use stockdesk_core::{Record, Value};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Selection and ordering for [`EntityStore::list`](crate::EntityStore::list).
///
/// The default query matches every record and keeps insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    equals: Vec<(String, String)>,
    search: Option<String>,
    sort: Option<(String, SortDirection)>,
}

impl Query {
    pub fn all() -> Self {
        Self::default()
    }

    /// Keep records whose `field` renders to `value` (ASCII case-insensitive).
    ///
    /// `id`, `created_at` and `updated_at` address the record metadata.
    pub fn where_eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.equals.push((field.into(), value.into()));
        self
    }

    /// Keep records where any text field or the id contains `term`
    /// (case-insensitive). A blank term matches everything.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        let term = term.into().trim().to_lowercase();
        self.search = (!term.is_empty()).then_some(term);
        self
    }

    /// Order by `field`. Records lacking the field sort last in either
    /// direction; ties keep insertion order.
    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = Some((field.into(), direction));
        self
    }

    pub fn matches(&self, record: &Record) -> bool {
        let equals_ok = self.equals.iter().all(|(field, expected)| {
            field_raw(record, field).is_some_and(|raw| raw.eq_ignore_ascii_case(expected.trim()))
        });
        if !equals_ok {
            return false;
        }

        match &self.search {
            None => true,
            Some(term) => {
                record.id().as_str().to_lowercase().contains(term)
                    || record
                        .fields()
                        .values()
                        .filter_map(Value::as_text)
                        .any(|text| text.to_lowercase().contains(term))
            }
        }
    }

    /// Filter and order `records`, cloning the survivors.
    pub fn apply<'a>(&self, records: impl IntoIterator<Item = &'a Record>) -> Vec<Record> {
        let mut out: Vec<Record> = records
            .into_iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect();

        if let Some((field, direction)) = &self.sort {
            out.sort_by(|a, b| compare_field(a, b, field, *direction));
        }
        out
    }
}

fn field_raw(record: &Record, field: &str) -> Option<String> {
    match field {
        "id" => Some(record.id().to_string()),
        "created_at" => Some(record.created_at().to_rfc3339()),
        "updated_at" => Some(record.updated_at().to_rfc3339()),
        _ => record.get(field).map(Value::to_raw),
    }
}

fn sort_key(record: &Record, field: &str) -> Option<Value> {
    match field {
        "id" => Some(Value::from(record.id().as_str())),
        "created_at" => Some(Value::DateTime(record.created_at().naive_utc())),
        "updated_at" => Some(Value::DateTime(record.updated_at().naive_utc())),
        _ => record.get(field).cloned(),
    }
}

fn compare_field(a: &Record, b: &Record, field: &str, direction: SortDirection) -> Ordering {
    match (sort_key(a, field), sort_key(b, field)) {
        (Some(x), Some(y)) => match direction {
            SortDirection::Ascending => x.sort_cmp(&y),
            SortDirection::Descending => y.sort_cmp(&x),
        },
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
