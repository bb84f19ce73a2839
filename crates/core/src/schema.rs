//! Collection schemas: which fields exist, which are required, how raw input is coerced.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{DomainError, DomainResult};
use crate::id::IdPolicy;
use crate::record::Payload;
use crate::value::{DATE_FORMAT, DATE_TIME_FORMAT, Money, Value};

/// How raw form input for a field is coerced into a [`Value`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Money,
    Date,
    DateTime,
}

const DATE_TIME_INPUT_FORMATS: [&str; 4] = [
    DATE_TIME_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

impl FieldKind {
    /// Coerce a non-blank raw string for `field`.
    pub fn coerce(&self, field: &str, raw: &str) -> DomainResult<Value> {
        let raw = raw.trim();
        match self {
            FieldKind::Text => Ok(Value::Text(raw.to_string())),
            FieldKind::Integer => raw.parse::<i64>().map(Value::Integer).map_err(|_| {
                DomainError::validation(format!("field `{field}`: expected a whole number, got {raw:?}"))
            }),
            FieldKind::Money => Money::parse(raw).map(Value::Money).map_err(|_| {
                DomainError::validation(format!("field `{field}`: expected an amount, got {raw:?}"))
            }),
            FieldKind::Date => NaiveDate::parse_from_str(raw, DATE_FORMAT)
                .or_else(|_| parse_date_time(raw).map(|dt| dt.date()))
                .map(Value::Date)
                .map_err(|_| {
                    DomainError::validation(format!("field `{field}`: expected a YYYY-MM-DD date, got {raw:?}"))
                }),
            FieldKind::DateTime => parse_date_time(raw)
                .or_else(|_| {
                    NaiveDate::parse_from_str(raw, DATE_FORMAT)
                        .map(|d| d.and_time(NaiveTime::MIN))
                })
                .map(Value::DateTime)
                .map_err(|_| {
                    DomainError::validation(format!(
                        "field `{field}`: expected a YYYY-MM-DD HH:MM:SS timestamp, got {raw:?}"
                    ))
                }),
        }
    }
}

fn parse_date_time(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    for fmt in &DATE_TIME_INPUT_FORMATS[1..] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt);
        }
    }
    NaiveDateTime::parse_from_str(raw, DATE_TIME_INPUT_FORMATS[0])
}

/// Record metadata names; payloads may not carry them as data fields.
pub const RESERVED_FIELDS: [&str; 3] = ["id", "created_at", "updated_at"];

/// A single declared field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

/// Shape of one collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    collection: &'static str,
    id_policy: IdPolicy,
    fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(collection: &'static str, id_policy: IdPolicy) -> Self {
        Self {
            collection,
            id_policy,
            fields: Vec::new(),
        }
    }

    pub fn required(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            name,
            kind,
            required: true,
        });
        self
    }

    pub fn optional(mut self, name: &'static str, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec {
            name,
            kind,
            required: false,
        });
        self
    }

    pub fn collection(&self) -> &'static str {
        self.collection
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate `payload` and coerce its raw values.
    ///
    /// Blank values count as absent. Fields the schema does not declare are
    /// kept as text. All missing required fields are reported together.
    /// Metadata names (`id`, `created_at`, `updated_at`) are refused.
    pub fn build_fields(&self, payload: &Payload) -> DomainResult<BTreeMap<String, Value>> {
        if let Some(name) = RESERVED_FIELDS.iter().find(|name| payload.value(name).is_some()) {
            return Err(DomainError::validation(format!(
                "{}: `{name}` is not a data field",
                self.collection
            )));
        }

        let missing: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required && payload.value(f.name).is_none())
            .map(|f| f.name)
            .collect();
        if !missing.is_empty() {
            return Err(DomainError::validation(format!(
                "{}: missing required field(s): {}",
                self.collection,
                missing.join(", ")
            )));
        }

        let mut out = BTreeMap::new();
        for (name, raw) in payload.values() {
            let kind = self.field(name).map(|f| f.kind).unwrap_or(FieldKind::Text);
            out.insert(name.to_string(), kind.coerce(name, raw)?);
        }
        Ok(out)
    }
}
