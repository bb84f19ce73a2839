//! Records and the raw payloads callers submit to create or replace them.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::value::{Money, Value};

/// One entity instance (stock item, allocation, purchase item/order/request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    fields: BTreeMap<String, Value>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(id: RecordId, fields: BTreeMap<String, Value>, at: DateTime<Utc>) -> Self {
        Self {
            id,
            fields,
            created_at: at,
            updated_at: at,
        }
    }

    /// Replace every field, keeping id and `created_at`.
    pub fn replace_fields(&mut self, fields: BTreeMap<String, Value>, at: DateTime<Utc>) {
        self.fields = fields;
        self.updated_at = at;
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_text)
    }

    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_integer)
    }

    pub fn money(&self, name: &str) -> Option<Money> {
        self.get(name).and_then(Value::as_money)
    }

    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        self.get(name).and_then(Value::as_date)
    }

    pub fn date_time(&self, name: &str) -> Option<NaiveDateTime> {
        self.get(name).and_then(Value::as_date_time)
    }

    /// Render this record as the payload an edit form would submit back.
    pub fn to_payload(&self) -> Payload {
        Payload {
            id: Some(self.id.to_string()),
            values: self
                .fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_raw()))
                .collect(),
        }
    }
}

/// Raw form input: an optional id plus string field values.
///
/// Blank values are treated as absent when the payload is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payload {
    id: Option<String>,
    values: BTreeMap<String, String>,
}

impl Payload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn set(mut self, name: impl Into<String>, raw: impl Into<String>) -> Self {
        self.insert(name, raw);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, raw: impl Into<String>) {
        self.values.insert(name.into(), raw.into());
    }

    /// Non-blank raw value of `name`.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Non-blank `(name, raw)` pairs.
    pub fn values(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Non-blank payload id.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// Overlay `self` onto `base`: values present here win, including blanks,
    /// which clear the field.
    pub fn merged_onto(&self, mut base: Payload) -> Payload {
        for (k, v) in &self.values {
            base.values.insert(k.clone(), v.clone());
        }
        base
    }
}

/// Collects `(name, raw)` pairs; a pair named `id` sets the payload id.
impl<K, V> FromIterator<(K, V)> for Payload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut payload = Payload::new();
        for (k, v) in iter {
            let (k, v): (String, String) = (k.into(), v.into());
            if k == "id" {
                payload.id = Some(v);
            } else {
                payload.insert(k, v);
            }
        }
        payload
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_payload_round_trips_raw_values() {
        let mut fields = BTreeMap::new();
        fields.insert("name".to_string(), Value::from("Printer"));
        fields.insert("quantity".to_string(), Value::Integer(5));
        fields.insert("unit_cost".to_string(), Value::Money(Money::from_minor(35_050)));
        let record = Record::new(RecordId::from("STK003"), fields, Utc::now());

        let payload = record.to_payload();
        assert_eq!(payload.id(), Some("STK003"));
        assert_eq!(payload.value("quantity"), Some("5"));
        assert_eq!(payload.value("unit_cost"), Some("350.50"));
    }

    #[test]
    fn merge_overrides_and_blank_clears() {
        let base = Payload::new()
            .with_id("1")
            .set("name", "Chair")
            .set("remarks", "old");
        let patch = Payload::new().set("remarks", "").set("quantity", "4");

        let merged = patch.merged_onto(base);
        assert_eq!(merged.id(), Some("1"));
        assert_eq!(merged.value("name"), Some("Chair"));
        assert_eq!(merged.value("quantity"), Some("4"));
        assert_eq!(merged.value("remarks"), None);
    }

    #[test]
    fn collects_from_pairs() {
        let payload: Payload = [("name", "Desk"), ("quantity", "2")].into_iter().collect();
        assert_eq!(payload.values().count(), 2);
        assert_eq!(payload.id(), None);
    }

    #[test]
    fn collected_id_pair_becomes_the_payload_id() {
        let payload: Payload = [("id", "STK001"), ("name", "Desk")].into_iter().collect();
        assert_eq!(payload.id(), Some("STK001"));
        assert_eq!(payload.value("id"), None);
        assert_eq!(payload.values().count(), 1);
    }
}
