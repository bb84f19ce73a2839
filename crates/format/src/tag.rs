//! Closed lookup tables for enumerated fields.

use serde::Serialize;

use stockdesk_core::{DomainError, DomainResult};

/// Display label plus the color class a view styles the tag with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub color_class: &'static str,
}

/// A fixed set of tag values for one enumerated field.
#[derive(Debug)]
pub struct TagTable {
    name: &'static str,
    entries: &'static [(&'static str, Badge)],
}

impl TagTable {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, Badge)]) -> Self {
        Self { name, entries }
    }

    /// Badge for `value`; values are matched exactly.
    pub fn badge(&self, value: &str) -> DomainResult<Badge> {
        self.entries
            .iter()
            .find(|(tag, _)| *tag == value)
            .map(|(_, badge)| *badge)
            .ok_or_else(|| DomainError::unknown_enum_value(self.name, value))
    }

    pub fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|(tag, _)| *tag == value)
    }

    pub fn values(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(tag, _)| *tag)
    }
}
