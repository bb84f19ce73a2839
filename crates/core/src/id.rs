//! Record identifiers and the policies that generate them.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// Identifier of a record, unique within its collection.
///
/// Ids are opaque strings. Collections that number their records (`STK001`,
/// `7`) still store the rendered string so callers never have to know which
/// policy produced an id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<Uuid> for RecordId {
    fn from(value: Uuid) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for RecordId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("id cannot be blank"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

/// How a collection assigns ids to records created without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdPolicy {
    /// Zero-padded sequence behind a fixed prefix, e.g. `STK006`.
    Prefixed { prefix: &'static str, width: usize },
    /// Plain decimal sequence starting at 1.
    Sequential,
    /// Time-ordered UUIDv7.
    Uuid,
}

impl IdPolicy {
    /// Render the id for sequence number `n`.
    ///
    /// Returns `None` for policies that are not sequence based.
    pub fn render(&self, n: u64) -> Option<RecordId> {
        match self {
            IdPolicy::Prefixed { prefix, width } => {
                Some(RecordId(format!("{prefix}{n:0width$}", width = *width)))
            }
            IdPolicy::Sequential => Some(RecordId(n.to_string())),
            IdPolicy::Uuid => None,
        }
    }

    /// Sequence number encoded in `id`, if it follows this policy's shape.
    ///
    /// Used to keep generated ids ahead of ids callers supplied explicitly.
    pub fn sequence_of(&self, id: &RecordId) -> Option<u64> {
        match self {
            IdPolicy::Prefixed { prefix, .. } => id
                .as_str()
                .strip_prefix(prefix)
                .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|digits| digits.parse().ok()),
            IdPolicy::Sequential => id.as_str().parse().ok(),
            IdPolicy::Uuid => None,
        }
    }

    /// Produce a fresh id that `taken` reports as unused.
    ///
    /// `next` is the collection's sequence cursor and is advanced past the
    /// returned id. Fails with `Validation` once the sequence is exhausted.
    pub fn generate(&self, next: &mut u64, taken: impl Fn(&RecordId) -> bool) -> DomainResult<RecordId> {
        loop {
            let candidate = match self.render(*next) {
                Some(id) => {
                    *next = next
                        .checked_add(1)
                        .ok_or_else(|| DomainError::validation("id sequence exhausted"))?;
                    id
                }
                None => RecordId::from(Uuid::now_v7()),
            };
            if !taken(&candidate) {
                return Ok(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STOCK: IdPolicy = IdPolicy::Prefixed {
        prefix: "STK",
        width: 3,
    };

    #[test]
    fn prefixed_ids_are_zero_padded() {
        assert_eq!(STOCK.render(6), Some(RecordId::from("STK006")));
        assert_eq!(STOCK.render(1234), Some(RecordId::from("STK1234")));
    }

    #[test]
    fn sequence_of_only_accepts_matching_shape() {
        assert_eq!(STOCK.sequence_of(&"STK012".into()), Some(12));
        assert_eq!(STOCK.sequence_of(&"ASTK012".into()), None);
        assert_eq!(STOCK.sequence_of(&"STK".into()), None);
        assert_eq!(STOCK.sequence_of(&"STK-1".into()), None);
        assert_eq!(IdPolicy::Sequential.sequence_of(&"42".into()), Some(42));
        assert_eq!(IdPolicy::Uuid.sequence_of(&"42".into()), None);
    }

    #[test]
    fn generate_skips_taken_ids() {
        let mut next = 1;
        let id = IdPolicy::Sequential
            .generate(&mut next, |id| id.as_str() == "1" || id.as_str() == "2")
            .unwrap();
        assert_eq!(id, RecordId::from("3"));
        assert_eq!(next, 4);
    }

    #[test]
    fn exhausted_sequence_is_a_validation_error() {
        let mut next = u64::MAX;
        let err = STOCK.generate(&mut next, |_| false).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(next, u64::MAX);
    }

    #[test]
    fn uuid_policy_generates_distinct_ids() {
        let mut next = 1;
        let a = IdPolicy::Uuid.generate(&mut next, |_| false).unwrap();
        let b = IdPolicy::Uuid.generate(&mut next, |_| false).unwrap();
        assert_ne!(a, b);
        assert!(Uuid::from_str(a.as_str()).is_ok());
        assert_eq!(next, 1);
    }

    #[test]
    fn blank_id_is_rejected() {
        let err = RecordId::from_str("   ").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(RecordId::from_str(" STK001 ").unwrap(), RecordId::from("STK001"));
    }
}
