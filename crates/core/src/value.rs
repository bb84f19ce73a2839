//! Scalar field values.

use core::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Monetary amount in the smallest currency unit (two decimal places).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub fn from_major(major: i64) -> Self {
        Self(major.saturating_mul(100))
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    /// `self × quantity`, or `None` on overflow.
    pub fn checked_mul(self, quantity: i64) -> Option<Money> {
        self.0.checked_mul(quantity).map(Money)
    }

    /// Parse a decimal amount such as `89000`, `250.5` or `-12.75`.
    ///
    /// At most two fractional digits are accepted; grouping separators are not.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let raw = raw.trim();
        let invalid = || DomainError::validation(format!("invalid amount {raw:?}"));

        let (negative, unsigned) = match raw.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, raw),
        };
        let (whole, frac) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
            || frac.len() > 2
            || (unsigned.contains('.') && frac.is_empty())
        {
            return Err(invalid());
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };
        let cents: i64 = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse().map_err(|_| invalid())?,
        };
        let minor = whole
            .checked_mul(100)
            .and_then(|m| m.checked_add(cents))
            .ok_or_else(invalid)?;
        Ok(Money(if negative { -minor } else { minor }))
    }
}

impl core::fmt::Display for Money {
    /// Plain decimal rendering (`1234.50`), used when round-tripping into forms.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let (whole, cents) = (abs / 100, abs % 100);
        if cents == 0 {
            write!(f, "{sign}{whole}")
        } else {
            write!(f, "{sign}{whole}.{cents:02}")
        }
    }
}

/// A single field value stored on a record.
///
/// Absent values are not represented here: a field that is not set is simply
/// missing from the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Text(String),
    Integer(i64),
    Money(Money),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_money(&self) -> Option<Money> {
        match self {
            Value::Money(m) => Some(*m),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Value::Date(d) => Some(*d),
            Value::DateTime(dt) => Some(dt.date()),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Raw string form, as an edit form would show it.
    pub fn to_raw(&self) -> String {
        match self {
            Value::Text(s) => s.clone(),
            Value::Integer(n) => n.to_string(),
            Value::Money(m) => m.to_string(),
            Value::Date(d) => d.format(DATE_FORMAT).to_string(),
            Value::DateTime(dt) => dt.format(DATE_TIME_FORMAT).to_string(),
        }
    }

    /// Ordering used when a caller sorts a listing by this field.
    ///
    /// Values of the same kind compare naturally (text case-insensitively);
    /// mixed kinds fall back to their raw strings.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Money(a), Value::Money(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (Value::DateTime(a), Value::DateTime(b)) => a.cmp(b),
            (a, b) => a.to_raw().cmp(&b.to_raw()),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<Money> for Value {
    fn from(value: Money) -> Self {
        Value::Money(value)
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Value::Date(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Value::DateTime(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(Money::parse("89000").unwrap(), Money::from_major(89_000));
        assert_eq!(Money::parse("250.5").unwrap(), Money::from_minor(25_050));
        assert_eq!(Money::parse("0.07").unwrap(), Money::from_minor(7));
        assert_eq!(Money::parse(".5").unwrap(), Money::from_minor(50));
        assert_eq!(Money::parse("-12.75").unwrap(), Money::from_minor(-1_275));
    }

    #[test]
    fn rejects_malformed_amounts() {
        for raw in ["", "-", ".", "1,000", "12.345", "abc", "1.", "1e3", "--1"] {
            assert!(Money::parse(raw).is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn money_display_drops_zero_cents() {
        assert_eq!(Money::from_major(7_500).to_string(), "7500");
        assert_eq!(Money::from_minor(25_050).to_string(), "250.50");
        assert_eq!(Money::from_minor(-5).to_string(), "-0.05");
    }

    #[test]
    fn text_sorts_case_insensitively() {
        let a = Value::from("apple");
        let b = Value::from("Banana");
        assert_eq!(a.sort_cmp(&b), Ordering::Less);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: the form rendering of an amount parses back to the same amount.
        #[test]
        fn money_display_parses_back(minor in -1_000_000_000i64..1_000_000_000i64) {
            let money = Money::from_minor(minor);
            prop_assert_eq!(Money::parse(&money.to_string()).unwrap(), money);
        }
    }
}
