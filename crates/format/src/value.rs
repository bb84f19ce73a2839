use stockdesk_core::Value;

use crate::currency::{format_currency, group_digits};
use crate::date::{DateStyle, format_date, format_date_time};
use crate::options::FormatOptions;

/// Generic rendering of a record field for detail views.
///
/// Money gets the currency prefix, integers are grouped, dates use the long
/// style and timestamps the date-time style.
pub fn format_value(value: Option<&Value>, opts: &FormatOptions) -> String {
    match value {
        None => opts.placeholder.clone(),
        Some(Value::Text(s)) => s.clone(),
        Some(Value::Integer(n)) => {
            let sign = if *n < 0 { "-" } else { "" };
            format!("{sign}{}", group_digits(n.unsigned_abs()))
        }
        Some(Value::Money(m)) => format_currency(*m, opts),
        Some(Value::Date(d)) => format_date(Some(*d), DateStyle::Long, opts),
        Some(Value::DateTime(dt)) => format_date_time(Some(*dt), DateStyle::DateTime, opts),
    }
}
