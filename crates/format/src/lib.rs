//! `stockdesk-format` — display helpers for record fields.
//!
//! Pure, stateless functions. Absent input renders as the configured
//! placeholder; tags outside their lookup table are an error rather than a
//! blank cell.

pub mod currency;
pub mod date;
pub mod options;
pub mod tag;
pub mod value;

pub use currency::{format_currency, format_line_total, group_digits, line_total};
pub use date::{DateStyle, format_date, format_date_time, format_timestamp};
pub use options::FormatOptions;
pub use tag::{Badge, TagTable};
pub use value::format_value;
