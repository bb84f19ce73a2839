//! Date and timestamp rendering (US English month names, UTC).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::options::FormatOptions;

/// Granularity of a rendered date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateStyle {
    /// `5/20/2023`
    Numeric,
    /// `Oct 15, 2024`
    #[default]
    Medium,
    /// `May 20, 2023`
    Long,
    /// `Oct 15, 2024, 09:00 AM`
    DateTime,
    /// `Oct 15, 09:00 AM`
    DateTimeNoYear,
}

impl DateStyle {
    fn pattern(self) -> &'static str {
        match self {
            DateStyle::Numeric => "%-m/%-d/%Y",
            DateStyle::Medium => "%b %-d, %Y",
            DateStyle::Long => "%B %-d, %Y",
            DateStyle::DateTime => "%b %-d, %Y, %I:%M %p",
            DateStyle::DateTimeNoYear => "%b %-d, %I:%M %p",
        }
    }
}

/// Render a calendar date. Time-bearing styles show midnight.
pub fn format_date(date: Option<NaiveDate>, style: DateStyle, opts: &FormatOptions) -> String {
    format_date_time(date.map(|d| d.and_time(NaiveTime::MIN)), style, opts)
}

/// Render a wall-clock timestamp.
pub fn format_date_time(value: Option<NaiveDateTime>, style: DateStyle, opts: &FormatOptions) -> String {
    match value {
        Some(dt) => dt.format(style.pattern()).to_string(),
        None => opts.placeholder.clone(),
    }
}

/// Render a record timestamp such as `created_at`.
pub fn format_timestamp(value: DateTime<Utc>, style: DateStyle, opts: &FormatOptions) -> String {
    format_date_time(Some(value.naive_utc()), style, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn may_20() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 5, 20).unwrap()
    }

    #[test]
    fn renders_each_date_style() {
        let opts = FormatOptions::default();
        assert_eq!(format_date(Some(may_20()), DateStyle::Numeric, &opts), "5/20/2023");
        assert_eq!(format_date(Some(may_20()), DateStyle::Medium, &opts), "May 20, 2023");
        assert_eq!(format_date(Some(may_20()), DateStyle::Long, &opts), "May 20, 2023");

        let oct = NaiveDate::from_ymd_opt(2024, 10, 15).unwrap();
        assert_eq!(format_date(Some(oct), DateStyle::Medium, &opts), "Oct 15, 2024");
        assert_eq!(format_date(Some(oct), DateStyle::Long, &opts), "October 15, 2024");
    }

    #[test]
    fn renders_time_styles_with_twelve_hour_clock() {
        let opts = FormatOptions::default();
        let at = NaiveDate::from_ymd_opt(2025, 1, 15)
            .unwrap()
            .and_hms_opt(14, 20, 0)
            .unwrap();
        assert_eq!(format_date_time(Some(at), DateStyle::DateTime, &opts), "Jan 15, 2025, 02:20 PM");
        assert_eq!(format_date_time(Some(at), DateStyle::DateTimeNoYear, &opts), "Jan 15, 02:20 PM");

        let ts = Utc.with_ymd_and_hms(2024, 10, 15, 9, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts, DateStyle::DateTime, &opts), "Oct 15, 2024, 09:00 AM");
    }

    #[test]
    fn absent_dates_use_placeholder() {
        let opts = FormatOptions::default();
        assert_eq!(format_date(None, DateStyle::Long, &opts), "-");

        let opts = opts.with_placeholder("Not received");
        assert_eq!(format_date_time(None, DateStyle::DateTime, &opts), "Not received");
    }
}
