//! Plain-text report lines.
//!
//! Event line:  `03 Jul 2014 10:00: 4.00 hours done`
//! Summary:
//!   Acme time report between 3 Jul 2014 to 5 Jul 2014 (2 days)
//!   Total hours: 7.50
//!   Total days : 1.07 (7 hours per day)

use crate::event::Event;
use crate::report::ParseResult;
use chrono::NaiveDate;

pub fn format_event_line(event: &Event, timestamp_format: &str) -> String {
    format!(
        "{}: {:.2} hours done",
        event.start.format(timestamp_format),
        event.hours
    )
}

pub fn format_summary_header(result: &ParseResult, date_format: &str) -> String {
    format!(
        "{} time report between {} to {} ({} days)",
        result.label,
        format_date(result.first_date, date_format),
        format_date(result.last_date, date_format),
        result.unique_days
    )
}

pub fn format_total_hours(result: &ParseResult) -> String {
    format!("Total hours: {:.2}", result.total_hours)
}

pub fn format_total_days(result: &ParseResult, hours_per_day: f64) -> String {
    format!(
        "Total days : {:.2} ({} hours per day)",
        result.working_days(hours_per_day),
        hours_per_day
    )
}

/// `-` when there is no date to show.
fn format_date(date: Option<NaiveDate>, date_format: &str) -> String {
    date.map(|d| d.format(date_format).to_string())
        .unwrap_or_else(|| "-".to_string())
}
