//! Splits a Calendar dump into event blocks and parses each block into an [`Event`].

use crate::event::{DateRange, Event};
use crate::extract::detect_range;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// All-day events carry no time (`03 Jul 2014 to 05 Jul 2014`); their ends are read as midnight.
const DATE_ONLY_FORMATS: &[&str] = &["%d %b %Y", "%d %B %Y", "%b %d %Y"];

static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t\u{a0}]*\n\s*").unwrap());

/// Why a block did not make it into the report.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// A block needs a title line and at least one more line.
    TooShort,
    /// No `Scheduled:` or `Dates :` line could be extracted.
    NoDateRange,
    /// A range was extracted but `chrono` rejected one of its ends.
    InvalidDate { range: DateRange },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooShort => write!(f, "not enough lines for an event"),
            SkipReason::NoDateRange => write!(f, "could not parse date range"),
            SkipReason::InvalidDate { range } => {
                write!(f, "invalid dates '{}' to '{}'", range.start, range.end)
            }
        }
    }
}

/// A non-critical miss: the block is reported but left out of every total.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedBlock {
    pub block: String,
    pub reason: SkipReason,
}

/// Splits `content` on blank lines. Empty blocks are dropped.
pub fn split_blocks(content: &str) -> Vec<String> {
    let content = content.replace("\r\n", "\n");
    BLANK_LINES
        .split(&content)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses one event block. The first line is the title.
///
/// # Examples
///
/// ```
/// # use calrep_core::parse_events::parse_event;
/// let formats = vec!["%d %b %Y %H:%M".to_string()];
/// let event = parse_event("Client work\nScheduled: 03 Jul 2014 10:00 to 14:00", &formats).unwrap();
/// assert_eq!(event.title, "Client work");
/// assert_eq!(event.hours, 4.0);
/// ```
pub fn parse_event(block: &str, formats: &[String]) -> Result<Event, SkipReason> {
    let lines: Vec<&str> = block.trim().lines().collect();
    if lines.len() < 2 {
        return Err(SkipReason::TooShort);
    }

    let title = lines[0].trim().to_string();
    let range = detect_range(&lines[1..]).ok_or(SkipReason::NoDateRange)?;
    log::debug!("Parsed date range: {} to {} ({})", range.start, range.end, range.locale);

    let (Some(start), Some(end)) = (
        parse_datetime(&range.start, formats),
        parse_datetime(&range.end, formats),
    ) else {
        return Err(SkipReason::InvalidDate { range });
    };

    Ok(Event::new(title, start, end, range.locale, block.to_string()))
}

/// Tries every format in order, then falls back to a bare date at midnight.
fn parse_datetime(s: &str, formats: &[String]) -> Option<NaiveDateTime> {
    formats
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            DATE_ONLY_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
                .map(|d| d.and_time(NaiveTime::MIN))
        })
}
