//! Detects the schedule line of an event block and extracts a normalized start/end pair.
//!
//! English (`Scheduled: 03 Jul 2014 10:00 to 14:00`) and French
//! (`Dates : 28 avr. 2025 à 11:00-12:30, UTC+2`) exports are supported. The
//! timezone suffix of French exports is dropped: instants are naive local times.

use crate::event::{DateRange, Locale};
use crate::months::normalize_french_date;
use once_cell::sync::Lazy;
use regex::Regex;

const ENGLISH_MARKER: &str = "Scheduled:";
const FRENCH_MARKER: &str = "Dates";

static UTC_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",?\s*UTC\s*[+\-−]\d{1,2}(?::?\d{2})?").unwrap());

static FRENCH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(.+?)\s+[àaÀA]\s+(\d{1,2}:\d{2})\s*[-–]\s*(\d{1,2}:\d{2})$").unwrap()
});

/// Scans the lines of a block (title excluded) for a schedule line.
/// The first line that yields a range wins.
pub fn detect_range(lines: &[&str]) -> Option<DateRange> {
    lines.iter().map(|line| line.trim()).find_map(|line| {
        if let Some(value) = english_value(line) {
            return english_range(value);
        }
        french_value(line).and_then(french_range)
    })
}

fn english_value(line: &str) -> Option<&str> {
    line.strip_prefix(ENGLISH_MARKER).map(str::trim)
}

/// `Dates : …`, with regular, non-breaking or narrow non-breaking spaces around the colon.
fn french_value(line: &str) -> Option<&str> {
    line.strip_prefix(FRENCH_MARKER)?
        .trim_start()
        .strip_prefix(':')
        .map(str::trim)
}

/// Parses `<start> to <end>`. A bare `<end>` time shares the start's date.
///
/// ```
/// # use calrep_core::extract::english_range;
/// let range = english_range("03 Jul 2014 10:00 to 14:").unwrap();
/// assert_eq!(range.start, "03 Jul 2014 10:00");
/// assert_eq!(range.end, "03 Jul 2014 14:00");
/// ```
pub fn english_range(value: &str) -> Option<DateRange> {
    let parts: Vec<&str> = value.split(" to ").collect();
    if parts.len() != 2 {
        return None;
    }

    let start = strip_at(parts[0]);
    let end = strip_at(parts[1]);
    if start.is_empty() || end.is_empty() {
        return None;
    }

    let end = if is_bare_time(&end) {
        let (date, _time) = start.rsplit_once(' ')?;
        format!("{} {}", date, pad_time(&end))
    } else {
        end
    };

    Some(DateRange {
        start,
        end,
        locale: Locale::English,
    })
}

/// Parses `<date> à <HH:MM>-<HH:MM>[, UTC±N]`, translating the month to English.
///
/// ```
/// # use calrep_core::extract::french_range;
/// let range = french_range("28 avr. 2025 à 11:00-12:30, UTC+2").unwrap();
/// assert_eq!(range.start, "28 Apr 2025 11:00");
/// assert_eq!(range.end, "28 Apr 2025 12:30");
/// ```
pub fn french_range(value: &str) -> Option<DateRange> {
    let cleaned = UTC_SUFFIX.replace(value, "");
    let caps = FRENCH_RANGE.captures(cleaned.trim())?;

    let date = normalize_french_date(caps[1].trim());
    let start_time = pad_time(&caps[2]);
    let end_time = pad_time(&caps[3]);

    Some(DateRange {
        start: format!("{date} {start_time}"),
        end: format!("{date} {end_time}"),
        locale: Locale::French,
    })
}

/// `3 Jul 2014 at 10:00` reads the same as `3 Jul 2014 10:00`.
fn strip_at(s: &str) -> String {
    s.trim().replace(" at ", " ")
}

/// `14:00`, `8:00` or `14:`, with no date in front.
fn is_bare_time(s: &str) -> bool {
    s.len() <= 5 && s.contains(':') && s.chars().all(|c| c.is_ascii_digit() || c == ':')
}

/// `14:` → `14:00`, `8:00` → `08:00`.
fn pad_time(s: &str) -> String {
    match s.split_once(':') {
        Some((h, m)) => {
            let m = if m.is_empty() { "00" } else { m };
            format!("{h:0>2}:{m:0>2}")
        }
        None => s.to_string(),
    }
}
