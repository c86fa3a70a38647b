use chrono::NaiveDateTime;
use strum_macros::{AsRefStr, Display};

/// Which flavor of Calendar export a block was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Locale {
    /// `Scheduled: 03 Jul 2014 10:00 to 14:00`
    English,
    /// `Dates : 28 avr. 2025 à 11:00-12:30, UTC+2`
    French,
}

/// A start/end pair normalized into strings `chrono` can parse,
/// e.g. `("28 Apr 2025 11:00", "28 Apr 2025 12:30")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// `end - start` in hours. Can be negative if the export is inconsistent.
    pub hours: f64,
    pub locale: Locale,
    /// The block the event was parsed from.
    pub raw: String,
}

impl Event {
    pub fn new(
        title: String,
        start: NaiveDateTime,
        end: NaiveDateTime,
        locale: Locale,
        raw: String,
    ) -> Self {
        let hours = (end - start).num_seconds() as f64 / 3600.0;
        Self {
            title,
            start,
            end,
            hours,
            locale,
            raw,
        }
    }
}
