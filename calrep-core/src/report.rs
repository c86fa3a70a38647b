//! Aggregates parsed events into a time report.

use crate::event::Event;
use crate::parse_events::{SkippedBlock, parse_event, split_blocks};
use chrono::NaiveDate;
use std::collections::BTreeSet;

const UNKNOWN_LABEL: &str = "Unknown";

/// Running totals over the events of one report.
///
/// `first_date` and `last_date` start at sentinels (`NaiveDate::MAX` and
/// `NaiveDate::MIN`) so the first event always replaces them.
#[derive(Debug, Clone)]
pub struct Tally {
    pub total_hours: f64,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
    pub days: BTreeSet<NaiveDate>,
    count: usize,
}

impl Default for Tally {
    fn default() -> Self {
        Self {
            total_hours: 0.0,
            first_date: NaiveDate::MAX,
            last_date: NaiveDate::MIN,
            days: BTreeSet::new(),
            count: 0,
        }
    }
}

impl Tally {
    pub fn add(mut self, event: &Event) -> Self {
        let start = event.start.date();
        let end = event.end.date();

        self.total_hours += event.hours;
        self.first_date = self.first_date.min(start);
        self.last_date = self.last_date.max(end);
        self.days.insert(start);
        self.days.insert(end);
        self.count += 1;
        self
    }

    /// Date bounds, or `None` when nothing was added.
    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        (self.count > 0).then_some((self.first_date, self.last_date))
    }
}

#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Title of the chronologically first event.
    pub label: String,
    /// Sorted by start time; ties keep their order in the file.
    pub events: Vec<Event>,
    pub total_hours: f64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
    /// Number of calendar days touched by any event's start or end.
    pub unique_days: usize,
    pub skipped: Vec<SkippedBlock>,
}

impl ParseResult {
    /// `total_hours` expressed in working days of `hours_per_day` hours.
    pub fn working_days(&self, hours_per_day: f64) -> f64 {
        self.total_hours / hours_per_day
    }
}

/// Parses every block of a Calendar dump and folds the events into a [`ParseResult`].
///
/// Blocks that cannot be parsed are collected in `skipped` and do not count towards
/// any total.
pub fn build_report(content: &str, formats: &[String]) -> ParseResult {
    let blocks = split_blocks(content);
    log::debug!("Found {} event blocks", blocks.len());

    let mut events = Vec::new();
    let mut skipped = Vec::new();
    for block in blocks {
        match parse_event(&block, formats) {
            Ok(event) => {
                if event.hours < 0.0 {
                    log::warn!(
                        "'{}' ends before it starts ({:.2} hours)",
                        event.title,
                        event.hours
                    );
                }
                events.push(event);
            }
            Err(reason) => {
                log::debug!("Could not parse block ({reason}):\n{block}");
                skipped.push(SkippedBlock { block, reason });
            }
        }
    }

    let tally = events.iter().fold(Tally::default(), Tally::add);

    events.sort_by(|a, b| a.start.cmp(&b.start));

    let label = events
        .first()
        .map(|e| e.title.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string());
    let bounds = tally.bounds();

    ParseResult {
        label,
        events,
        total_hours: tally.total_hours,
        first_date: bounds.map(|(first, _)| first),
        last_date: bounds.map(|(_, last)| last),
        unique_days: tally.days.len(),
        skipped,
    }
}
