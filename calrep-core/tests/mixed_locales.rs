use calrep_core::{Calrep, Config, Locale, SkipReason};
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

const EXPORT: &str = "\
Client Acme
Scheduled: 03 Jul 2014 10:00 to 14:00

Réunion Acme
Dates\u{a0}: 28 avr. 2025 à 11:00-12:30, UTC+2

Lunch
Location: somewhere

Client Acme
Scheduled: 04 Jul 2014 09:00 to 11:
";

fn write_export(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("data.txt");
    fs::write(&path, content).unwrap();
    (tmp, path)
}

#[test]
fn english_and_french_blocks_share_one_summary() {
    let (_tmp, path) = write_export(EXPORT);
    let calrep = Calrep::with_config(Config::default());

    let result = calrep.read_report(Some(path.as_path())).unwrap();

    assert_eq!(result.events.len(), 3);
    assert_eq!(result.total_hours, 4.0 + 1.5 + 2.0);
    assert_eq!(result.label, "Client Acme");
    assert_eq!(result.first_date, NaiveDate::from_ymd_opt(2014, 7, 3));
    assert_eq!(result.last_date, NaiveDate::from_ymd_opt(2025, 4, 28));
    assert_eq!(result.unique_days, 3);
    assert_eq!(result.events[2].locale, Locale::French);
}

#[test]
fn unparseable_block_is_reported_as_skipped() {
    let (_tmp, path) = write_export(EXPORT);
    let calrep = Calrep::with_config(Config::default());

    let result = calrep.read_report(Some(path.as_path())).unwrap();

    assert_eq!(result.skipped.len(), 1);
    assert_eq!(result.skipped[0].reason, SkipReason::NoDateRange);
    assert!(result.skipped[0].block.starts_with("Lunch"));
}

#[test]
fn export_without_events_still_reports() {
    let (_tmp, path) = write_export("Nothing here\n\nAt all\n");
    let calrep = Calrep::with_config(Config::default());

    let result = calrep.read_report(Some(path.as_path())).unwrap();

    assert!(result.events.is_empty());
    assert_eq!(result.label, "Unknown");
    assert_eq!(result.skipped.len(), 2);
}
