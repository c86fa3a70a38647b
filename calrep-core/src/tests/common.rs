use crate::Config;
use std::path::PathBuf;

/// Test helper to create a default `Config` for testing purposes.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(data_file: PathBuf) -> Config {
    Config {
        data_file,
        hours_per_day: 7.0,
        date_format: "%-d %b %Y".to_string(),
        timestamp_format: "%d %b %Y %H:%M".to_string(),
        input_datetime_formats: vec![
            "%d %b %Y %H:%M".to_string(),
            "%d %B %Y %H:%M".to_string(),
        ],
    }
}
