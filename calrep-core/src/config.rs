use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};

const DEFAULT_DATA_FILE: &str = "./data.txt";
const DEFAULT_HOURS_PER_DAY: f64 = 7.0;
const DEFAULT_DATE_FORMAT: &str = "%-d %b %Y";
const DEFAULT_TIMESTAMP_FORMAT: &str = "%d %b %Y %H:%M";
/// Formats tried, in order, on every normalized start/end string.
const DEFAULT_INPUT_FORMATS: &[&str] = &["%d %b %Y %H:%M", "%d %B %Y %H:%M", "%b %d %Y %H:%M"];

#[derive(Debug, Clone)]
pub struct Config {
    /// Calendar dump read when no `--file` is given.
    pub data_file: PathBuf,
    /// Divisor for the "Total days" line. Default is 7.
    pub hours_per_day: f64,
    /// Format of the first/last dates in the summary (e.g. `3 Jul 2014`).
    pub date_format: String,
    /// Format of the start timestamp on each event line (e.g. `03 Jul 2014 10:00`).
    pub timestamp_format: String,
    pub input_datetime_formats: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    data_file: Option<PathBuf>,
    hours_per_day: Option<f64>,
    date_format: Option<String>,
    timestamp_format: Option<String>,
    input_datetime_formats: Option<Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::from_file_config(FileConfig::default())
    }
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native) and apply defaults.
    /// A missing, unreadable or malformed config file is logged and replaced by the defaults,
    /// so loading never fails.
    pub fn load() -> Self {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            log::warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let hours_per_day = file_config
            .hours_per_day
            .filter(|h| h.is_finite() && *h > 0.0)
            .unwrap_or(DEFAULT_HOURS_PER_DAY);

        let input_datetime_formats = file_config
            .input_datetime_formats
            .filter(|formats| !formats.is_empty())
            .unwrap_or_else(|| DEFAULT_INPUT_FORMATS.iter().map(|f| f.to_string()).collect());

        Self {
            data_file: file_config
                .data_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            hours_per_day,
            date_format: file_config
                .date_format
                .unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
            timestamp_format: file_config
                .timestamp_format
                .unwrap_or_else(|| DEFAULT_TIMESTAMP_FORMAT.to_string()),
            input_datetime_formats,
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("calrep")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("calrep").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
