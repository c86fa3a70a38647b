use crate::{
    config::Config,
    report::{ParseResult, build_report},
};
use anyhow::{Context, Result};
use std::{fs, path::Path};

pub struct Calrep {
    pub config: Config,
}

impl Calrep {
    /// Creates a new `Calrep` instance, loading configuration from standard paths.
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    /// Creates a new `Calrep` instance with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Reads a Calendar dump and builds its time report.
    ///
    /// `path` overrides `config.data_file`. Only an unreadable file is an error;
    /// unparseable blocks end up in [`ParseResult::skipped`].
    pub fn read_report(&self, path: Option<&Path>) -> Result<ParseResult> {
        let path = path.unwrap_or(self.config.data_file.as_path());
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))
            .context("Failed to parse calendar data")?;
        Ok(self.parse_report(&content))
    }

    pub fn parse_report(&self, content: &str) -> ParseResult {
        build_report(content, &self.config.input_datetime_formats)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Calrep, tests::mk_config};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_configured_data_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("data.txt");
        fs::write(&path, "Acme\nScheduled: 03 Jul 2014 10:00 to 14:00\n").unwrap();

        let calrep = Calrep::with_config(mk_config(path));
        let result = calrep.read_report(None).unwrap();
        assert_eq!(result.total_hours, 4.0);
        assert_eq!(result.label, "Acme");
    }

    #[test]
    fn path_override_wins() {
        let tmp = tempdir().unwrap();
        let other = tmp.path().join("other.txt");
        fs::write(&other, "Other\nScheduled: 03 Jul 2014 10:00 to 11:00\n").unwrap();

        let calrep = Calrep::with_config(mk_config(tmp.path().join("missing.txt")));
        let result = calrep.read_report(Some(other.as_path())).unwrap();
        assert_eq!(result.label, "Other");
    }

    #[test]
    fn missing_file_is_an_error() {
        let tmp = tempdir().unwrap();
        let calrep = Calrep::with_config(mk_config(tmp.path().join("missing.txt")));
        let err = calrep.read_report(None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse calendar data"));
        assert!(format!("{err:#}").contains("missing.txt"));
    }
}
