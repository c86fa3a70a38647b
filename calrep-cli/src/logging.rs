use log::LevelFilter;

/// Diagnostics go to stderr so stdout only carries the report.
/// `RUST_LOG` still overrides the level picked from `--verbose`.
/// Called once, at the start of `run`.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
