mod logging;
mod render;

use anyhow::Result;
use calrep_core::Calrep;
use clap::Parser;
use render::{ColorMode, RenderOptions, Renderer};
use std::{path::PathBuf, process::ExitCode};

/// Time report from Calendar search results
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Prints unparsed blocks and every extracted date range.
    #[arg(long, short)]
    verbose: bool,
    /// Calendar text dump to read (defaults to `data_file` from the config, or `./data.txt`).
    #[arg(long, short, env = "CALREP_FILE")]
    file: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("calrep: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    let calrep = Calrep::new();
    let renderer = Renderer::new(RenderOptions::from_config(
        &calrep.config,
        cli.color.use_color(),
    ));

    let result = calrep.read_report(cli.file.as_deref())?;
    renderer.print_report(&result);
    if cli.verbose {
        renderer.print_skipped(&result.skipped);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn file_flag_accepts_equals_form() {
        let cli = Cli::try_parse_from(["calrep", "--file=export.txt", "-v"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("export.txt")));
        assert!(cli.verbose);
    }
}
