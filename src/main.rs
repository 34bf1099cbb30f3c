//! `combos` - generate every combination of two words from a word list.

use std::process::ExitCode;

use anyhow::Context;
use combos::config::{Config, ParseOutcome, USAGE};
use combos::error::Error;

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(ParseOutcome::Run(config)) => config,
        Ok(ParseOutcome::Help) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Run 'combos --help' for usage information.");
            return ExitCode::from(e.exit_code());
        }
    };

    init_logging(config.verbose);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(err.downcast_ref::<Error>().map_or(1, Error::exit_code))
        }
    }
}

/// Route `tracing` events (emitted as `log` records) to stderr.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(config: &Config) -> anyhow::Result<()> {
    let words = combos::read_words(config.wordlist.as_deref())
        .context("failed to read word list")?;
    let output = combos::generate(&words, &config.options);
    combos::write_words(config.output.as_deref(), &output)
        .context("failed to write combinations")?;
    Ok(())
}
