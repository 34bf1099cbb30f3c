//! Command line configuration.
//!
//! Arguments are parsed by hand into a [`Config`] value that is handed to the
//! reader, generator and writer, so nothing downstream looks at process-wide
//! state.

use std::ffi::OsString;
use std::path::PathBuf;

use crate::combine::Options;
use crate::error::{Error, Result};

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
combos - generate every combination of two words from a list of words

USAGE:
    combos [OPTIONS]

Words are read one per line from the word list, or from standard input when
no word list is given. Results go to standard output unless an output file
is given. The original words are written first, then every ordered pair.

OPTIONS:
    -w, --wordlist <PATH>       Word list to read (default: stdin)
    -o, --output-file <PATH>    File to write, truncated if it exists (default: stdout)
        --no-self               Do not combine a word with itself
        --no-duplicate          Drop repeated input words, keeping the first
    -l, --limit <N>             Stop after N combinations (original words not counted)
    -v, --verbose               Log progress to stderr (RUST_LOG overrides)
    -h, --help                  Print this help
";

/// Configuration for a single run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Word list to read, `None` for standard input.
    pub wordlist: Option<PathBuf>,
    /// File to write, `None` for standard output.
    pub output: Option<PathBuf>,
    /// Generator options.
    pub options: Options,
    /// Enable debug logging.
    pub verbose: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Generate combinations with this configuration.
    Run(Config),
    /// Print usage and exit.
    Help,
}

impl Config {
    /// Parse the current process arguments.
    pub fn from_env() -> Result<ParseOutcome> {
        Self::parse(std::env::args_os().skip(1))
    }

    /// Parse `args`, which must not include the program name.
    ///
    /// Option values are kept as raw OS strings, so paths need not be UTF-8.
    pub fn parse<I, S>(args: I) -> Result<ParseOutcome>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let Some(arg) = arg.to_str() else {
                return Err(Error::argument(format!(
                    "unknown argument '{}'",
                    arg.to_string_lossy()
                )));
            };
            let (flag, inline) = split_inline(arg);
            match flag {
                "-h" | "--help" => return Ok(ParseOutcome::Help),
                "-w" | "--wordlist" => {
                    config.wordlist = optional_path(take_value(flag, inline, &mut args)?);
                }
                "-o" | "--output-file" => {
                    config.output = optional_path(take_value(flag, inline, &mut args)?);
                }
                "-l" | "--limit" => {
                    let value = take_value(flag, inline, &mut args)?;
                    let limit = value
                        .to_str()
                        .and_then(|v| v.parse::<usize>().ok())
                        .ok_or_else(|| {
                            Error::argument(format!(
                                "invalid value '{}' for {flag}: expected a non-negative integer",
                                value.to_string_lossy()
                            ))
                        })?;
                    config.options.limit = Some(limit);
                }
                "--no-self" => {
                    reject_value(flag, inline)?;
                    config.options.no_self = true;
                }
                "--no-duplicate" => {
                    reject_value(flag, inline)?;
                    config.options.no_duplicate = true;
                }
                "-v" | "--verbose" => {
                    reject_value(flag, inline)?;
                    config.verbose = true;
                }
                other => return Err(Error::argument(format!("unknown argument '{other}'"))),
            }
        }

        Ok(ParseOutcome::Run(config))
    }
}

/// Split `--flag=value` into its parts. Short flags never carry inline values.
fn split_inline(arg: &str) -> (&str, Option<&str>) {
    match arg.split_once('=') {
        Some((flag, value)) if flag.starts_with("--") => (flag, Some(value)),
        _ => (arg, None),
    }
}

fn take_value(
    flag: &str,
    inline: Option<&str>,
    rest: &mut impl Iterator<Item = OsString>,
) -> Result<OsString> {
    inline
        .map(OsString::from)
        .or_else(|| rest.next())
        .ok_or_else(|| Error::argument(format!("{flag} requires a value")))
}

fn reject_value(flag: &str, inline: Option<&str>) -> Result<()> {
    if inline.is_some() {
        return Err(Error::argument(format!("{flag} does not take a value")));
    }
    Ok(())
}

/// An empty path means the standard stream.
fn optional_path(value: OsString) -> Option<PathBuf> {
    (!value.is_empty()).then(|| PathBuf::from(value))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    fn run(args: &[&str]) -> Config {
        match Config::parse(args.iter().copied()) {
            Ok(ParseOutcome::Run(config)) => config,
            other => panic!("Expected Run, got {other:?}"),
        }
    }

    fn argument_error(args: &[&str]) -> String {
        match Config::parse(args.iter().copied()) {
            Err(Error::Argument(message)) => message,
            other => panic!("Expected Argument error, got {other:?}"),
        }
    }

    #[test]
    fn test_defaults_use_standard_streams() {
        assert_eq!(run(&[]), Config::default());
    }

    #[test]
    fn test_all_options() {
        let config = run(&[
            "-w", "in.txt", "--output-file", "out.txt", "--no-self", "--no-duplicate", "-l", "5",
            "-v",
        ]);
        assert_eq!(config.wordlist, Some(PathBuf::from("in.txt")));
        assert_eq!(config.output, Some(PathBuf::from("out.txt")));
        assert_eq!(
            config.options,
            Options { no_self: true, no_duplicate: true, limit: Some(5) }
        );
        assert!(config.verbose);
    }

    #[test]
    fn test_inline_values() {
        let config = run(&["--wordlist=words.txt", "--limit=0"]);
        assert_eq!(config.wordlist, Some(PathBuf::from("words.txt")));
        assert_eq!(config.options.limit, Some(0));
    }

    #[test]
    fn test_empty_path_means_stdio() {
        let config = run(&["-w", "", "--output-file="]);
        assert_eq!(config.wordlist, None);
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_help_wins() {
        assert_eq!(Config::parse(["--no-self", "-h"]).unwrap(), ParseOutcome::Help);
    }

    #[test]
    fn test_unknown_argument() {
        assert!(argument_error(&["--frobnicate"]).contains("--frobnicate"));
    }

    #[test]
    fn test_missing_value() {
        assert_eq!(argument_error(&["-o"]), "-o requires a value");
    }

    #[test]
    fn test_bad_limit() {
        assert!(argument_error(&["--limit", "-3"]).contains("non-negative integer"));
        assert!(argument_error(&["--limit", "many"]).contains("'many'"));
    }

    #[test]
    fn test_flag_with_value_rejected() {
        assert_eq!(argument_error(&["--no-self=yes"]), "--no-self does not take a value");
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_path_value() {
        use std::os::unix::ffi::OsStringExt;

        let path = OsString::from_vec(b"w\xffords.txt".to_vec());
        match Config::parse([OsString::from("-w"), path.clone()]) {
            Ok(ParseOutcome::Run(config)) => assert_eq!(config.wordlist, Some(PathBuf::from(path))),
            other => panic!("Expected Run, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_flag_is_argument_error() {
        use std::os::unix::ffi::OsStringExt;

        let arg = OsString::from_vec(b"--no-\xff".to_vec());
        assert!(matches!(Config::parse([arg]), Err(Error::Argument(_))));
    }
}
