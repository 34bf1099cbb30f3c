//! Word list loading.
//!
//! A word list is plain text with one word per line. Line terminators are
//! stripped and blank lines are skipped; nothing else about a word is touched.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Location, Result};

/// Read a word list from `path`, or from standard input when `path` is `None`.
pub fn read_words(path: Option<&Path>) -> Result<Vec<String>> {
    let words = match path {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    Error::NotFound { path: path.to_path_buf() }
                } else {
                    Error::io(e, path.to_path_buf())
                }
            })?;
            parse_words(BufReader::new(file)).map_err(|e| Error::io(e, path.to_path_buf()))?
        }
        None => parse_words(io::stdin().lock()).map_err(|e| Error::io(e, Location::Stdin))?,
    };

    tracing::debug!(
        "Read {} words from {}",
        words.len(),
        path.map_or_else(|| "stdin".to_string(), |p| p.display().to_string())
    );

    Ok(words)
}

/// Split `reader` into words, dropping line terminators and blank lines.
///
/// Fails with [`io::ErrorKind::InvalidData`] if the input is not UTF-8.
pub fn parse_words<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim_end_matches(['\r', '\n']);
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}
