//! Writing the generated word list.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Location, Result};

/// Write `words` one per line to `path`, or to standard output when `path`
/// is `None`. An existing file is truncated.
///
/// A failure part way through leaves whatever was already written in place.
pub fn write_words(path: Option<&Path>, words: &[String]) -> Result<()> {
    match path {
        Some(path) => {
            let file = File::create(path).map_err(|e| Error::io(e, path.to_path_buf()))?;
            write_to(file, words).map_err(|e| Error::io(e, path.to_path_buf()))?;
            tracing::debug!("Wrote {} words to {}", words.len(), path.display());
        }
        None => {
            write_to(io::stdout().lock(), words).map_err(|e| Error::io(e, Location::Stdout))?;
            tracing::debug!("Wrote {} words to stdout", words.len());
        }
    }
    Ok(())
}

/// Write `words` to `writer`, each followed by a newline.
pub fn write_to<W: Write>(writer: W, words: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(writer);
    for word in words {
        writer.write_all(word.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()
}
