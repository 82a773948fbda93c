pub mod extremum;
pub mod find;
pub mod init;
pub mod joke;
pub mod list;
pub mod quiz;
pub mod validate;

use std::io::BufRead;
use std::path::{Path, PathBuf};

use anyhow::Result;

use classdesk_core::config::load_config_from;
use classdesk_core::engine::Gradebook;
use classdesk_core::parser::ParseWarning;

/// A loaded gradebook and where it came from.
pub struct Loaded {
    pub book: Gradebook,
    pub source: PathBuf,
    pub warnings: Vec<ParseWarning>,
}

/// Resolve the marks file from the flag or config and load it.
///
/// An empty result is reported on stderr but is not an error.
pub fn open_gradebook(config_path: Option<&Path>, file: Option<PathBuf>) -> Result<Loaded> {
    let source = match file {
        Some(file) => file,
        None => load_config_from(config_path)?.students_file,
    };
    tracing::debug!("reading student marks from {}", source.display());

    let (book, warnings) = Gradebook::load(&source);
    if book.is_empty() {
        eprintln!(
            "Could not load data from {}. File may be missing or empty.",
            source.display()
        );
    } else {
        tracing::info!("Loaded {} student records successfully.", book.len());
    }

    Ok(Loaded {
        book,
        source,
        warnings,
    })
}

/// Read one line, without its terminator. `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
}
