//! The `classdesk validate` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::open_gradebook;

pub fn execute(config_path: Option<&Path>, file: Option<PathBuf>) -> Result<()> {
    let loaded = open_gradebook(config_path, file)?;

    println!(
        "Student file: {} ({} records)",
        loaded.source.display(),
        loaded.book.len()
    );

    for w in &loaded.warnings {
        println!("  WARNING: {w}");
    }

    if loaded.warnings.is_empty() {
        println!("All records valid.");
    } else {
        println!("\n{} warning(s) found.", loaded.warnings.len());
    }

    Ok(())
}
