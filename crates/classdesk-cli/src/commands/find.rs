//! The `classdesk find` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use classdesk_report::text::{heading, render_record};

use super::open_gradebook;

pub fn execute(config_path: Option<&Path>, file: Option<PathBuf>, query: String) -> Result<()> {
    let query = query.trim();
    anyhow::ensure!(!query.is_empty(), "Please enter a Student Code or Name.");

    let loaded = open_gradebook(config_path, file)?;

    match loaded.book.find_by_code_or_name(query) {
        Some(student) => print!("{}", render_record("Individual Student Record", student)),
        None => println!(
            "{}Error: Student '{query}' not found by code or name.",
            heading("Individual Student Record")
        ),
    }

    Ok(())
}
