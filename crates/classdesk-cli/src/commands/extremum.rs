//! The `classdesk highest` and `classdesk lowest` commands.

use std::path::{Path, PathBuf};

use anyhow::Result;

use classdesk_core::engine::Extreme;
use classdesk_report::text::{heading, render_record};

use super::open_gradebook;

pub fn execute(config_path: Option<&Path>, file: Option<PathBuf>, which: Extreme) -> Result<()> {
    let loaded = open_gradebook(config_path, file)?;

    let title = match which {
        Extreme::Highest => "Student with Highest Total Score",
        Extreme::Lowest => "Student with Lowest Total Score",
    };

    match loaded.book.extremum(which) {
        Some(student) => print!("{}", render_record(title, student)),
        None => println!("{}No student data loaded.", heading("No Data")),
    }

    Ok(())
}
