//! The `classdesk list` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use classdesk_report::json::ClassReport;
use classdesk_report::table::render_table;
use classdesk_report::text::render_listing;

use super::open_gradebook;

pub fn execute(
    config_path: Option<&Path>,
    file: Option<PathBuf>,
    format: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let loaded = open_gradebook(config_path, file)?;
    let listing = loaded.book.list_all();

    match format.as_str() {
        "text" => print!("{}", render_listing(&listing)),
        "table" => print!("{}", render_table(&listing)),
        "json" => {
            let report = ClassReport::new(&listing, loaded.source.display().to_string());
            match output {
                Some(path) => {
                    report.save_json(&path)?;
                    println!("Report written to {}", path.display());
                }
                None => println!("{}", report.to_json()?),
            }
        }
        other => anyhow::bail!("unknown format: {other} (expected text, table or json)"),
    }

    Ok(())
}
