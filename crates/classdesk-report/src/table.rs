//! Tabular rendering of a listing.

use comfy_table::{Cell, CellAlignment, Table};

use classdesk_core::engine::Listing;

/// Render every record as a table row, with the summary underneath.
pub fn render_table(listing: &Listing<'_>) -> String {
    let mut table = Table::new();
    table.set_header(vec![
        "Code",
        "Name",
        "Coursework",
        "Exam",
        "Total",
        "Percentage",
        "Grade",
    ]);

    for s in listing.students {
        table.add_row(vec![
            Cell::new(s.code()).set_alignment(CellAlignment::Right),
            Cell::new(s.name()),
            Cell::new(s.coursework_total()).set_alignment(CellAlignment::Right),
            Cell::new(s.exam_mark()).set_alignment(CellAlignment::Right),
            Cell::new(s.aggregate_score()).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}%", s.percentage())).set_alignment(CellAlignment::Right),
            Cell::new(s.grade()),
        ]);
    }

    format!(
        "{table}\nTotal Students in Class: {}\nAverage Percentage Mark: {:.2}%\n",
        listing.summary.count, listing.summary.average_percentage
    )
}
