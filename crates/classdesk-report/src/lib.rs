//! classdesk-report: Presentation of student records and quiz results.
//!
//! Renders engine output as plain text, as a table, or as a JSON report.

pub mod json;
pub mod table;
pub mod text;
