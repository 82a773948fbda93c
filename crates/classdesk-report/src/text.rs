//! Plain-text rendering.
//!
//! [`describe`] is the canonical display of one record. Callers compare its
//! output verbatim, so field order and precision are fixed.

use classdesk_core::engine::Listing;
use classdesk_core::model::{Student, MAX_COURSEWORK, MAX_EXAM};
use classdesk_core::quiz::QuizResult;

/// Line printed between records in a full listing.
pub const SEPARATOR: &str = "---------------------------------------";

/// Render one student as six labelled lines.
pub fn describe(student: &Student) -> String {
    format!(
        "Name: {}\n\
         Code: {}\n\
         Total Coursework Mark: {} / {MAX_COURSEWORK}\n\
         Exam Mark: {} / {MAX_EXAM}\n\
         Overall Percentage: {:.2}%\n\
         Student Grade: {}\n",
        student.name(),
        student.code(),
        student.coursework_total(),
        student.exam_mark(),
        student.percentage(),
        student.grade(),
    )
}

/// Section header, followed by a blank line.
pub fn heading(title: &str) -> String {
    format!("--- {title} ---\n\n")
}

/// Every record with separators, then the class summary.
pub fn render_listing(listing: &Listing<'_>) -> String {
    let mut out = heading("All Student Records");
    for student in listing.students {
        out.push_str(&describe(student));
        out.push_str(SEPARATOR);
        out.push('\n');
    }
    out.push_str(&render_summary(listing));
    out
}

/// The summary block that closes a listing.
pub fn render_summary(listing: &Listing<'_>) -> String {
    format!(
        "\n--- Summary ---\n\
         Total Students in Class: {}\n\
         Average Percentage Mark: {:.2}%\n",
        listing.summary.count, listing.summary.average_percentage
    )
}

/// A single record under a heading.
pub fn render_record(title: &str, student: &Student) -> String {
    format!("{}{}", heading(title), describe(student))
}

/// Closing screen of a quiz.
pub fn render_quiz_result(result: &QuizResult) -> String {
    format!(
        "Quiz Complete!\n\
         Final Score: {} / {}\n\
         Percentage: {:.0}%\n\
         Your Rank: {}\n",
        result.score, result.max_score, result.percentage, result.rank
    )
}
