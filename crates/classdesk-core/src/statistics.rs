//! Summary statistics over a student collection.

use serde::Serialize;

use crate::model::Student;

/// Class-level summary shown beneath a full listing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// Number of records.
    pub count: usize,
    /// Mean of every record's percentage, or `0.0` for an empty collection.
    pub average_percentage: f64,
}

/// Summarize a collection.
pub fn summarize(students: &[Student]) -> Summary {
    let count = students.len();
    let average_percentage = if count == 0 {
        0.0
    } else {
        students.iter().map(Student::percentage).sum::<f64>() / count as f64
    };

    Summary {
        count,
        average_percentage,
    }
}
