//! Student record model.
//!
//! A [`Student`] is built once from raw marks and computes every derived
//! field up front. Fields are private and there is no `Deserialize` impl, so
//! the derived values can only come from [`Student::new`].

use serde::Serialize;
use std::fmt;

/// Maximum mark across the three coursework components.
pub const MAX_COURSEWORK: i64 = 60;
/// Maximum examination mark.
pub const MAX_EXAM: i64 = 100;
/// Denominator for the overall percentage.
pub const MAX_TOTAL: i64 = 160;

/// Letter grade derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a percentage onto a grade. Each band includes its lower bound.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= 70.0 {
            Grade::A
        } else if percentage >= 60.0 {
            Grade::B
        } else if percentage >= 50.0 {
            Grade::C
        } else if percentage >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Grade::A => 'A',
            Grade::B => 'B',
            Grade::C => 'C',
            Grade::D => 'D',
            Grade::F => 'F',
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// One student's marks plus the values derived from them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    code: i64,
    name: String,
    component_marks: [i64; 3],
    exam_mark: i64,
    coursework_total: i64,
    aggregate_score: i64,
    percentage: f64,
    grade: Grade,
}

/// Coursework plus exam, or `None` if the sum does not fit in an `i64`.
pub fn checked_aggregate(component_marks: [i64; 3], exam: i64) -> Option<i64> {
    component_marks
        .iter()
        .try_fold(exam, |total, &mark| total.checked_add(mark))
}

impl Student {
    /// Build a record from already-coerced marks. Never clamps out-of-range
    /// marks; the parser rejects rows whose [`checked_aggregate`] is `None`.
    pub fn new(code: i64, name: impl Into<String>, m1: i64, m2: i64, m3: i64, exam: i64) -> Self {
        let component_marks = [m1, m2, m3];
        let coursework_total: i64 = component_marks.iter().sum();
        let aggregate_score = coursework_total + exam;
        let percentage = (aggregate_score as f64 / MAX_TOTAL as f64) * 100.0;

        Self {
            code,
            name: name.into(),
            component_marks,
            exam_mark: exam,
            coursework_total,
            aggregate_score,
            percentage,
            grade: Grade::from_percentage(percentage),
        }
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The three coursework marks, in file order.
    pub fn component_marks(&self) -> [i64; 3] {
        self.component_marks
    }

    pub fn exam_mark(&self) -> i64 {
        self.exam_mark
    }

    /// Sum of the coursework components (out of [`MAX_COURSEWORK`]).
    pub fn coursework_total(&self) -> i64 {
        self.coursework_total
    }

    /// Coursework plus exam (out of [`MAX_TOTAL`]).
    pub fn aggregate_score(&self) -> i64 {
        self.aggregate_score
    }

    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}
