//! In-memory query engine over a loaded student collection.
//!
//! A [`Gradebook`] takes ownership of its records at construction and never
//! changes them afterwards; loading a different file means building a new
//! one. Every query returns plain data, with misses expressed as `None`.

use std::path::Path;

use crate::model::Student;
use crate::parser::{self, ParseWarning};
use crate::statistics::{summarize, Summary};

/// Which end of the score range an extremum query looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    Highest,
    Lowest,
}

/// Every record in file order, with the class summary.
#[derive(Debug, Clone, Copy)]
pub struct Listing<'a> {
    pub students: &'a [Student],
    pub summary: Summary,
}

/// The student collection and the queries over it.
#[derive(Debug, Clone, Default)]
pub struct Gradebook {
    students: Vec<Student>,
}

impl Gradebook {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    /// Load a marks file, returning the engine and any parse warnings.
    pub fn load(path: &Path) -> (Self, Vec<ParseWarning>) {
        let outcome = parser::load_file(path);
        tracing::debug!(
            "loaded {} student record(s) from {}",
            outcome.students.len(),
            path.display()
        );
        (Self::new(outcome.students), outcome.warnings)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// All records in file order, plus count and average percentage.
    pub fn list_all(&self) -> Listing<'_> {
        Listing {
            students: &self.students,
            summary: summarize(&self.students),
        }
    }

    /// Look a student up by code or by name.
    ///
    /// A query that parses as an integer is matched against codes only, even
    /// if some name is made of digits. Anything else is a case-insensitive
    /// substring match on names. The first match in file order wins.
    pub fn find_by_code_or_name(&self, query: &str) -> Option<&Student> {
        match parser::try_parse_int(query) {
            Some(code) => self.students.iter().find(|s| s.code() == code),
            None => {
                let needle = query.to_lowercase();
                self.students
                    .iter()
                    .find(|s| s.name().to_lowercase().contains(&needle))
            }
        }
    }

    /// The record with the highest or lowest aggregate score.
    ///
    /// Ties go to the record that appears first.
    pub fn extremum(&self, which: Extreme) -> Option<&Student> {
        let mut iter = self.students.iter();
        let first = iter.next()?;
        Some(iter.fold(first, |best, s| {
            let better = match which {
                Extreme::Highest => s.aggregate_score() > best.aggregate_score(),
                Extreme::Lowest => s.aggregate_score() < best.aggregate_score(),
            };
            if better {
                s
            } else {
                best
            }
        }))
    }

    pub fn highest(&self) -> Option<&Student> {
        self.extremum(Extreme::Highest)
    }

    pub fn lowest(&self) -> Option<&Student> {
        self.extremum(Extreme::Lowest)
    }
}
