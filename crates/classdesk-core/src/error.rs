//! Error types for loading data and running the quiz.
//!
//! None of these are fatal to a classdesk session: loaders degrade to empty
//! collections and the quiz surfaces bad input as an ordinary outcome.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading an input file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the input.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the header row.
    #[error("missing column `{0}`")]
    MissingColumn(String),
}

/// Errors raised by the quiz and the random source behind it.
#[derive(Debug, Error)]
pub enum QuizError {
    /// Difficulty levels are 1, 2 and 3.
    #[error("unknown difficulty level: {0} (expected 1, 2 or 3)")]
    UnknownDifficulty(u8),

    /// The operating system's entropy source failed.
    #[error("random source unavailable: {0}")]
    Entropy(String),

    /// A scripted source ran out of values.
    #[error("scripted dice exhausted")]
    Exhausted,

    /// Requested range is empty.
    #[error("invalid range {low}..={high}")]
    InvalidRange { low: i64, high: i64 },
}
