//! Joke loading and the two-step joke teller.

use std::io::Read;
use std::path::Path;

use crate::dice::Dice;
use crate::error::{LoadError, QuizError};

/// Name of the CSV column holding the joke text.
pub const JOKE_COLUMN: &str = "Joke";

/// A joke split into its question and answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    /// Text before the first `?`, without the question mark.
    pub setup: String,
    pub punchline: String,
}

impl Joke {
    /// Split on the first `?`. Returns `None` for text without one.
    pub fn split(text: &str) -> Option<Self> {
        let (setup, punchline) = text.split_once('?')?;
        Some(Self {
            setup: setup.trim().to_string(),
            punchline: punchline.trim().replace('\n', " "),
        })
    }
}

/// Read jokes from CSV with a header row containing a `Joke` column.
///
/// Rows whose joke has no `?` are dropped.
pub fn parse_jokes<R: Read>(reader: R) -> Result<Vec<Joke>, LoadError> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let column = rdr
        .headers()?
        .iter()
        .position(|h| h.trim() == JOKE_COLUMN)
        .ok_or_else(|| LoadError::MissingColumn(JOKE_COLUMN.to_string()))?;

    let mut jokes = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(joke) = record.get(column).and_then(Joke::split) {
            jokes.push(joke);
        }
    }
    Ok(jokes)
}

/// Load jokes from a file. Any failure degrades to an empty list.
pub fn load_jokes(path: &Path) -> Vec<Joke> {
    let result = std::fs::File::open(path)
        .map_err(|source| LoadError::Unreadable {
            path: path.to_path_buf(),
            source,
        })
        .and_then(parse_jokes);

    match result {
        Ok(jokes) => {
            tracing::info!("loaded {} joke(s) from {}", jokes.len(), path.display());
            jokes
        }
        Err(e) => {
            tracing::warn!("no jokes loaded from {}: {e}", path.display());
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TellerState {
    Ready,
    AwaitingPunchline(usize),
}

/// Tells a setup, then reveals its punchline on the next step.
#[derive(Debug, Clone)]
pub struct JokeTeller {
    jokes: Vec<Joke>,
    state: TellerState,
}

impl JokeTeller {
    pub fn new(jokes: Vec<Joke>) -> Self {
        Self {
            jokes,
            state: TellerState::Ready,
        }
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    /// Whether a setup has been told and its punchline not yet revealed.
    pub fn awaiting_punchline(&self) -> bool {
        matches!(self.state, TellerState::AwaitingPunchline(_))
    }

    /// Pick a random joke and return it for its setup.
    ///
    /// Returns `Ok(None)` when no jokes are loaded.
    pub fn tell(&mut self, dice: &mut dyn Dice) -> Result<Option<&Joke>, QuizError> {
        if self.jokes.is_empty() {
            return Ok(None);
        }
        let index = dice.pick(self.jokes.len())?;
        self.state = TellerState::AwaitingPunchline(index);
        Ok(self.jokes.get(index))
    }

    /// Reveal the pending punchline and go back to ready.
    ///
    /// Does nothing and returns `None` unless a setup is pending.
    pub fn reveal(&mut self) -> Option<&str> {
        let TellerState::AwaitingPunchline(index) = self.state else {
            return None;
        };
        self.state = TellerState::Ready;
        self.jokes.get(index).map(|j| j.punchline.as_str())
    }
}
