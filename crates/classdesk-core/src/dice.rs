//! Random number sources for the quiz and the joke teller.

use std::collections::VecDeque;

use crate::error::QuizError;

/// Source of integers drawn from inclusive ranges.
pub trait Dice {
    /// Draw an integer in `low..=high`.
    fn roll(&mut self, low: i64, high: i64) -> Result<i64, QuizError>;

    /// Draw an index into a slice of length `len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> Result<usize, QuizError> {
        let high = len as i64 - 1;
        self.roll(0, high).map(|i| i as usize)
    }
}

/// Dice backed by the operating system's entropy source.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsDice;

impl Dice for OsDice {
    fn roll(&mut self, low: i64, high: i64) -> Result<i64, QuizError> {
        if high < low {
            return Err(QuizError::InvalidRange { low, high });
        }
        let span = high.abs_diff(low).wrapping_add(1);
        if span == 0 {
            // Full i64 range.
            return Ok(next_u64()? as i64);
        }
        // Reject draws from the incomplete top bucket so every value is equally likely.
        let zone = u64::MAX - (u64::MAX - span + 1) % span;
        loop {
            let draw = next_u64()?;
            if draw <= zone {
                return Ok(low.wrapping_add((draw % span) as i64));
            }
        }
    }
}

fn next_u64() -> Result<u64, QuizError> {
    let mut buf = [0u8; 8];
    getrandom::fill(&mut buf).map_err(|e| QuizError::Entropy(e.to_string()))?;
    Ok(u64::from_le_bytes(buf))
}

/// Dice that replay a fixed sequence, clamped into the requested range.
///
/// Useful for deterministic sessions and tests.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    values: VecDeque<i64>,
}

impl ScriptedDice {
    pub fn new(values: impl IntoIterator<Item = i64>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

impl Dice for ScriptedDice {
    fn roll(&mut self, low: i64, high: i64) -> Result<i64, QuizError> {
        if high < low {
            return Err(QuizError::InvalidRange { low, high });
        }
        let value = self.values.pop_front().ok_or(QuizError::Exhausted)?;
        Ok(value.clamp(low, high))
    }
}
