//! Arithmetic quiz state machine.
//!
//! [`submit_answer`] is the pure transition function. [`QuizSession`] wraps
//! it with a [`Dice`] so that a fresh [`Problem`] is drawn whenever a new
//! question starts.

use std::fmt;

use serde::Serialize;

use crate::dice::Dice;
use crate::error::QuizError;

/// Default number of questions per quiz.
pub const DEFAULT_QUESTIONS: u32 = 10;
/// Points for a correct first attempt.
pub const FIRST_TRY_POINTS: u32 = 10;
/// Points for a correct second attempt.
pub const SECOND_TRY_POINTS: u32 = 5;

/// Operand size for the quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    /// Single-digit operands.
    Easy,
    /// Two-digit operands.
    Moderate,
    /// Four-digit operands.
    Advanced,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Result<Self, QuizError> {
        match level {
            1 => Ok(Difficulty::Easy),
            2 => Ok(Difficulty::Moderate),
            3 => Ok(Difficulty::Advanced),
            other => Err(QuizError::UnknownDifficulty(other)),
        }
    }

    /// Inclusive operand range.
    pub fn operand_range(self) -> (i64, i64) {
        match self {
            Difficulty::Easy => (1, 9),
            Difficulty::Moderate => (10, 99),
            Difficulty::Advanced => (1000, 9999),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "Easy (Single Digit)"),
            Difficulty::Moderate => write!(f, "Moderate (Double Digit)"),
            Difficulty::Advanced => write!(f, "Advanced (4-Digit)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
}

/// One arithmetic question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Problem {
    pub left: i64,
    pub right: i64,
    pub op: Operation,
}

impl Problem {
    /// Draw operands for `difficulty`, then an operation.
    pub fn random(difficulty: Difficulty, dice: &mut dyn Dice) -> Result<Self, QuizError> {
        let (low, high) = difficulty.operand_range();
        let left = dice.roll(low, high)?;
        let right = dice.roll(low, high)?;
        let op = if dice.roll(0, 1)? == 0 {
            Operation::Add
        } else {
            Operation::Subtract
        };
        Ok(Self { left, right, op })
    }

    pub fn answer(&self) -> i64 {
        match self.op {
            Operation::Add => self.left + self.right,
            Operation::Subtract => self.left - self.right,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op {
            Operation::Add => '+',
            Operation::Subtract => '-',
        };
        write!(f, "{} {op} {} = ?", self.left, self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    First,
    Second,
}

/// Where a quiz stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizState {
    AwaitingAnswer {
        /// 1-based question number.
        question: u32,
        attempt: Attempt,
        score: u32,
    },
    Finished {
        score: u32,
    },
}

impl QuizState {
    pub fn start() -> Self {
        QuizState::AwaitingAnswer {
            question: 1,
            attempt: Attempt::First,
            score: 0,
        }
    }

    pub fn score(&self) -> u32 {
        match *self {
            QuizState::AwaitingAnswer { score, .. } | QuizState::Finished { score } => score,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, QuizState::Finished { .. })
    }
}

/// What happened on a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Input was not an integer; nothing changed.
    InvalidInput,
    Correct { points: u32 },
    /// Wrong on the first attempt; one more try.
    TryAgain,
    /// Wrong on the second attempt; the question is over.
    Revealed { answer: i64 },
    /// The quiz had already finished.
    QuizOver,
}

impl Outcome {
    /// Whether this submission closed the current question.
    pub fn resolves_question(&self) -> bool {
        matches!(self, Outcome::Correct { .. } | Outcome::Revealed { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InvalidInput => write!(f, "Please enter a valid number."),
            Outcome::Correct { points } if *points == FIRST_TRY_POINTS => {
                write!(f, "Correct! (+{points} points)")
            }
            Outcome::Correct { points } => write!(f, "Correct on second try! (+{points} points)"),
            Outcome::TryAgain => write!(f, "Incorrect. Try again."),
            Outcome::Revealed { answer } => write!(f, "Incorrect. The answer was {answer}."),
            Outcome::QuizOver => write!(f, "The quiz is over."),
        }
    }
}

/// Apply one answer to the quiz.
pub fn submit_answer(
    state: QuizState,
    problem: &Problem,
    input: &str,
    max_questions: u32,
) -> (QuizState, Outcome) {
    let QuizState::AwaitingAnswer {
        question,
        attempt,
        score,
    } = state
    else {
        return (state, Outcome::QuizOver);
    };

    let Ok(answer) = input.trim().parse::<i64>() else {
        return (state, Outcome::InvalidInput);
    };

    let (score, outcome) = if answer == problem.answer() {
        let points = match attempt {
            Attempt::First => FIRST_TRY_POINTS,
            Attempt::Second => SECOND_TRY_POINTS,
        };
        (score + points, Outcome::Correct { points })
    } else if attempt == Attempt::First {
        let next = QuizState::AwaitingAnswer {
            question,
            attempt: Attempt::Second,
            score,
        };
        return (next, Outcome::TryAgain);
    } else {
        (
            score,
            Outcome::Revealed {
                answer: problem.answer(),
            },
        )
    };

    let next = if question >= max_questions {
        QuizState::Finished { score }
    } else {
        QuizState::AwaitingAnswer {
            question: question + 1,
            attempt: Attempt::First,
            score,
        }
    };
    (next, outcome)
}

/// Final result of a finished quiz.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuizResult {
    pub score: u32,
    pub max_score: u32,
    pub percentage: f64,
    pub rank: &'static str,
}

impl QuizResult {
    pub fn new(score: u32, max_questions: u32) -> Self {
        let max_score = max_questions * FIRST_TRY_POINTS;
        let percentage = if max_score == 0 {
            0.0
        } else {
            (score as f64 / max_score as f64) * 100.0
        };
        Self {
            score,
            max_score,
            percentage,
            rank: rank_for(percentage),
        }
    }
}

/// Rank bands are exclusive at the lower edge.
pub fn rank_for(percentage: f64) -> &'static str {
    if percentage > 90.0 {
        "A+"
    } else if percentage > 75.0 {
        "A"
    } else if percentage > 60.0 {
        "B"
    } else if percentage > 40.0 {
        "C"
    } else {
        "D"
    }
}

/// A quiz in progress, owning its state, current problem and dice.
pub struct QuizSession<D: Dice> {
    difficulty: Difficulty,
    max_questions: u32,
    state: QuizState,
    problem: Problem,
    dice: D,
}

impl<D: Dice> QuizSession<D> {
    pub fn start(difficulty: Difficulty, max_questions: u32, mut dice: D) -> Result<Self, QuizError> {
        let problem = Problem::random(difficulty, &mut dice)?;
        tracing::debug!("quiz started at {difficulty:?} with {max_questions} questions");
        Ok(Self {
            difficulty,
            max_questions: max_questions.max(1),
            state: QuizState::start(),
            problem,
            dice,
        })
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// The problem currently being asked.
    pub fn problem(&self) -> &Problem {
        &self.problem
    }

    pub fn max_questions(&self) -> u32 {
        self.max_questions
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Submit raw user input. Draws the next problem when a new question begins.
    pub fn submit(&mut self, input: &str) -> Result<Outcome, QuizError> {
        let (next, outcome) = submit_answer(self.state, &self.problem, input, self.max_questions);
        self.state = next;

        if outcome.resolves_question() && !next.is_finished() {
            self.problem = Problem::random(self.difficulty, &mut self.dice)?;
        }
        Ok(outcome)
    }

    /// The final result, once the quiz is finished.
    pub fn result(&self) -> Option<QuizResult> {
        match self.state {
            QuizState::Finished { score } => Some(QuizResult::new(score, self.max_questions)),
            QuizState::AwaitingAnswer { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    fn add(left: i64, right: i64) -> Problem {
        Problem {
            left,
            right,
            op: Operation::Add,
        }
    }

    #[test]
    fn difficulty_levels() {
        assert_eq!(Difficulty::from_level(1).unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::Moderate.operand_range(), (10, 99));
        assert_eq!(Difficulty::from_level(3).unwrap().operand_range(), (1000, 9999));
        assert!(matches!(
            Difficulty::from_level(4),
            Err(QuizError::UnknownDifficulty(4))
        ));
    }

    #[test]
    fn problem_display_and_answer() {
        let p = Problem {
            left: 7,
            right: 9,
            op: Operation::Subtract,
        };
        assert_eq!(p.to_string(), "7 - 9 = ?");
        assert_eq!(p.answer(), -2);
    }

    #[test]
    fn correct_first_try() {
        let (state, outcome) = submit_answer(QuizState::start(), &add(2, 3), "5", 10);
        assert_eq!(outcome, Outcome::Correct { points: 10 });
        assert_eq!(
            state,
            QuizState::AwaitingAnswer {
                question: 2,
                attempt: Attempt::First,
                score: 10
            }
        );
    }

    #[test]
    fn wrong_then_correct() {
        let p = add(2, 3);
        let (state, outcome) = submit_answer(QuizState::start(), &p, "4", 10);
        assert_eq!(outcome, Outcome::TryAgain);
        let (state, outcome) = submit_answer(state, &p, " 5 ", 10);
        assert_eq!(outcome, Outcome::Correct { points: 5 });
        assert_eq!(state.score(), 5);
    }

    #[test]
    fn wrong_twice_reveals_answer() {
        let p = add(2, 3);
        let (state, _) = submit_answer(QuizState::start(), &p, "1", 10);
        let (state, outcome) = submit_answer(state, &p, "2", 10);
        assert_eq!(outcome, Outcome::Revealed { answer: 5 });
        assert_eq!(
            state,
            QuizState::AwaitingAnswer {
                question: 2,
                attempt: Attempt::First,
                score: 0
            }
        );
    }

    #[test]
    fn invalid_input_keeps_state() {
        let p = add(2, 3);
        let (state, _) = submit_answer(QuizState::start(), &p, "1", 10);
        let (after, outcome) = submit_answer(state, &p, "five", 10);
        assert_eq!(outcome, Outcome::InvalidInput);
        assert_eq!(after, state);
    }

    #[test]
    fn last_question_finishes() {
        let state = QuizState::AwaitingAnswer {
            question: 10,
            attempt: Attempt::First,
            score: 40,
        };
        let (state, _) = submit_answer(state, &add(1, 1), "2", 10);
        assert_eq!(state, QuizState::Finished { score: 50 });
        let (state, outcome) = submit_answer(state, &add(1, 1), "2", 10);
        assert_eq!(outcome, Outcome::QuizOver);
        assert_eq!(state.score(), 50);
    }

    #[test]
    fn feedback_messages() {
        assert_eq!(
            Outcome::Correct { points: 10 }.to_string(),
            "Correct! (+10 points)"
        );
        assert_eq!(
            Outcome::Correct { points: 5 }.to_string(),
            "Correct on second try! (+5 points)"
        );
        assert_eq!(
            Outcome::Revealed { answer: -3 }.to_string(),
            "Incorrect. The answer was -3."
        );
        assert_eq!(Outcome::InvalidInput.to_string(), "Please enter a valid number.");
    }

    #[test]
    fn rank_bands() {
        assert_eq!(rank_for(100.0), "A+");
        assert_eq!(rank_for(90.0), "A");
        assert_eq!(rank_for(75.0), "B");
        assert_eq!(rank_for(60.0), "C");
        assert_eq!(rank_for(40.0), "D");
        let result = QuizResult::new(85, 10);
        assert_eq!(result.max_score, 100);
        assert_eq!(result.rank, "A");
    }

    #[test]
    fn session_draws_new_problem_per_question() {
        // left, right, op for each of two questions
        let dice = ScriptedDice::new([3, 4, 0, 8, 2, 1]);
        let mut session = QuizSession::start(Difficulty::Easy, 2, dice).unwrap();
        assert_eq!(session.problem().to_string(), "3 + 4 = ?");

        assert_eq!(session.submit("7").unwrap(), Outcome::Correct { points: 10 });
        assert_eq!(session.problem().to_string(), "8 - 2 = ?");

        assert_eq!(session.submit("0").unwrap(), Outcome::TryAgain);
        assert_eq!(session.submit("6").unwrap(), Outcome::Correct { points: 5 });

        let result = session.result().unwrap();
        assert_eq!(result.score, 15);
        assert_eq!(result.max_score, 20);
        assert_eq!(result.rank, "B");
    }

    #[test]
    fn session_result_pending_until_finished() {
        let dice = ScriptedDice::new([1, 1, 0]);
        let session = QuizSession::start(Difficulty::Easy, 3, dice).unwrap();
        assert!(session.result().is_none());
        assert_eq!(session.max_questions(), 3);
    }
}
