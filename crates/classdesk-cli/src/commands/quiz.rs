//! The `classdesk quiz` command.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use classdesk_core::config::load_config_from;
use classdesk_core::dice::{Dice, OsDice};
use classdesk_core::quiz::{Difficulty, QuizSession, QuizState};
use classdesk_report::text::render_quiz_result;

use super::read_line;

pub fn execute(
    config_path: Option<&Path>,
    difficulty: Option<u8>,
    questions: Option<u32>,
) -> Result<()> {
    let config = load_config_from(config_path)?;
    let max_questions = questions.unwrap_or(config.quiz.max_questions);
    anyhow::ensure!(max_questions >= 1, "questions must be at least 1");
    if let Some(level) = difficulty {
        Difficulty::from_level(level)?;
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    play(
        &mut input,
        &mut out,
        difficulty,
        config.quiz.default_difficulty,
        max_questions,
        || OsDice,
    )
}

/// Run quizzes until the player declines another round or input ends.
pub(crate) fn play<R, W, D>(
    input: &mut R,
    out: &mut W,
    fixed_level: Option<u8>,
    default_level: u8,
    max_questions: u32,
    mut new_dice: impl FnMut() -> D,
) -> Result<()>
where
    R: BufRead,
    W: Write,
    D: Dice,
{
    loop {
        let level = match fixed_level {
            Some(level) => level,
            None => match choose_level(input, out, default_level)? {
                Some(level) => level,
                None => return Ok(()),
            },
        };
        let difficulty = Difficulty::from_level(level)?;

        let mut session = QuizSession::start(difficulty, max_questions, new_dice())?;
        if !ask_questions(&mut session, input, out)? {
            writeln!(out, "\nQuiz abandoned.")?;
            return Ok(());
        }

        if let Some(result) = session.result() {
            write!(out, "\n{}", render_quiz_result(&result))?;
        }

        writeln!(out, "\nPlay again? [y/N]")?;
        out.flush()?;
        let again = read_line(input)?
            .map(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false);
        if !again {
            return Ok(());
        }
    }
}

/// Difficulty menu. Blank input picks `default_level`; `None` at end of input.
fn choose_level<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    default_level: u8,
) -> Result<Option<u8>> {
    writeln!(out, "DIFFICULTY LEVEL")?;
    for level in 1..=3 {
        writeln!(out, "  {level}. {}", Difficulty::from_level(level)?)?;
    }

    loop {
        write!(out, "Choose a level [{default_level}]: ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(None);
        };
        let choice = line.trim();
        if choice.is_empty() {
            return Ok(Some(default_level));
        }
        match choice.parse::<u8>() {
            Ok(level) if Difficulty::from_level(level).is_ok() => return Ok(Some(level)),
            _ => writeln!(out, "Please choose 1, 2 or 3.")?,
        }
    }
}

/// Ask every question in the session. Returns `false` if input ran out first.
fn ask_questions<R, W, D>(session: &mut QuizSession<D>, input: &mut R, out: &mut W) -> Result<bool>
where
    R: BufRead,
    W: Write,
    D: Dice,
{
    let mut show_problem = true;

    while !session.state().is_finished() {
        if show_problem {
            if let QuizState::AwaitingAnswer {
                question, score, ..
            } = session.state()
            {
                writeln!(
                    out,
                    "\nQuestion {question}/{}    Score: {score}",
                    session.max_questions()
                )?;
            }
            writeln!(out, "{}", session.problem())?;
        }

        write!(out, "> ")?;
        out.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };

        let outcome = session.submit(&line)?;
        writeln!(out, "{outcome}")?;
        show_problem = outcome.resolves_question();
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classdesk_core::dice::ScriptedDice;

    fn run(input: &str, fixed: Option<u8>, questions: u32, dice: Vec<i64>) -> String {
        let mut input = input.as_bytes();
        let mut out = Vec::new();
        play(&mut input, &mut out, fixed, 1, questions, || {
            ScriptedDice::new(dice.clone())
        })
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn perfect_single_question_quiz() {
        let out = run("7\nn\n", Some(1), 1, vec![3, 4, 0]);
        assert!(out.contains("Question 1/1"));
        assert!(out.contains("3 + 4 = ?"));
        assert!(out.contains("Correct! (+10 points)"));
        assert!(out.contains("Final Score: 10 / 10"));
        assert!(out.contains("Your Rank: A+"));
    }

    #[test]
    fn invalid_then_wrong_twice() {
        let out = run("abc\n1\n2\n", Some(1), 1, vec![9, 2, 1]);
        assert!(out.contains("Please enter a valid number."));
        assert!(out.contains("Incorrect. Try again."));
        assert!(out.contains("Incorrect. The answer was 7."));
        assert!(out.contains("Final Score: 0 / 10"));
        assert!(out.contains("Your Rank: D"));
    }

    #[test]
    fn menu_default_and_replay() {
        // Blank picks level 1; second round picks level 2 explicitly.
        let out = run("\n2\ny\n9\n2\n20\nn\n", None, 1, vec![1, 1, 0]);
        assert_eq!(out.matches("DIFFICULTY LEVEL").count(), 2);
        assert!(out.contains("1 + 1 = ?"));
        assert!(out.contains("Please choose 1, 2 or 3."));
        assert!(out.contains("10 + 10 = ?"));
        assert_eq!(out.matches("Quiz Complete!").count(), 2);
    }

    #[test]
    fn end_of_input_abandons() {
        let out = run("", Some(2), 3, vec![10, 20, 0]);
        assert!(out.contains("Quiz abandoned."));
        assert!(!out.contains("Quiz Complete!"));
    }
}
