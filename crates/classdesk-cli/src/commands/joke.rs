//! The `classdesk joke` command.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Result;

use classdesk_core::config::load_config_from;
use classdesk_core::dice::{Dice, OsDice};
use classdesk_core::jokes::{load_jokes, JokeTeller};

use super::read_line;

pub fn execute(config_path: Option<&Path>, jokes_file: Option<PathBuf>) -> Result<()> {
    let path = match jokes_file {
        Some(path) => path,
        None => load_config_from(config_path)?.jokes_file,
    };

    let mut teller = JokeTeller::new(load_jokes(&path));
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();

    tell_jokes(&mut teller, &mut OsDice, &mut input, &mut out)
}

/// Alternate setups and punchlines until the user quits or input ends.
pub(crate) fn tell_jokes<R: BufRead, W: Write>(
    teller: &mut JokeTeller,
    dice: &mut dyn Dice,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        let Some(joke) = teller.tell(dice)? else {
            writeln!(out, "No jokes loaded.")?;
            return Ok(());
        };
        writeln!(out, "Setup: {}?", joke.setup)?;

        if !wait_for_enter(input, out, "Enter for the punchline, q to quit")? {
            return Ok(());
        }
        if let Some(punchline) = teller.reveal() {
            writeln!(out, "Punchline: {punchline}\n")?;
        }

        if !wait_for_enter(input, out, "Enter for another joke, q to quit")? {
            return Ok(());
        }
    }
}

/// Returns `false` when the user asks to quit or input ends.
fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<bool> {
    write!(out, "({prompt}) ")?;
    out.flush()?;
    Ok(match read_line(input)? {
        Some(line) => !line.trim().eq_ignore_ascii_case("q"),
        None => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use classdesk_core::dice::ScriptedDice;
    use classdesk_core::jokes::Joke;

    fn teller() -> JokeTeller {
        JokeTeller::new(vec![
            Joke::split("Why did the chicken cross the road? To get to the other side.").unwrap(),
            Joke::split("What do you call a fake noodle? An impasta.").unwrap(),
        ])
    }

    #[test]
    fn setup_then_punchline_then_quit() {
        let mut input = "\nq\n".as_bytes();
        let mut out = Vec::new();
        tell_jokes(&mut teller(), &mut ScriptedDice::new([1]), &mut input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Setup: What do you call a fake noodle?"));
        assert!(out.contains("Punchline: An impasta."));
        assert!(!out.contains("chicken"));
    }

    #[test]
    fn quit_before_punchline() {
        let mut input = "q\n".as_bytes();
        let mut out = Vec::new();
        tell_jokes(&mut teller(), &mut ScriptedDice::new([0]), &mut input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Setup: Why did the chicken cross the road?"));
        assert!(!out.contains("Punchline"));
    }

    #[test]
    fn two_jokes_in_a_row() {
        let mut input = "\n\n\n".as_bytes();
        let mut out = Vec::new();
        tell_jokes(&mut teller(), &mut ScriptedDice::new([0, 1]), &mut input, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Punchline: To get to the other side."));
        assert!(out.contains("Setup: What do you call a fake noodle?"));
    }

    #[test]
    fn no_jokes_loaded() {
        let mut input = "".as_bytes();
        let mut out = Vec::new();
        let mut teller = JokeTeller::new(Vec::new());
        tell_jokes(&mut teller, &mut ScriptedDice::default(), &mut input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No jokes loaded.\n");
    }
}
