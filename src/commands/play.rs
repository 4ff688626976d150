//! Interactive play command
//!
//! Resolves the session's solution (explicit word, day number, or random),
//! then runs games with a [`CliPlayer`] until the user stops.

use std::io::{self, BufRead, ErrorKind, Write};

use anyhow::{Result, bail};
use colored::Colorize;
use rand::seq::IndexedRandom;

use crate::cli::CliPlayer;
use crate::core::Word;
use crate::game::{Game, PlayOptions, Player};
use crate::wordlists::Dictionary;

/// How the solution for a play session is chosen
#[derive(Debug, Clone, Default)]
pub enum SolutionPick {
    /// A random word from the solution list.
    #[default]
    Random,
    /// The solution for a given day number, wrapping around the list.
    Day(usize),
    /// A specific word, which must be in the solution list.
    Given(String),
}

/// Run interactive games until the player declines another round
///
/// # Errors
/// Fails if the solution cannot be resolved (unknown word, empty list) or on
/// an unexpected I/O error; end-of-file on stdin is a normal quit.
pub fn run_play(game: &Game, pick: &SolutionPick, hints: bool) -> Result<()> {
    let mut player = CliPlayer::new();
    let solution = resolve_solution(game.dictionary(), pick)?.clone();

    if let SolutionPick::Given(_) = pick {
        player.warn(&format!("Solution will be {solution}"));
    }

    let options = PlayOptions { hints };
    loop {
        match game.play(&mut player, &solution, options) {
            Ok(_) => {}
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => {
                println!("{}", "QUIT!".red());
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        }

        if !ask_again()? {
            return Ok(());
        }
        println!();
    }
}

fn resolve_solution<'a>(dictionary: &'a Dictionary, pick: &SolutionPick) -> Result<&'a Word> {
    match pick {
        SolutionPick::Random => match dictionary.solutions().choose(&mut rand::rng()) {
            Some(word) => Ok(word),
            None => bail!("solution list is empty"),
        },
        SolutionPick::Day(day) => match dictionary.solution_for_day(*day) {
            Some(word) => Ok(word),
            None => bail!("solution list is empty"),
        },
        SolutionPick::Given(text) => {
            let word =
                Word::new(text).map_err(|err| anyhow::anyhow!("invalid solution: {err}"))?;
            match dictionary.solutions().iter().find(|known| **known == word) {
                Some(word) => Ok(word),
                None => bail!("{word} is not in the solution list"),
            }
        }
    }
}

fn ask_again() -> io::Result<bool> {
    print!(
        "Play again {} or exit {}? ",
        "[Enter]".dimmed(),
        "[Ctrl-D]".dimmed()
    );
    io::stdout().flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    Ok(read != 0)
}
