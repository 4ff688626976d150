//! Interactive command-line player
//!
//! Reads guesses from stdin and renders feedback rows plus an A–Z letter
//! tracker. The tracker merges states with `max`, so a letter's display only
//! ever upgrades: once green, a letter stays green no matter what later
//! guesses show.

use std::io::{self, BufRead, Write};

use colored::Colorize;

use crate::core::{Feedback, LetterState, Word};
use crate::game::{Player, ROUNDS};
use crate::output::formatters::{colored_guess, colored_letter, feedback_to_emoji};

const WIN_MESSAGES: [&str; ROUNDS as usize] = [
    "🤯 GENIUS",
    "🧠 MAGNIFICENT",
    "🔥 IMPRESSIVE",
    "🏆 SPLENDID",
    "🏅 GREAT",
    "👍 NICE",
];

/// A human player on a terminal
pub struct CliPlayer {
    letters: [LetterState; 26],
    history: Vec<Feedback>,
}

impl CliPlayer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            letters: [LetterState::NotGuessedYet; 26],
            history: Vec::new(),
        }
    }

    fn letter_tracker(&self) -> String {
        ('A'..='Z')
            .zip(self.letters)
            .map(|(letter, state)| colored_letter(letter, state))
            .collect()
    }

    /// The shareable summary: one emoji row per guess.
    fn share_grid(&self) -> String {
        self.history
            .iter()
            .map(feedback_to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CliPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for CliPlayer {
    fn start(&mut self) {
        self.letters = [LetterState::NotGuessedYet; 26];
        self.history.clear();

        println!("Let's play a game of Wordle");
        println!("{}", self.letter_tracker());
    }

    fn guess(&mut self, round: u32) -> io::Result<String> {
        print!("Guess {round}/{ROUNDS}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "end of input"));
        }
        Ok(line)
    }

    fn warn(&mut self, message: &str) {
        println!("{}", message.yellow());
    }

    fn handle_response(&mut self, guess: &Word, feedback: &Feedback, hint: Option<usize>) {
        for (letter, state) in guess.chars().iter().zip(feedback.states()) {
            let slot = &mut self.letters[(letter - b'A') as usize];
            *slot = (*slot).max(*state);
        }
        self.history.push(*feedback);

        println!("{}", colored_guess(guess, feedback));
        if let Some(remaining) = hint {
            println!("{}", format!("{remaining} possible words remain").dimmed());
        }
        println!("{}", self.letter_tracker());
    }

    fn handle_win(&mut self, round: u32) {
        let message = WIN_MESSAGES[round as usize - 1];
        println!(
            "{}",
            format!("{message}! Got it in {round}/{ROUNDS} rounds")
                .green()
                .bold()
        );
        println!("📣 Shareable summary:");
        println!("wordle-robot {round}/{ROUNDS}\n\n{}\n", self.share_grid());
    }

    fn handle_loss(&mut self, solution: &Word) {
        println!(
            "{}",
            format!("🤦 LOSE! The solution was {solution}").red().bold()
        );
    }
}
