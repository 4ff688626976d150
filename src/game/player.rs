//! The player contract consumed by the game loop
//!
//! Every player — the interactive CLI and the robot alike — implements this
//! trait. The game loop only ever talks to a player through it.

use std::io;

use crate::core::{Feedback, Word};

/// A participant in a game: supplies guesses, receives results
///
/// `handle_win`, `handle_loss` and `assume_guesses_valid` are optional
/// capabilities with default implementations; the required methods are the
/// minimum the game loop needs to run a session.
pub trait Player {
    /// Reset per-session state before the first round.
    fn start(&mut self);

    /// Supply the next raw guess for the given round (1-based).
    ///
    /// The returned string is unvalidated; the game loop normalizes and
    /// checks it (unless [`Player::assume_guesses_valid`] is set).
    ///
    /// # Errors
    /// Interactive players return an error when input is no longer available
    /// (for example on end-of-file); the game loop passes it through.
    fn guess(&mut self, round: u32) -> io::Result<String>;

    /// Receive a non-fatal complaint about a rejected guess.
    fn warn(&mut self, message: &str);

    /// Receive the result of a validated guess.
    ///
    /// `hint` carries the number of possible words remaining, or `None` when
    /// hints are disabled.
    fn handle_response(&mut self, guess: &Word, feedback: &Feedback, hint: Option<usize>);

    /// The game was won in `round`.
    fn handle_win(&mut self, _round: u32) {}

    /// The game was lost; `solution` is revealed.
    fn handle_loss(&mut self, _solution: &Word) {}

    /// Whether the game loop may skip dictionary validation of this player's
    /// guesses. The robot sets this: it only ever proposes dictionary words.
    fn assume_guesses_valid(&self) -> bool {
        false
    }
}
