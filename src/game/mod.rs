//! Game loop
//!
//! `Game::play` runs one session: it requests guesses from a [`Player`],
//! validates them against the dictionary, computes feedback, and dispatches
//! results and the terminal win/loss notification back to the player.

mod player;

pub use player::Player;

use std::io;

use crate::core::{Feedback, WORD_LEN, Word, is_consistent};
use crate::wordlists::Dictionary;

/// Maximum number of rounds in a game.
pub const ROUNDS: u32 = 6;

/// Per-game options
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Report the number of possible words remaining after each guess.
    pub hints: bool,
}

/// A Wordle game over a fixed dictionary
pub struct Game {
    dictionary: Dictionary,
}

impl Game {
    #[must_use]
    pub const fn new(dictionary: Dictionary) -> Self {
        Self { dictionary }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Play one session against `solution`
    ///
    /// Returns `Some(round)` if the player won in that round, `None` if all
    /// rounds were used up. Invalid guesses are warned about and re-requested
    /// indefinitely; the retry loop ends only when the player supplies a
    /// valid guess (or its input fails).
    ///
    /// # Errors
    /// Propagates I/O errors from [`Player::guess`], so an interactive player
    /// can abort the session by closing its input.
    pub fn play(
        &self,
        player: &mut dyn Player,
        solution: &Word,
        options: PlayOptions,
    ) -> io::Result<Option<u32>> {
        player.start();

        // Hint pool lives for this session only; fresh every call.
        let mut possible_words: Vec<&Word> = if options.hints {
            self.dictionary.guesses().iter().collect()
        } else {
            Vec::new()
        };

        for round in 1..=ROUNDS {
            let guess = self.request_guess(player, round)?;

            let feedback = Feedback::evaluate(&guess, solution);

            let hint = if options.hints && !feedback.is_win() {
                possible_words.retain(|word| is_consistent(&guess, word, &feedback));
                Some(possible_words.len())
            } else {
                None
            };

            player.handle_response(&guess, &feedback, hint);

            if feedback.is_win() {
                player.handle_win(round);
                return Ok(Some(round));
            }
        }

        player.handle_loss(solution);
        Ok(None)
    }

    /// Ask the player for a guess until a valid one arrives.
    fn request_guess(&self, player: &mut dyn Player, round: u32) -> io::Result<Word> {
        loop {
            let raw = player.guess(round)?.trim().to_uppercase();

            match Word::new(&raw) {
                Ok(word) => {
                    if player.assume_guesses_valid() || self.dictionary.is_valid_guess(&word) {
                        return Ok(word);
                    }
                    player.warn(&format!("{word} not in dict"));
                }
                Err(_) => {
                    let shown: String = if raw.chars().count() > WORD_LEN {
                        raw.chars().take(WORD_LEN).chain("..".chars()).collect()
                    } else {
                        raw
                    };
                    player.warn(&format!("{shown} invalid"));
                }
            }
        }
    }
}
