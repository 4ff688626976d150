//! Formatting utilities for terminal output

use colored::Colorize;

use crate::core::{Feedback, LetterState, Word};

/// Render a guess with its feedback as a colored row
#[must_use]
pub fn colored_guess(word: &Word, feedback: &Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.states())
        .map(|(letter, state)| colored_letter(letter, *state))
        .collect()
}

/// Render a single letter in its state's color
#[must_use]
pub fn colored_letter(letter: char, state: LetterState) -> String {
    let cell = letter.to_string();
    match state {
        LetterState::CorrectPosition => cell.black().on_green().to_string(),
        LetterState::IncorrectPosition => cell.black().on_yellow().to_string(),
        LetterState::NotPresent => cell.white().on_black().to_string(),
        LetterState::NotGuessedYet => cell.dimmed().to_string(),
    }
}

/// Format feedback as the shareable emoji row
#[must_use]
pub fn feedback_to_emoji(feedback: &Feedback) -> String {
    feedback
        .states()
        .iter()
        .map(|state| match state {
            LetterState::CorrectPosition => '🟩',
            LetterState::IncorrectPosition => '🟨',
            _ => '⬛',
        })
        .collect()
}
