//! Word lists for playing and solving
//!
//! Two lists with different jobs: the solutions (the small official answer
//! list) and the guesses (the large accepted-input list). The official guess
//! list does not include the solutions, so they are unioned after load — a
//! solution must always be guessable.

pub mod loader;

use std::io;
use std::path::Path;

use rustc_hash::FxHashSet;

use crate::core::Word;

/// The immutable word lists a game runs over
pub struct Dictionary {
    solutions: Vec<Word>,
    guesses: Vec<Word>,
    guess_set: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from already-loaded lists
    ///
    /// `guesses` is extended with any solutions it is missing, preserving
    /// list order and dropping duplicates, so the union is deterministic.
    #[must_use]
    pub fn new(solutions: Vec<Word>, guesses: Vec<Word>) -> Self {
        let mut guess_set: FxHashSet<String> = FxHashSet::default();
        let mut all_guesses: Vec<Word> = Vec::with_capacity(guesses.len() + solutions.len());

        for word in guesses.into_iter().chain(solutions.iter().cloned()) {
            if guess_set.insert(word.text().to_string()) {
                all_guesses.push(word);
            }
        }

        Self {
            solutions,
            guesses: all_guesses,
            guess_set,
        }
    }

    /// Load both lists from disk
    ///
    /// # Errors
    /// Returns an I/O error if either file cannot be read.
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(solutions: P, guesses: Q) -> io::Result<Self> {
        let solutions = loader::load_words(solutions)?;
        let guesses = loader::load_words(guesses)?;
        Ok(Self::new(solutions, guesses))
    }

    /// The official answer list
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Every accepted guess, solutions included
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Whether a word is an accepted guess
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word) -> bool {
        self.guess_set.contains(word.text())
    }

    /// The solution for a given day number, wrapping around the list
    #[must_use]
    pub fn solution_for_day(&self, day: usize) -> Option<&Word> {
        if self.solutions.is_empty() {
            return None;
        }
        self.solutions.get(day % self.solutions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn guesses_are_unioned_with_solutions() {
        let dictionary = Dictionary::new(
            vec![word("SLATE"), word("TRACE")],
            vec![word("CRANE"), word("SLATE")],
        );

        let texts: Vec<&str> = dictionary.guesses().iter().map(Word::text).collect();
        assert_eq!(texts, vec!["CRANE", "SLATE", "TRACE"]);
        assert_eq!(dictionary.solutions().len(), 2);
    }

    #[test]
    fn every_solution_is_a_valid_guess() {
        let dictionary = Dictionary::new(vec![word("SLATE")], vec![word("CRANE")]);

        assert!(dictionary.is_valid_guess(&word("SLATE")));
        assert!(dictionary.is_valid_guess(&word("CRANE")));
        assert!(!dictionary.is_valid_guess(&word("QWZRT")));
    }

    #[test]
    fn solution_for_day_wraps() {
        let dictionary = Dictionary::new(vec![word("SLATE"), word("TRACE")], vec![]);

        assert_eq!(dictionary.solution_for_day(0), Some(&word("SLATE")));
        assert_eq!(dictionary.solution_for_day(1), Some(&word("TRACE")));
        assert_eq!(dictionary.solution_for_day(2), Some(&word("SLATE")));
    }

    #[test]
    fn empty_dictionary_has_no_daily_solution() {
        let dictionary = Dictionary::new(vec![], vec![]);
        assert_eq!(dictionary.solution_for_day(0), None);
    }
}
