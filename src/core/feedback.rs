//! Per-letter feedback calculation and consistency checking
//!
//! `Feedback::evaluate` computes the letter-by-letter result of a guess
//! against a solution; `is_consistent` answers whether a candidate solution
//! could have produced an already-observed feedback. Both share the same
//! remaining-letter pool logic, which is what makes repeated letters come out
//! right: a guess letter is only marked out-of-position while unmatched
//! copies of it remain in the solution.

use super::word::{WORD_LEN, Word};

/// The state of a single letter in a guess (or on the keyboard display)
///
/// Ordered by informativeness. The derived `Ord` is relied upon by the
/// keyboard display, which merges states with `max` so a letter's shown state
/// only ever upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterState {
    /// Letter has not appeared in any guess yet
    NotGuessedYet,
    /// Letter does not occur in the solution (or all copies are accounted for)
    NotPresent,
    /// Letter occurs in the solution, but not at this position
    IncorrectPosition,
    /// Letter is in the correct position
    CorrectPosition,
}

/// Feedback for a full guess: one `LetterState` per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LEN]);

const fn letter_index(letter: u8) -> usize {
    (letter - b'A') as usize
}

impl Feedback {
    /// The unique winning pattern: every letter in the correct position
    pub const WIN: Self = Self([LetterState::CorrectPosition; WORD_LEN]);

    /// Build a feedback from explicit per-position states
    #[must_use]
    pub const fn new(states: [LetterState; WORD_LEN]) -> Self {
        Self(states)
    }

    /// Compute the feedback for `guess` against `solution`
    ///
    /// Two passes. The first collects a pool of solution letters that are not
    /// matched by exact position. The second walks the guess left to right:
    /// an exact match is `CorrectPosition`; otherwise the letter is
    /// `IncorrectPosition` only while the pool still holds a copy of it.
    ///
    /// # Examples
    /// ```
    /// use wordle_robot::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("CRANE").unwrap();
    /// let solution = Word::new("TRACE").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &solution);
    ///
    /// assert_eq!(feedback.states()[0], LetterState::IncorrectPosition);
    /// assert_eq!(feedback.states()[1], LetterState::CorrectPosition);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word) -> Self {
        if guess == solution {
            return Self::WIN;
        }

        let guess = guess.chars();
        let solution = solution.chars();

        // Solution letters still available for IncorrectPosition credit.
        let mut pool = [0u8; 26];
        for i in 0..WORD_LEN {
            if guess[i] != solution[i] {
                pool[letter_index(solution[i])] += 1;
            }
        }

        let mut states = [LetterState::NotPresent; WORD_LEN];
        for i in 0..WORD_LEN {
            if guess[i] == solution[i] {
                states[i] = LetterState::CorrectPosition;
            } else {
                let letter = letter_index(guess[i]);
                if pool[letter] > 0 {
                    states[i] = LetterState::IncorrectPosition;
                    pool[letter] -= 1;
                }
            }
        }

        Self(states)
    }

    /// Check if this is the winning pattern
    #[inline]
    #[must_use]
    pub fn is_win(&self) -> bool {
        *self == Self::WIN
    }

    /// Get the per-position states
    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LEN] {
        &self.0
    }
}

/// Would guessing `guess` against `candidate` have produced `observed`?
///
/// Runs the same pool walk as [`Feedback::evaluate`], but compares each
/// derived state against `observed` and bails out at the first mismatch
/// instead of materializing a full feedback. For any `observed` the evaluator
/// can produce, this is exactly equivalent to
/// `Feedback::evaluate(guess, candidate) == *observed`.
///
/// The solver calls this once per (guess, candidate) pair in its inner loop,
/// so the early exit matters.
#[must_use]
pub fn is_consistent(guess: &Word, candidate: &Word, observed: &Feedback) -> bool {
    if guess == candidate {
        return observed.is_win();
    }

    let guess = guess.chars();
    let candidate = candidate.chars();

    let mut pool = [0u8; 26];
    for i in 0..WORD_LEN {
        if guess[i] != candidate[i] {
            pool[letter_index(candidate[i])] += 1;
        }
    }

    for i in 0..WORD_LEN {
        let derived = if guess[i] == candidate[i] {
            LetterState::CorrectPosition
        } else {
            let letter = letter_index(guess[i]);
            if pool[letter] > 0 {
                pool[letter] -= 1;
                LetterState::IncorrectPosition
            } else {
                LetterState::NotPresent
            }
        };
        if derived != observed.states()[i] {
            return false;
        }
    }

    true
}
