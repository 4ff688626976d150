//! Minimax guess scoring
//!
//! A guess is scored by the number of candidates it is guaranteed to
//! eliminate: for every hypothesis about the true solution, count the
//! candidates inconsistent with the feedback that hypothesis would produce,
//! and keep the minimum. Maximizing that guaranteed elimination is the same
//! as minimizing the worst-case surviving pool.

use rustc_hash::FxHashSet;

use crate::core::{Feedback, Word, is_consistent};

/// Worst-case number of candidates `guess` eliminates from `pool`
///
/// Early-exits once a hypothesis shows the guess can eliminate nothing —
/// zero ties for worst, so no further hypotheses can change the score.
#[must_use]
pub fn worst_case_eliminations(guess: &Word, pool: &[&Word]) -> usize {
    let mut min_eliminated = pool.len();

    for hypothesis in pool {
        let feedback = Feedback::evaluate(guess, hypothesis);
        let eliminated = pool
            .iter()
            .filter(|candidate| !is_consistent(guess, candidate, &feedback))
            .count();
        min_eliminated = min_eliminated.min(eliminated);
        if min_eliminated == 0 {
            break;
        }
    }

    min_eliminated
}

/// Select the minimax guess from `all_words`
///
/// Every word not in `guessed` is scored with
/// [`worst_case_eliminations`] against `pool`; the highest score wins. Ties
/// are broken deterministically: tied words are sorted lexicographically and
/// the first that is itself still a candidate is preferred, falling back to
/// the lexicographically first.
///
/// Returns `None` only if every word has already been guessed.
///
/// This scan is O(|pool|² × |all_words|) and dominates the solver's runtime.
#[must_use]
pub fn select_guess<'a>(
    all_words: &'a [Word],
    pool: &[&'a Word],
    guessed: &FxHashSet<String>,
) -> Option<&'a Word> {
    let scored: Vec<(&'a Word, usize)> = all_words
        .iter()
        .filter(|word| !guessed.contains(word.text()))
        .map(|word| (word, worst_case_eliminations(word, pool)))
        .collect();

    let best = scored.iter().map(|&(_, score)| score).max()?;

    let mut tied: Vec<&'a Word> = scored
        .into_iter()
        .filter(|&(_, score)| score == best)
        .map(|(word, _)| word)
        .collect();
    if tied.len() == 1 {
        return Some(tied[0]);
    }

    tied.sort_unstable_by(|a, b| a.text().cmp(b.text()));
    tied.iter()
        .find(|word| pool.contains(*word))
        .or_else(|| tied.first())
        .copied()
}
