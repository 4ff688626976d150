//! Core domain types: words, letter states, feedback, consistency

mod feedback;
mod word;

pub use feedback::{Feedback, LetterState, is_consistent};
pub use word::{WORD_LEN, Word, WordError};
