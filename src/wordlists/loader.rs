//! Word list loading
//!
//! Word lists are newline-delimited plain text, one word per line. Lines that
//! are not exactly 5 alphabetic characters are skipped; surviving words are
//! uppercased by `Word` construction.

use std::fs;
use std::io;
use std::path::Path;

use crate::core::Word;

/// Load words from a file, skipping invalid lines
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_robot::wordlists::loader::load_words;
///
/// let words = load_words("data/solutions.txt").unwrap();
/// println!("loaded {} words", words.len());
/// ```
pub fn load_words<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .filter_map(|line| Word::new(line.trim()).ok())
        .collect();

    Ok(words)
}
