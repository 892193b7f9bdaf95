//! Word list loading utilities
//!
//! Provides functions to load newline-delimited word lists from text, files or
//! the embedded constant.

use super::WordListError;
use crate::core::Word;
use log::{info, warn};
use std::fs;
use std::path::Path;

/// Parse a newline-delimited word list
///
/// Lines are trimmed; blank lines are ignored and invalid entries are skipped
/// with a warning.
#[must_use]
pub fn parse_word_list(text: &str) -> Vec<Word> {
    text.lines()
        .enumerate()
        .filter_map(|(line_no, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            parse_entry(line_no, trimmed)
        })
        .collect()
}

/// Validate one entry, warning if it is skipped
fn parse_entry(index: usize, entry: &str) -> Option<Word> {
    match Word::new(entry) {
        Ok(word) => Some(word),
        Err(e) => {
            warn!("Skipping word list line {}: {entry:?} ({e})", index + 1);
            None
        }
    }
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::Empty`] if it holds no valid words.
///
/// # Examples
/// ```no_run
/// use wordle_round::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let words = parse_word_list(&content);
    if words.is_empty() {
        return Err(WordListError::Empty);
    }

    info!("Loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// Invalid entries are skipped with a warning, as in [`parse_word_list`].
///
/// # Examples
/// ```
/// use wordle_round::wordlists::loader::words_from_slice;
/// use wordle_round::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice
        .iter()
        .enumerate()
        .filter_map(|(index, &entry)| parse_entry(index, entry))
        .collect()
}
