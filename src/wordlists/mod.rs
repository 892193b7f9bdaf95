//! Word lists and target word providers
//!
//! The core only needs "one valid word per round". This module supplies it:
//! an embedded list, a file loader and a uniform random picker behind the
//! [`WordSource`] trait.

mod embedded;
pub mod loader;
#[cfg(test)]
pub(crate) mod scripted;

pub use embedded::{WORDS, WORDS_COUNT};

use crate::core::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Errors from loading a word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("word list contains no valid words")]
    Empty,
}

/// Supplies target words, one per round
pub trait WordSource {
    /// Next target word, or `None` if the source cannot supply one
    fn next_word(&mut self) -> Option<Word>;
}

/// Picks targets uniformly at random from a fixed list
pub struct RandomWordList<R: Rng> {
    words: Vec<Word>,
    rng: R,
}

impl<R: Rng> RandomWordList<R> {
    #[must_use]
    pub const fn new(words: Vec<Word>, rng: R) -> Self {
        Self { words, rng }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<R: Rng> WordSource for RandomWordList<R> {
    fn next_word(&mut self) -> Option<Word> {
        self.words.choose(&mut self.rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::loader::words_from_slice;
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
        assert!(WORDS_COUNT > 0);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert!(Word::new(word).is_ok(), "Word '{word}' is not a valid word");
        }
    }

    #[test]
    fn random_list_only_yields_listed_words() {
        let words = words_from_slice(&["crane", "slate", "alloy"]);
        let mut source = RandomWordList::new(words.clone(), StdRng::seed_from_u64(7));

        for _ in 0..50 {
            let word = source.next_word().unwrap();
            assert!(words.contains(&word));
        }
    }

    #[test]
    fn same_seed_same_targets() {
        let words = words_from_slice(WORDS);
        let mut a = RandomWordList::new(words.clone(), StdRng::seed_from_u64(42));
        let mut b = RandomWordList::new(words, StdRng::seed_from_u64(42));

        for _ in 0..10 {
            assert_eq!(a.next_word(), b.next_word());
        }
    }

    #[test]
    fn empty_list_yields_nothing() {
        let mut source = RandomWordList::new(Vec::new(), StdRng::seed_from_u64(1));
        assert!(source.is_empty());
        assert_eq!(source.next_word(), None);
    }
}
