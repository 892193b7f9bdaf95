//! In-memory word source for tests

use super::WordSource;
use crate::core::Word;
use std::collections::VecDeque;

/// Hands out a fixed sequence of words, then nothing
pub struct Scripted(VecDeque<Word>);

impl Scripted {
    pub fn new(words: &[&str]) -> Self {
        Self(words.iter().map(|w| Word::new(w).unwrap()).collect())
    }
}

impl WordSource for Scripted {
    fn next_word(&mut self) -> Option<Word> {
        self.0.pop_front()
    }
}
