//! Letter-by-letter classification of a guess against the target
//!
//! Each guess position gets one of three tiles:
//! - `Correct`: same letter at the same position
//! - `Present`: letter occurs elsewhere in the target
//! - `Absent`: letter not in the target, or every occurrence already used
//!
//! Each letter occurrence in the target can satisfy at most one guess
//! position, so duplicated guess letters are never over-counted.

use super::error::GameError;
use super::word::Word;
use rustc_hash::FxHashMap;
use std::collections::VecDeque;
use std::fmt;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Right letter, right position (green)
    Correct,
    /// Right letter, wrong position (yellow)
    Present,
    /// Letter not available in the target (gray)
    Absent,
}

impl Tile {
    /// Emoji used when printing a row
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Ordered tiles for one guess, one per letter position
///
/// Derived data: recomputed from `(guess, target)` whenever it is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification(Vec<Tile>);

impl Classification {
    /// Classify `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_round::core::{Classification, Tile, Word};
    ///
    /// let guess = Word::new("rebus").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let tiles = Classification::calculate(&guess, &target);
    ///
    /// assert_eq!(
    ///     tiles.tiles(),
    ///     &[Tile::Present, Tile::Present, Tile::Absent, Tile::Absent, Tile::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let guess: Vec<char> = guess.letters().iter().map(|&b| b as char).collect();
        let target: Vec<char> = target.letters().iter().map(|&b| b as char).collect();
        Self(classify_letters(&guess, &target))
    }

    /// Tiles in guess order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.0
    }

    /// Check if every tile is `Correct`
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&tile| tile == Tile::Correct)
    }

    /// Count tiles of one kind
    #[must_use]
    pub fn count(&self, kind: Tile) -> usize {
        self.0.iter().filter(|&&tile| tile == kind).count()
    }

    /// Convert to an emoji row like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|tile| tile.to_emoji()).collect()
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}

/// Classify two arbitrary strings, ignoring ASCII case
///
/// Unlike [`Classification::calculate`] this accepts any length, as long as
/// both sides agree.
///
/// # Errors
/// Returns [`GameError::LengthMismatch`] if the character counts differ.
///
/// # Examples
/// ```
/// use wordle_round::core::{classify, GameError};
///
/// let tiles = classify("crane", "CRANE").unwrap();
/// assert!(tiles.is_perfect());
///
/// assert!(matches!(classify("cat", "crane"), Err(GameError::LengthMismatch { .. })));
/// ```
pub fn classify(guess: &str, target: &str) -> Result<Classification, GameError> {
    let guess: Vec<char> = guess.chars().map(|c| c.to_ascii_uppercase()).collect();
    let target: Vec<char> = target.chars().map(|c| c.to_ascii_uppercase()).collect();

    if guess.len() != target.len() {
        return Err(GameError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    Ok(Classification(classify_letters(&guess, &target)))
}

/// Two-pass classification over equal-length letter slices
fn classify_letters(guess: &[char], target: &[char]) -> Vec<Tile> {
    debug_assert_eq!(guess.len(), target.len());

    let mut tiles = vec![Tile::Absent; guess.len()];

    // First pass: exact matches consume their target position
    let mut unconsumed: FxHashMap<char, VecDeque<usize>> = FxHashMap::default();
    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            tiles[i] = Tile::Correct;
        } else {
            unconsumed.entry(t).or_default().push_back(i);
        }
    }

    // Second pass: leftmost unconsumed occurrence, guess scanned left to right
    for (tile, letter) in tiles.iter_mut().zip(guess) {
        if *tile == Tile::Correct {
            continue;
        }
        if let Some(positions) = unconsumed.get_mut(letter)
            && positions.pop_front().is_some()
        {
            *tile = Tile::Present;
        }
    }

    tiles
}
