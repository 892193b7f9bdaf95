//! Errors reported by the round and the classifier
//!
//! Every variant is a local validation failure. The state a caller held before
//! the failing call is still valid afterwards.

use super::word::{WORD_LENGTH, WordError};
use thiserror::Error;

/// Errors that `RoundState` and `classify` can produce
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess does not have exactly [`WORD_LENGTH`] letters.
    #[error("Guess must be {len} letters long", len = WORD_LENGTH)]
    InvalidLength(usize),

    /// The guess has the right length but is not made of letters.
    #[error("Guess must contain only letters A-Z")]
    InvalidCharacters,

    /// The round has already been won or lost.
    #[error("The round is over; start a new round to keep playing")]
    RoundAlreadyOver,

    /// The supplied target word has the wrong length.
    #[error("Target word must be {len} letters long, got {0}", len = WORD_LENGTH)]
    InvalidTargetLength(usize),

    /// The supplied target word is not made of letters.
    #[error("Target word must contain only letters A-Z")]
    InvalidTargetCharacters,

    /// The classifier was given a guess and target of different lengths.
    #[error("Cannot compare a {guess}-letter guess with a {target}-letter target")]
    LengthMismatch { guess: usize, target: usize },
}

impl GameError {
    /// Map a word validation failure for a submitted guess
    #[must_use]
    pub const fn from_guess(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidLength(len),
            WordError::InvalidCharacters => Self::InvalidCharacters,
        }
    }

    /// Map a word validation failure for a target word
    #[must_use]
    pub const fn from_target(err: WordError) -> Self {
        match err {
            WordError::InvalidLength(len) => Self::InvalidTargetLength(len),
            WordError::InvalidCharacters => Self::InvalidTargetCharacters,
        }
    }
}
