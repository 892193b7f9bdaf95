//! Core game logic
//!
//! The round state machine and the letter classifier. Everything here is pure
//! and synchronous; choosing the target word is left to the caller.

mod classify;
mod error;
mod round;
mod word;

pub use classify::{Classification, Tile, classify};
pub use error::GameError;
pub use round::{MAX_ATTEMPTS, RoundState, RoundStatus, Submission};
pub use word::{WORD_LENGTH, Word, WordError};
