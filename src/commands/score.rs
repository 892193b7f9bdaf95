//! Score command
//!
//! Classifies one guess against a given target, without playing a round.

use crate::core::{Classification, GameError, classify};

/// Result of scoring a guess
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub classification: Classification,
}

/// Classify `guess` against `target`
///
/// # Errors
///
/// Returns [`GameError::LengthMismatch`] if the two words differ in length.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, GameError> {
    let classification = classify(guess, target)?;

    Ok(ScoreResult {
        guess: guess.to_uppercase(),
        target: target.to_uppercase(),
        classification,
    })
}
