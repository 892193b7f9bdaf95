//! Playing session
//!
//! Holds the current round value and replaces it wholesale on every
//! transition. Also keeps the one-line message shown to the player.

use crate::core::{GameError, RoundState, RoundStatus};
use crate::wordlists::WordSource;
use log::{debug, error};
use thiserror::Error;

/// Errors from setting up a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("the word list did not supply a target word")]
    NoWordAvailable,
}

/// A sequence of rounds fed by one word source
pub struct Session<S: WordSource> {
    source: S,
    round: RoundState,
    message: Option<String>,
}

impl<S: WordSource> Session<S> {
    /// Start a session and its first round
    ///
    /// # Errors
    /// Returns [`SessionError::NoWordAvailable`] if `source` yields no word.
    pub fn new(mut source: S) -> Result<Self, SessionError> {
        let target = source.next_word().ok_or(SessionError::NoWordAvailable)?;
        Ok(Self {
            source,
            round: RoundState::new(target),
            message: None,
        })
    }

    /// The round currently in play
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    /// Latest message for the player, if any
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub const fn is_accepting_input(&self) -> bool {
        self.round.is_accepting_input()
    }

    /// Replace the round with a fresh one
    ///
    /// If the source has no word, the current round is kept as it is and
    /// `false` is returned.
    pub fn next_round(&mut self) -> bool {
        let Some(target) = self.source.next_word() else {
            error!("Word source returned no word; keeping the current round");
            self.message = Some("Could not load a new word. Try again.".to_string());
            return false;
        };

        self.round = RoundState::new(target);
        self.message = None;
        true
    }

    /// Submit the player's guess
    ///
    /// The text goes to the round as given; front ends shape the input first.
    /// On success the session moves to the new round state. On failure the
    /// round is untouched and the error text becomes the message.
    ///
    /// # Errors
    /// Passes through the [`GameError`] from [`RoundState::submit_guess`].
    pub fn submit(&mut self, text: &str) -> Result<RoundStatus, GameError> {
        let submission = match self.round.submit_guess(text) {
            Ok(submission) => submission,
            Err(e) => {
                debug!("Guess {text:?} rejected: {e}");
                self.message = Some(e.to_string());
                return Err(e);
            }
        };

        self.round = submission.state;
        self.message = match submission.status {
            RoundStatus::Active => None,
            RoundStatus::Won => Some(format!(
                "Correct! You found {} in {} {}.",
                self.round.target(),
                self.round.attempts_used(),
                if self.round.attempts_used() == 1 {
                    "guess"
                } else {
                    "guesses"
                }
            )),
            RoundStatus::Lost => Some(format!(
                "Game over! The correct word was {}.",
                self.round.target()
            )),
        };

        Ok(submission.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MAX_ATTEMPTS;
    use crate::wordlists::scripted::Scripted;

    #[test]
    fn new_session_needs_a_word() {
        assert!(matches!(
            Session::new(Scripted::new(&[])),
            Err(SessionError::NoWordAvailable)
        ));
    }

    #[test]
    fn first_round_uses_first_word() {
        let session = Session::new(Scripted::new(&["crane"])).unwrap();
        assert_eq!(session.round().target().text(), "CRANE");
        assert!(session.is_accepting_input());
        assert_eq!(session.message(), None);
    }

    #[test]
    fn invalid_guess_sets_message_and_keeps_round() {
        let mut session = Session::new(Scripted::new(&["crane"])).unwrap();

        assert_eq!(session.submit("cat"), Err(GameError::InvalidLength(3)));
        assert_eq!(session.message(), Some("Guess must be 5 letters long"));
        assert!(session.round().guesses().is_empty());
    }

    #[test]
    fn valid_guess_clears_message() {
        let mut session = Session::new(Scripted::new(&["crane"])).unwrap();
        let _ = session.submit("cat");

        assert_eq!(session.submit("slate"), Ok(RoundStatus::Active));
        assert_eq!(session.message(), None);
        assert_eq!(session.round().attempts_used(), 1);
    }

    #[test]
    fn text_is_forwarded_untrimmed() {
        let mut session = Session::new(Scripted::new(&["crane"])).unwrap();

        assert_eq!(session.submit(" crane "), Err(GameError::InvalidLength(7)));
        assert!(session.round().guesses().is_empty());
        assert!(session.is_accepting_input());
    }

    #[test]
    fn win_message_names_the_word() {
        let mut session = Session::new(Scripted::new(&["crane"])).unwrap();
        assert_eq!(session.submit("crane"), Ok(RoundStatus::Won));
        assert_eq!(
            session.message(),
            Some("Correct! You found CRANE in 1 guess.")
        );
        assert!(!session.is_accepting_input());
    }

    #[test]
    fn loss_reveals_the_word() {
        let mut session = Session::new(Scripted::new(&["crane"])).unwrap();
        for _ in 0..MAX_ATTEMPTS - 1 {
            assert_eq!(session.submit("slate"), Ok(RoundStatus::Active));
        }
        assert_eq!(session.submit("slate"), Ok(RoundStatus::Lost));
        assert_eq!(
            session.message(),
            Some("Game over! The correct word was CRANE.")
        );

        assert_eq!(session.submit("crane"), Err(GameError::RoundAlreadyOver));
        assert_eq!(session.round().guesses().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn next_round_replaces_the_round() {
        let mut session = Session::new(Scripted::new(&["crane", "alloy"])).unwrap();
        session.submit("crane").unwrap();

        assert!(session.next_round());
        assert_eq!(session.round().target().text(), "ALLOY");
        assert!(session.round().guesses().is_empty());
        assert!(session.is_accepting_input());
        assert_eq!(session.message(), None);
    }

    #[test]
    fn failed_fetch_keeps_current_round() {
        let mut session = Session::new(Scripted::new(&["crane"])).unwrap();
        session.submit("crane").unwrap();
        let before = session.round().clone();

        assert!(!session.next_round());
        assert_eq!(session.round(), &before);
        assert_eq!(
            session.message(),
            Some("Could not load a new word. Try again.")
        );
    }
}
