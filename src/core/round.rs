//! Round state machine
//!
//! A `RoundState` is an immutable value. Submitting a guess never touches the
//! receiver; it returns a new state that the caller keeps in place of the old
//! one. States: `Active` (initial) → `Won` | `Lost` (terminal).

use super::classify::Classification;
use super::error::GameError;
use super::word::{WORD_LENGTH, Word};
use log::{debug, info};

/// Number of guesses allowed before the round is lost
pub const MAX_ATTEMPTS: usize = 6;

/// Where a round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStatus {
    Active,
    Won,
    Lost,
}

impl RoundStatus {
    /// `Won` and `Lost` are terminal; nothing leaves them
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// One round: the target, the guesses so far and the status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundState {
    target: Word,
    guesses: Vec<Word>,
    status: RoundStatus,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// The round after the guess was recorded
    pub state: RoundState,
    /// Tiles for the submitted guess
    pub classification: Classification,
    /// Status after the guess, same as `state.status()`
    pub status: RoundStatus,
}

impl RoundState {
    /// Start a round from caller-supplied text
    ///
    /// # Errors
    /// Returns [`GameError::InvalidTargetLength`] or
    /// [`GameError::InvalidTargetCharacters`] if `target` is not a valid word.
    ///
    /// # Examples
    /// ```
    /// use wordle_round::core::{RoundState, RoundStatus};
    ///
    /// let round = RoundState::start("crane").unwrap();
    /// assert_eq!(round.status(), RoundStatus::Active);
    /// assert!(round.guesses().is_empty());
    /// ```
    pub fn start(target: &str) -> Result<Self, GameError> {
        let target = Word::new(target).map_err(GameError::from_target)?;
        Ok(Self::new(target))
    }

    /// Start a round from an already validated word
    #[must_use]
    pub fn new(target: Word) -> Self {
        debug!("Round started ({MAX_ATTEMPTS} attempts)");
        Self {
            target,
            guesses: Vec::with_capacity(MAX_ATTEMPTS),
            status: RoundStatus::Active,
        }
    }

    /// Submit a guess and get the next state
    ///
    /// Checks run in order: length, round still active, letters only. On any
    /// error the caller's state is untouched. The win check comes before the
    /// attempt ceiling, so a correct final guess is `Won`.
    ///
    /// # Errors
    /// - [`GameError::InvalidLength`] if the guess is not [`WORD_LENGTH`] characters
    /// - [`GameError::RoundAlreadyOver`] if the round is `Won` or `Lost`
    /// - [`GameError::InvalidCharacters`] if the guess contains non-letters
    ///
    /// # Examples
    /// ```
    /// use wordle_round::core::{RoundState, RoundStatus};
    ///
    /// let round = RoundState::start("crane").unwrap();
    /// let submission = round.submit_guess("crane").unwrap();
    ///
    /// assert_eq!(submission.status, RoundStatus::Won);
    /// assert!(submission.classification.is_perfect());
    /// assert!(round.guesses().is_empty()); // the old value is unchanged
    /// ```
    pub fn submit_guess(&self, guess: &str) -> Result<Submission, GameError> {
        let len = guess.chars().count();
        if len != WORD_LENGTH {
            return Err(GameError::InvalidLength(len));
        }

        if self.status.is_terminal() {
            return Err(GameError::RoundAlreadyOver);
        }

        let guess = Word::new(guess).map_err(GameError::from_guess)?;
        let classification = Classification::calculate(&guess, &self.target);

        let mut guesses = self.guesses.clone();
        let won = guess == self.target;
        guesses.push(guess);

        let status = if won {
            RoundStatus::Won
        } else if guesses.len() == MAX_ATTEMPTS {
            RoundStatus::Lost
        } else {
            RoundStatus::Active
        };

        debug!(
            "Guess {}/{MAX_ATTEMPTS} accepted: {}",
            guesses.len(),
            classification.to_emoji()
        );
        if status.is_terminal() {
            info!("Round ended {status:?} after {} guesses", guesses.len());
        }

        Ok(Submission {
            state: Self {
                target: self.target.clone(),
                guesses,
                status,
            },
            classification,
            status,
        })
    }

    /// True while guesses can still be submitted
    #[inline]
    #[must_use]
    pub const fn is_accepting_input(&self) -> bool {
        matches!(self.status, RoundStatus::Active)
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    /// Guesses in submission order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> RoundStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn attempts_used(&self) -> usize {
        self.guesses.len()
    }

    #[inline]
    #[must_use]
    pub fn attempts_remaining(&self) -> usize {
        MAX_ATTEMPTS - self.guesses.len()
    }

    /// Past guesses paired with their tiles, for rendering
    pub fn rows(&self) -> impl Iterator<Item = (&Word, Classification)> + '_ {
        self.guesses
            .iter()
            .map(|guess| (guess, Classification::calculate(guess, &self.target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    fn play(round: &RoundState, guesses: &[&str]) -> RoundState {
        guesses.iter().fold(round.clone(), |state, guess| {
            state.submit_guess(guess).unwrap().state
        })
    }

    const MISSES: [&str; MAX_ATTEMPTS] = ["slate", "audio", "pious", "dream", "lolly", "quick"];

    #[test]
    fn start_round_is_active_and_empty() {
        let round = RoundState::start("CRANE").unwrap();
        assert_eq!(round.target().text(), "CRANE");
        assert!(round.guesses().is_empty());
        assert_eq!(round.status(), RoundStatus::Active);
        assert!(round.is_accepting_input());
        assert_eq!(round.attempts_remaining(), MAX_ATTEMPTS);
    }

    #[test]
    fn start_round_rejects_bad_target() {
        assert_eq!(
            RoundState::start("cat"),
            Err(GameError::InvalidTargetLength(3))
        );
        assert_eq!(
            RoundState::start("cr4ne"),
            Err(GameError::InvalidTargetCharacters)
        );
    }

    #[test]
    fn exact_guess_wins() {
        let round = RoundState::start("CRANE").unwrap();
        let submission = round.submit_guess("CRANE").unwrap();

        assert_eq!(submission.classification.tiles(), &[Tile::Correct; 5]);
        assert_eq!(submission.status, RoundStatus::Won);
        assert_eq!(submission.state.status(), RoundStatus::Won);
        assert!(!submission.state.is_accepting_input());
    }

    #[test]
    fn partial_guess_stays_active() {
        let round = RoundState::start("CRANE").unwrap();
        let submission = round.submit_guess("REBUS").unwrap();

        assert_eq!(
            submission.classification.tiles(),
            &[Tile::Present, Tile::Present, Tile::Absent, Tile::Absent, Tile::Absent]
        );
        assert_eq!(submission.status, RoundStatus::Active);
        assert_eq!(submission.state.guesses().len(), 1);
    }

    #[test]
    fn guess_is_uppercased_before_recording() {
        let round = RoundState::start("CRANE").unwrap();
        let submission = round.submit_guess("crane").unwrap();

        assert_eq!(submission.state.guesses()[0].text(), "CRANE");
        assert_eq!(submission.status, RoundStatus::Won);
    }

    #[test]
    fn wrong_length_is_rejected_without_recording() {
        let round = RoundState::start("CRANE").unwrap();
        assert_eq!(round.submit_guess("CAT"), Err(GameError::InvalidLength(3)));
        assert_eq!(
            round.submit_guess("CRANES"),
            Err(GameError::InvalidLength(6))
        );
        assert!(round.guesses().is_empty());
    }

    #[test]
    fn non_letters_are_rejected() {
        let round = RoundState::start("CRANE").unwrap();
        assert_eq!(
            round.submit_guess("CR4NE"),
            Err(GameError::InvalidCharacters)
        );
    }

    #[test]
    fn submitting_does_not_mutate_receiver() {
        let round = RoundState::start("CRANE").unwrap();
        let before = round.clone();
        let _ = round.submit_guess("SLATE").unwrap();
        assert_eq!(round, before);
    }

    #[test]
    fn six_misses_lose_the_round() {
        let round = RoundState::start("CRANE").unwrap();
        let mut state = round;

        for (i, guess) in MISSES.iter().enumerate() {
            let submission = state.submit_guess(guess).unwrap();
            let expected = if i + 1 == MAX_ATTEMPTS {
                RoundStatus::Lost
            } else {
                RoundStatus::Active
            };
            assert_eq!(submission.status, expected);
            state = submission.state;
        }

        assert_eq!(state.attempts_used(), MAX_ATTEMPTS);
        assert_eq!(state.attempts_remaining(), 0);
        assert!(!state.is_accepting_input());
        assert_eq!(
            state.submit_guess("CRANE"),
            Err(GameError::RoundAlreadyOver)
        );
        assert_eq!(state.guesses().len(), MAX_ATTEMPTS);
    }

    #[test]
    fn win_on_final_attempt_is_won_not_lost() {
        let round = RoundState::start("CRANE").unwrap();
        let state = play(&round, &MISSES[..MAX_ATTEMPTS - 1]);
        assert_eq!(state.status(), RoundStatus::Active);

        let submission = state.submit_guess("CRANE").unwrap();
        assert_eq!(submission.status, RoundStatus::Won);
        assert_eq!(submission.state.guesses().len(), MAX_ATTEMPTS);
        assert_eq!(
            submission.state.guesses().last(),
            Some(submission.state.target())
        );
    }

    #[test]
    fn no_guesses_recorded_after_win() {
        let round = RoundState::start("CRANE").unwrap();
        let won = play(&round, &["SLATE", "CRANE"]);
        assert_eq!(won.status(), RoundStatus::Won);

        for guess in ["CRANE", "SLATE", "AUDIO"] {
            assert_eq!(won.submit_guess(guess), Err(GameError::RoundAlreadyOver));
        }
        assert_eq!(won.guesses().len(), 2);
    }

    #[test]
    fn length_is_checked_before_round_over() {
        let won = play(&RoundState::start("CRANE").unwrap(), &["CRANE"]);
        assert_eq!(won.submit_guess("CAT"), Err(GameError::InvalidLength(3)));
    }

    #[test]
    fn rows_pair_guesses_with_tiles() {
        let state = play(&RoundState::start("ALLOY").unwrap(), &["LOLLY", "ALLOY"]);
        let rows: Vec<_> = state.rows().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0.text(), "LOLLY");
        assert_eq!(rows[0].1.to_emoji(), "🟨🟨🟩⬜🟩");
        assert!(rows[1].1.is_perfect());
    }
}
