//! Display functions for the line-based front end

use super::formatters::{colored_row, empty_row, plain_row};
use crate::commands::ScoreResult;
use crate::core::{GameError, MAX_ATTEMPTS, RoundState, RoundStatus, Tile, WORD_LENGTH};
use colored::Colorize;

/// Print the board: every guess so far, then empty rows up to the limit
pub fn print_board(round: &RoundState) {
    println!();
    for (guess, classification) in round.rows() {
        println!("  {}", colored_row(guess, &classification));
    }
    for _ in round.attempts_used()..MAX_ATTEMPTS {
        println!("  {}", empty_row(WORD_LENGTH).bright_black());
    }
    println!();
}

/// How the outcome of a submitted guess is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStyle {
    /// The guess was not accepted
    Rejected,
    Won,
    Lost,
    /// Accepted and the round goes on; nothing to announce
    Quiet,
}

impl ResultStyle {
    /// Pick the style from what `Session::submit` returned
    #[must_use]
    pub fn of(outcome: &Result<RoundStatus, GameError>) -> Self {
        match outcome {
            Err(_) => Self::Rejected,
            Ok(RoundStatus::Won) => Self::Won,
            Ok(RoundStatus::Lost) => Self::Lost,
            Ok(RoundStatus::Active) => Self::Quiet,
        }
    }
}

/// Print the message for a submitted guess
pub fn print_round_result(style: ResultStyle, message: Option<&str>) {
    let Some(message) = message else {
        return;
    };

    match style {
        ResultStyle::Won => println!("{}", format!("✅ {message}").green().bold()),
        ResultStyle::Lost => println!("{}", format!("❌ {message}").red().bold()),
        ResultStyle::Rejected => println!("{}\n", message.red()),
        ResultStyle::Quiet => {}
    }
}

/// Print the classification of a single guess
pub fn print_score_result(result: &ScoreResult) {
    let classification = &result.classification;

    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.bright_white().bold(),
        result.target.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}", plain_row(&result.guess, classification));

    if classification.is_perfect() {
        println!("\n{}", "✅ Exact match!".green().bold());
    } else {
        println!(
            "\n  Correct: {}  Present: {}  Absent: {}",
            classification.count(Tile::Correct).to_string().green(),
            classification.count(Tile::Present).to_string().yellow(),
            classification.count(Tile::Absent).to_string().bright_black()
        );
    }
}
