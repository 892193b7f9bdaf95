//! Terminal output formatting
//!
//! Display utilities for the line-based game and the `score` command.

pub mod display;
pub mod formatters;

pub use display::{ResultStyle, print_board, print_round_result, print_score_result};
