//! Wordle Round
//!
//! A single-round word-guessing game: a round state machine plus a
//! duplicate-aware letter classifier, with terminal front ends on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_round::core::{RoundState, RoundStatus, Tile};
//!
//! let round = RoundState::start("crane").unwrap();
//!
//! let submission = round.submit_guess("rebus").unwrap();
//! assert_eq!(submission.classification.tiles()[0], Tile::Present);
//! assert_eq!(submission.status, RoundStatus::Active);
//!
//! // The caller keeps the new state in place of the old one
//! let round = submission.state;
//! assert_eq!(round.attempts_used(), 1);
//! ```

// Core domain types
pub mod core;

// Session flow on top of the core
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
