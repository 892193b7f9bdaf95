//! Formatting utilities for terminal output

use crate::core::{Classification, Tile, Word};
use colored::{ColoredString, Colorize};

/// Render one letter as a colored tile, e.g. " C " on green
#[must_use]
pub fn colored_tile(letter: char, tile: Tile) -> ColoredString {
    let text = format!(" {letter} ");
    match tile {
        Tile::Correct => text.black().on_green().bold(),
        Tile::Present => text.black().on_yellow().bold(),
        Tile::Absent => text.white().on_bright_black().bold(),
    }
}

/// Render a guess as a row of colored tiles
#[must_use]
pub fn colored_row(guess: &Word, classification: &Classification) -> String {
    guess
        .text()
        .chars()
        .zip(classification.tiles())
        .map(|(letter, &tile)| colored_tile(letter, tile).to_string())
        .collect()
}

/// Plain-text row: letters followed by the emoji feedback
#[must_use]
pub fn plain_row(guess: &str, classification: &Classification) -> String {
    format!("{} {}", guess.to_uppercase(), classification.to_emoji())
}

/// Placeholder for a row not yet guessed
#[must_use]
pub fn empty_row(width: usize) -> String {
    " _ ".repeat(width)
}
