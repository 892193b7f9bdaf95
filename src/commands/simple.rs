//! Simple interactive CLI mode
//!
//! Text-based game without the TUI

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::Session;
use crate::output::{ResultStyle, print_board, print_round_result};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What the player typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    NewRound,
    Guess(String),
}

impl Input {
    /// Interpret a trimmed input line
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_lowercase().as_str() {
            ":q" | ":quit" | ":exit" => Self::Quit,
            ":n" | ":new" => Self::NewRound,
            _ => Self::Guess(line.to_uppercase()),
        }
    }
}

/// Run the line-based game until the player quits or input ends
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
pub fn run_simple<S: WordSource>(mut session: Session<S>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                       Wordle - One Round                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries.");
    println!("  - 🟩 right letter, right spot");
    println!("  - 🟨 right letter, wrong spot");
    println!("  - ⬜ letter not in the word\n");
    println!("Commands: ':quit' to exit, ':new' for the next round once this one is over\n");

    print_board(session.round());

    loop {
        let prompt = if session.is_accepting_input() {
            format!(
                "Guess {}/{MAX_ATTEMPTS}",
                session.round().attempts_used() + 1
            )
        } else {
            "Round over - ':new' or ':quit'".to_string()
        };

        let Some(line) = get_user_input(&prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Input::parse(&line) {
            Input::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Input::NewRound => {
                if session.is_accepting_input() {
                    println!("Finish this round first!\n");
                } else if session.next_round() {
                    println!("\n🔄 New round started!");
                    print_board(session.round());
                } else if let Some(message) = session.message() {
                    println!("{}\n", message.red());
                }
            }
            Input::Guess(guess) => {
                let outcome = session.submit(&guess);
                if outcome.is_ok() {
                    print_board(session.round());
                }
                print_round_result(ResultStyle::of(&outcome), session.message());
            }
        }
    }
}

/// Get user input with a prompt; `None` at end of input
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
