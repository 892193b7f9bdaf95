//! Wordle Round - CLI
//!
//! Play single rounds of Wordle in a TUI or a plain terminal, or score a guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::path::{Path, PathBuf};
use wordle_round::{
    commands::{run_simple, score_guess},
    core::Word,
    game::Session,
    output::print_score_result,
    wordlists::{RandomWordList, WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_round",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a newline-delimited file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Seed for the target word choice (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Write log output to this file instead of stderr (set RUST_LOG to enable)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Classify one guess against a target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Install `env_logger`, defaulting to warnings only
fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("could not create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

/// Load the word list based on the -w flag
fn load_words(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_round::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(WORDS)),
        path => Ok(load_from_file(path)?),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(new_session(&cli.wordlist, cli.seed)?),
        Commands::Simple => run_simple(new_session(&cli.wordlist, cli.seed)?),
        Commands::Score { guess, target } => run_score_command(&guess, &target),
    }
}

/// Build a session over the chosen word list
fn new_session(wordlist_mode: &str, seed: Option<u64>) -> Result<Session<RandomWordList<StdRng>>> {
    let words = load_words(wordlist_mode)?;
    info!("Using {} candidate target words", words.len());

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    Ok(Session::new(RandomWordList::new(words, rng))?)
}

fn run_score_command(guess: &str, target: &str) -> Result<()> {
    let result = score_guess(guess, target)?;
    print_score_result(&result);
    Ok(())
}

fn run_play_command(session: Session<RandomWordList<StdRng>>) -> Result<()> {
    use wordle_round::interactive::{App, run_tui};

    run_tui(App::new(session))
}
