//! Wortklauberei - CLI
//!
//! Word guessing game in the terminal, with a feedback calculator on the side.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use std::path::{Path, PathBuf};
use wortklauberei::{
    commands::{PlayConfig, compute_feedback, run_play},
    game::GameController,
    output::print_feedback_result,
    wordlists::{ALLOWED, ANSWERS, WordLists, loader},
};

#[derive(Parser)]
#[command(
    name = "wortklauberei",
    about = "Guess the secret word; letters from any alphabet welcome",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of letters in the secret word (2-9)
    #[arg(short, long, global = true, default_value_t = 5, value_parser = clap::value_parser!(u8).range(2..=9))]
    length: u8,

    /// Number of attempts per round (2-9)
    #[arg(short, long, global = true, default_value_t = 6, value_parser = clap::value_parser!(u8).range(2..=9))]
    attempts: u8,

    /// File with secret-word candidates, one per line (default: built-in list)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// File with additional accepted guesses, one per line (default: built-in list)
    #[arg(long, global = true)]
    allowed: Option<PathBuf>,

    /// Seed for picking secret words, for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play rounds interactively (default)
    Play,

    /// Show the feedback a guess gets against a solution
    Feedback {
        /// The guessed word
        guess: String,

        /// The solution to compare against
        solution: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    match cli.command {
        None | Some(Commands::Play) => run_play_command(&cli),
        Some(Commands::Feedback {
            ref guess,
            ref solution,
        }) => run_feedback_command(guess, solution),
    }
}

/// Load word lists, replacing the built-in ones where a path is given
fn load_word_lists(answers: Option<&Path>, allowed: Option<&Path>) -> Result<WordLists> {
    let lists = match (answers, allowed) {
        (None, None) => WordLists::embedded(),
        (answers, allowed) => WordLists::new(
            read_or_embedded(answers, ANSWERS, "answers")?,
            read_or_embedded(allowed, ALLOWED, "allowed words")?,
        ),
    };

    log::debug!(
        "Word lists: {} answers, {} accepted guesses",
        lists.answers().len(),
        lists.allowed().len()
    );
    Ok(lists)
}

fn read_or_embedded(path: Option<&Path>, embedded: &[&str], what: &str) -> Result<Vec<String>> {
    match path {
        Some(path) => loader::load_from_file(path)
            .with_context(|| format!("Failed to read {what} from {}", path.display())),
        None => Ok(loader::words_from_slice(embedded)),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    let word_lists = load_word_lists(cli.answers.as_deref(), cli.allowed.as_deref())?;
    let rng = cli
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

    let config = PlayConfig {
        word_length: usize::from(cli.length),
        max_attempts: i32::from(cli.attempts),
    };
    let mut controller =
        GameController::new(word_lists, rng, config.word_length, config.max_attempts)?;

    let stdin = io::stdin();
    run_play(&mut controller, config, stdin.lock(), io::stdout())?;
    Ok(())
}

fn run_feedback_command(guess: &str, solution: &str) -> Result<()> {
    let result = compute_feedback(guess, solution).map_err(|e| anyhow::anyhow!(e))?;
    print_feedback_result(&result);
    Ok(())
}
