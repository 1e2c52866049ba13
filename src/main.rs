//! Wordle - CLI
//!
//! Play Wordle in the terminal, as a TUI or in plain line mode.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use rand::rngs::ThreadRng;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_game::{
    commands::{replay_file, run_simple},
    core::LINES,
    interactive::{App, run_tui},
    output::print_board,
    session::Controller,
    wordlists::{WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'all' (default, embedded list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Play every game with this solution instead of a random word
    #[arg(short, long, global = true)]
    solution: Option<String>,

    /// Write logs to this file (filter with `RUST_LOG`)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line by line, no TUI)
    Simple,

    /// Fold an action script through the state machine and print the board
    Replay {
        /// File with one action per line
        file: PathBuf,
    },
}

/// Load the word list based on the -w flag
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    match wordlist_mode {
        "all" => Ok(WordList::embedded()),
        path => Ok(load_from_file(path)?),
    }
}

/// Set up tracing
///
/// With a log file everything goes there. Without one, line mode logs warnings to
/// stderr and the TUI logs nothing, since it owns the terminal.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    match log_file {
        Some(path) => {
            let file = File::create(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow::anyhow!(e))
        }
        None if tui => Ok(()),
        None => tracing_subscriber::fmt()
            .with_env_filter(filter("warn"))
            .with_writer(io::stderr)
            .try_init()
            .map_err(|e| anyhow::anyhow!(e)),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    init_logging(cli.log_file.as_deref(), matches!(command, Commands::Play))?;

    match command {
        Commands::Play => run_play_command(&cli.wordlist, cli.solution.as_deref()),
        Commands::Simple => run_simple_command(&cli.wordlist, cli.solution.as_deref()),
        Commands::Replay { file } => run_replay_command(&file),
    }
}

fn new_controller<'a>(
    words: &'a WordList,
    solution: Option<&str>,
) -> Result<Controller<'a, ThreadRng>> {
    info!(words = words.len(), "word list loaded");

    let controller = Controller::new(words, rand::rng());
    match solution {
        Some(word) if !words.is_valid_guess(word) => {
            bail!("Solution '{word}' is not a five-letter word from the word list")
        }
        Some(word) => Ok(controller.with_fixed_solution(word)),
        None => Ok(controller),
    }
}

fn run_play_command(wordlist_mode: &str, solution: Option<&str>) -> Result<()> {
    let words = load_wordlist(wordlist_mode)?;
    let controller = new_controller(&words, solution)?;
    run_tui(App::new(controller))
}

fn run_simple_command(wordlist_mode: &str, solution: Option<&str>) -> Result<()> {
    let words = load_wordlist(wordlist_mode)?;
    let mut controller = new_controller(&words, solution)?;
    run_simple(&mut controller)?;
    Ok(())
}

fn run_replay_command(file: &Path) -> Result<()> {
    let state = replay_file(file)?;

    let mut stdout = io::stdout().lock();
    print_board(&mut stdout, &state)?;
    writeln!(
        stdout,
        "Row {} of {LINES} | {} | solution: {}",
        state.active_row(),
        state.play_state(),
        if state.solution().is_empty() {
            "(none)"
        } else {
            state.solution()
        }
    )?;
    Ok(())
}
