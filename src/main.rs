//! Clueboard - CLI
//!
//! Crossword clue game with TUI and line-based modes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use clueboard::{
    board::{BoardConfig, ClueBoard, EmptyAnswerPolicy},
    commands::{list_clues, run_simple, solve_all},
    content::{builtin, loader::load_from_file},
    core::ClueSet,
    logging::{LogConfig, init_logging},
    output::{print_clue_listing, print_solve_result},
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "clueboard",
    about = "Crossword-style clue guessing game for the terminal",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Clues: 'builtin' (default) or path to a clue file (direction|answer|prompt per line)
    #[arg(short, long, global = true, default_value = "builtin")]
    clues: String,

    /// Blank answers: 'any' (default, every clue asks for an answer) or 'last' (only the last clue)
    #[arg(long, global = true, default_value = "any", value_parser = ["any", "last"])]
    empty_answer: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file (required to see logs in play mode)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// List the clues
    Clues {
        /// Also print the answers
        #[arg(short, long)]
        answers: bool,
    },

    /// Show the solved crossword
    Solve {
        /// Show the grid after every answer
        #[arg(short, long)]
        steps: bool,
    },
}

/// Load clues based on the -c flag
fn load_clues(source: &str) -> Result<ClueSet> {
    let clues = match source {
        "builtin" => builtin()?,
        path => load_from_file(path)?,
    };
    Ok(clues)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal; only log there when a file is given
    if cli.log_file.is_some() || !matches!(command, Commands::Play) {
        let config = LogConfig::from_verbosity(cli.verbose).with_log_file(cli.log_file.clone());
        init_logging(&config)?;
    }

    let clues = load_clues(&cli.clues)?;
    let config = BoardConfig::new(EmptyAnswerPolicy::from_name(&cli.empty_answer));
    tracing::info!(clues = clues.len(), source = %cli.clues, "clues loaded");

    match command {
        Commands::Play => run_play_command(clues, config),
        Commands::Simple => run_simple(ClueBoard::new(clues, config)),
        Commands::Clues { answers } => {
            print_clue_listing(&list_clues(&clues, answers));
            Ok(())
        }
        Commands::Solve { steps } => {
            print_solve_result(&solve_all(&clues, config, '·'), steps);
            Ok(())
        }
    }
}

fn run_play_command(clues: ClueSet, config: BoardConfig) -> Result<()> {
    use clueboard::interactive::{App, run_tui};

    let app = App::new(ClueBoard::new(clues, config));
    run_tui(app)
}
