//! Wordish - CLI
//!
//! Wordle-style game with a terminal UI, a line-based mode and one-shot turns.

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wordish::{
    commands::{run_guess, run_simple, run_start},
    core::{MAX_ATTEMPTS, Rules, WORD_LENGTH},
    interactive::{App, run_tui},
    output::print_page,
    session::Session,
};

#[derive(Parser)]
#[command(
    name = "wordish",
    about = "Guess the hidden word, letter by letter",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    rules: RulesArgs,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args)]
struct RulesArgs {
    /// Letters per word
    #[arg(short = 'l', long, global = true, default_value_t = WORD_LENGTH)]
    word_length: usize,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple {
        /// The word to guess
        target: String,
    },

    /// Start a game and print the state to pass to `guess`
    Start {
        /// The word to guess
        target: String,
    },

    /// Play one guess against state printed by a previous turn
    Guess {
        /// Target printed by the previous turn
        #[arg(short, long)]
        target: String,

        /// Comma-separated guesses printed by the previous turn
        #[arg(short, long, default_value = "")]
        old_guesses: String,

        /// The new guess
        guess: String,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("wordish={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Play);

    // The TUI owns the terminal, so only log there when explicitly asked
    if !matches!(command, Commands::Play) || cli.verbose > 0 {
        init_logging(cli.verbose);
    }

    let rules = Rules::new(cli.rules.word_length, cli.rules.max_attempts)?;
    let session = Session::new(rules);
    tracing::debug!(
        word_length = rules.word_length(),
        max_attempts = rules.max_attempts(),
        "rules configured"
    );

    match command {
        Commands::Play => run_tui(App::new(*session.evaluator())),
        Commands::Simple { target } => run_simple(&session, &target).map_err(|e| anyhow!(e)),
        Commands::Start { target } => {
            print_page(&run_start(&session, &target));
            Ok(())
        }
        Commands::Guess {
            target,
            old_guesses,
            guess,
        } => {
            print_page(&run_guess(&session, &target, &old_guesses, &guess));
            Ok(())
        }
    }
}
