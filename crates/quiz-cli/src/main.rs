//! CLI frontend for Quiz Terminal, a multi-round multiple-choice quiz.

mod bank;
mod commands;
mod config;
mod render;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{DEFAULT_REVEAL_DELAY_MS, PlayConfig};

#[derive(Parser)]
#[command(
    name = "quiz",
    about = "Quiz Terminal: five rounds of multiple-choice questions for two or more players",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Name of the question author (prompted if omitted)
        #[arg(short, long)]
        author: Option<String>,

        /// Player name, repeat for each player (prompted if omitted)
        #[arg(short, long = "player")]
        players: Vec<String>,

        /// JSON question bank to use instead of typing questions in
        #[arg(short, long)]
        questions: Option<PathBuf>,

        /// Pause before each verdict, in milliseconds
        #[arg(long, default_value_t = DEFAULT_REVEAL_DELAY_MS)]
        reveal_delay_ms: u64,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Write a transcript when the game ends (.txt for text, otherwise JSON)
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// Print an example question bank as JSON
    QuestionsTemplate,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            author,
            players,
            questions,
            reveal_delay_ms,
            no_color,
            transcript,
        } => {
            let config = PlayConfig::default()
                .with_reveal_delay(reveal_delay_ms)
                .with_color(!no_color)
                .with_transcript(transcript);
            commands::play::run(author, players, questions.as_deref(), config)
        }
        Commands::QuestionsTemplate => commands::template::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
