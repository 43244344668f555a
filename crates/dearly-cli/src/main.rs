//! CLI frontend for the dearly narrative engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dearly",
    about = "dearly — a branching yes/no narrative engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new story directory with a template story.json
    Init {
        /// Name of the story directory to create
        name: String,
    },

    /// Validate a story document and report findings
    Check {
        /// Path to the story JSON document
        file: PathBuf,
    },

    /// Play a story in the terminal
    Play {
        /// Path to the story JSON document
        file: PathBuf,

        /// RNG seed for witty-line picks and button dodges
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Scripted choices (e.g. "yyn") for non-interactive runs
        #[arg(short, long)]
        choices: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&name),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Play {
            file,
            seed,
            choices,
        } => commands::play::run(&file, seed, choices.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
