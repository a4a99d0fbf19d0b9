//! Command-line interface for strictly_numeri.

use clap::{Parser, Subcommand};

/// Strictly Numeri - Italian number listening drill
#[derive(Parser, Debug)]
#[command(name = "strictly_numeri")]
#[command(about = "Hear an Italian number, type it back", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play the drill in the terminal
    Play {
        /// Path to a TOML settings file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the challenge generator (repeatable sessions)
        #[arg(long)]
        seed: Option<u64>,

        /// Disable speech output
        #[arg(long)]
        mute: bool,
    },

    /// Print the Italian word form of a number such as 23 or 1,55
    Name {
        /// Number to name
        number: String,

        /// Print the accepted answers as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print every answer accepted for a number
    Answers {
        /// Number to check
        number: String,
    },
}
