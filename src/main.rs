//! Strictly Numeri - Unified CLI
//!
//! Terminal drill plus small helpers for looking numbers up.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_numeri::{AcceptedAnswers, Challenge, Settings, italian_name};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, seed, mute } => run_play(config, seed, mute),
        Command::Name { number, json } => {
            init_stderr_tracing();
            run_name(&number, json)
        }
        Command::Answers { number } => {
            init_stderr_tracing();
            run_answers(&number)
        }
    }
}

/// Run the terminal drill
fn run_play(config: Option<std::path::PathBuf>, seed: Option<u64>, mute: bool) -> Result<()> {
    let settings = Settings::load(config.as_deref()).context("Failed to load settings")?;
    tui::run_tui(settings, seed, mute)
}

/// Print the word form of a number
#[instrument]
fn run_name(number: &str, json: bool) -> Result<()> {
    let challenge: Challenge = number
        .parse()
        .with_context(|| format!("Not a drill number: {}", number))?;
    debug!(%challenge, "Parsed number");

    if json {
        let answers = AcceptedAnswers::for_challenge(&challenge);
        println!("{}", serde_json::to_string_pretty(&answers)?);
    } else {
        println!("{}", italian_name(&challenge));
    }
    Ok(())
}

/// Print every accepted answer for a number
#[instrument]
fn run_answers(number: &str) -> Result<()> {
    let challenge: Challenge = number
        .parse()
        .with_context(|| format!("Not a drill number: {}", number))?;
    info!(%challenge, "Listing accepted answers");

    let answers = AcceptedAnswers::for_challenge(&challenge);
    let mut printed: Vec<&str> = Vec::new();
    for form in answers.forms() {
        // Accent-free and integer forms often repeat.
        if !printed.contains(&form) {
            println!("{}", form);
            printed.push(form);
        }
    }
    Ok(())
}

fn init_stderr_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
