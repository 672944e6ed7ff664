use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use dashcard::core::config;
use dashcard::core::deck::Deck;
use dashcard::tui::{self, RunOutcome};

#[derive(Parser)]
#[command(name = "dashcard", about = "Terminal runner with flashcard interrupts")]
struct Args {
    /// Question file: rows of `prompt, answer1;answer2;...`
    deck: PathBuf,
    /// Seed the hazard stream for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// Alternate config file (default: ~/.dashcard/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Key reference and deck format, shown before the terminal goes raw.
fn intro() {
    println!("Welcome to dashcard!");
    println!("Press space to jump");
    println!("Press q to quit");
    println!("Press r to reset");
    println!("Press a to ask a question");
    println!();
    println!("Question file format: prompt, answer");
    println!("Separate multiple right answers with semicolons, e.g.");
    println!("  What is the capital of the United States?, Washington;Washington D.C.;DC");
    println!();
    println!("Press enter to start");
    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
}

fn main() -> ExitCode {
    let args = Args::parse();

    // File logger — the terminal itself belongs to the game.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("dashcard.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }
    log::info!("Dashcard starting up");

    let config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::from(2);
        }
    };
    let resolved = config::resolve(&config, args.seed);

    let deck = match Deck::load(&args.deck) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Could not read {}: {e}", args.deck.display());
            return ExitCode::FAILURE;
        }
    };
    if deck.is_empty() {
        warn!("deck is empty; quizzes will be skipped");
        println!("Note: no questions loaded, quizzes will be skipped.");
    }

    intro();

    // The guard inside run() restores the terminal before any of these
    // messages print, on success and failure alike.
    match tui::run(&resolved, &deck) {
        Ok(RunOutcome::Quit) => {
            println!("Thanks for playing!");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::GameOver) => {
            println!("Out of lives — game over. Thanks for playing!");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("An error has occurred. Thanks for playing!");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
