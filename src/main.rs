//! Knock Out! command-line runner.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::cell::RefCell;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser;
use knockout::{EventLog, Game, GameConfig, TurnTracker};
use tracing_subscriber::EnvFilter;

/// Play a game of Knock Out!
#[derive(Parser, Debug)]
#[command(name = "knockout")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players
    #[arg(short, long, default_value = "15")]
    players: usize,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many turns
    #[arg(long)]
    max_turns: Option<u64>,

    /// Rules file (JSON); missing fields use the defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the full event log as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => GameConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };
    if let Some(turns) = args.max_turns {
        config = config.with_max_turns(turns);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let tracker = Rc::new(RefCell::new(TurnTracker::new()));
    let log = Rc::new(RefCell::new(EventLog::new()));

    let mut game = Game::builder(args.players)
        .config(config)
        .seed(seed)
        .observer(Rc::clone(&tracker))
        .observer(Rc::clone(&log))
        .build()?;

    let result = game.play()?;

    if args.json {
        println!("{}", log.borrow().to_json()?);
    } else {
        println!("{result}");
        println!(
            "The game lasted {} turns (seed {seed}).",
            tracker.borrow().turns()
        );
    }

    Ok(())
}
