mod ai;
mod board;
mod cli;
mod game;
mod player;
mod prompt;
mod terminal_ui;

use std::fs::File;
use std::process::ExitCode;

use crate::cli::CliArgs;
use crate::game::{Game, GameError, MatchConfig};
use crate::terminal_ui::TerminalUI;
use clap::Parser;
use log::{error, info, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config, WriteLogger};

// File logger when asked for, otherwise env_logger on stderr (RUST_LOG, quiet by default)
fn init_logging(args: &CliArgs) -> Result<(), GameError> {
  match &args.log_file {
    Some(path) => {
      let file = File::create(path)?;
      if WriteLogger::init(LevelFilter::Debug, Config::default(), file).is_err() {
        eprintln!("Logger already initialized, {} stays empty", path.display());
      }
    }
    None => {
      env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }
  }
  Ok(())
}

fn run(args: CliArgs) -> Result<(), GameError> {
  // 1) Random source, seeded for reproducible games
  let rng = match args.seed {
    Some(seed) => StdRng::seed_from_u64(seed),
    None => StdRng::from_entropy(),
  };

  // 2) Whatever the flags leave open is asked for
  let config = MatchConfig {
    human_name: args.name,
    human_marker: args.marker.map(Into::into),
    computer_name: args.computer_name,
    first_move: args.first.map(Into::into),
    target_wins: args.target_wins,
  };

  // 3) Set up the players and play until the human quits
  let mut ui = TerminalUI::new(!args.no_color);
  let mut game = Game::setup(&mut ui, config, rng)?;
  game.run(&mut ui)
}

fn main() -> ExitCode {
  let args = CliArgs::parse();
  if let Err(err) = init_logging(&args) {
    eprintln!("Cannot open log file: {}", err);
    return ExitCode::FAILURE;
  }
  info!("Starting tictactoe_rust {}", env!("CARGO_PKG_VERSION"));

  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(GameError::InputClosed) => {
      info!("Input closed, leaving");
      println!();
      ExitCode::SUCCESS
    }
    Err(err) => {
      error!("{}", err);
      eprintln!("Error: {}", err);
      ExitCode::FAILURE
    }
  }
}
