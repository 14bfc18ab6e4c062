use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::game::{FirstMove, DEFAULT_TARGET_WINS};
use crate::player::Marker;

/// Marker for the human player
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum MarkerArg {
  X,
  O,
}

impl From<MarkerArg> for Marker {
  fn from(arg: MarkerArg) -> Self {
    match arg {
      MarkerArg::X => Marker::X,
      MarkerArg::O => Marker::O,
    }
  }
}

/// Who opens each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstMoveArg {
  /// Human moves first every round
  Human,
  /// Computer moves first every round
  Computer,
  /// Take turns opening, human first
  Alternate,
}

impl From<FirstMoveArg> for FirstMove {
  fn from(arg: FirstMoveArg) -> Self {
    match arg {
      FirstMoveArg::Human => FirstMove::Human,
      FirstMoveArg::Computer => FirstMove::Computer,
      FirstMoveArg::Alternate => FirstMove::Alternate,
    }
  }
}

/// Tic Tac Toe against the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rust", version)]
pub struct CliArgs {
  /// Your name (asked for when missing)
  #[arg(long)]
  pub name: Option<String>,

  /// Your marker (asked for when missing)
  #[arg(long, value_enum, ignore_case = true)]
  pub marker: Option<MarkerArg>,

  /// Computer name (random when missing)
  #[arg(long)]
  pub computer_name: Option<String>,

  /// First mover policy (asked for when missing)
  #[arg(long, value_enum)]
  pub first: Option<FirstMoveArg>,

  /// Round wins needed to take the match
  #[arg(long, default_value_t = DEFAULT_TARGET_WINS, value_parser = clap::value_parser!(u32).range(1..))]
  pub target_wins: u32,

  /// Seed for the computer's random moves
  #[arg(long)]
  pub seed: Option<u64>,

  /// Write a debug log of every move to this file
  #[arg(long)]
  pub log_file: Option<PathBuf>,

  /// Plain output without colors
  #[arg(long)]
  pub no_color: bool,
}
