use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

/// Names the computer picks from when none is configured
pub const COMPUTER_NAMES: [&str; 3] = ["R2D2", "Forty-Two", "C3PO"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerType {
  Human,
  Computer,
}

// Mark placed on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
  X,
  O,
}

impl Marker {
  // Get the opponent's marker
  pub fn opponent(&self) -> Marker {
    match self {
      Marker::X => Marker::O,
      Marker::O => Marker::X,
    }
  }

  // Single-character symbol used on screen
  pub fn symbol(&self) -> char {
    match self {
      Marker::X => 'X',
      Marker::O => 'O',
    }
  }

  /// Parse "x", "o", "X" or "O" (surrounding whitespace ignored)
  pub fn parse(input: &str) -> Option<Marker> {
    match input.trim() {
      "x" | "X" => Some(Marker::X),
      "o" | "O" => Some(Marker::O),
      _ => None,
    }
  }
}

impl fmt::Display for Marker {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.symbol())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
  pub name: String,
  pub marker: Marker,
  pub player_type: PlayerType,
}

impl Player {
  pub fn is_human(&self) -> bool {
    self.player_type == PlayerType::Human
  }
}

/// Match setup: the human keeps the marker they picked and the computer
/// gets the other one, so both players always hold distinct markers.
pub fn assign_players(human_name: String, human_marker: Marker, computer_name: String) -> (Player, Player) {
  let human = Player {
    name: human_name,
    marker: human_marker,
    player_type: PlayerType::Human,
  };
  let computer = Player {
    name: computer_name,
    marker: human_marker.opponent(),
    player_type: PlayerType::Computer,
  };
  (human, computer)
}

// Pick one of the stock computer names
pub fn random_computer_name<R: Rng + ?Sized>(rng: &mut R) -> String {
  COMPUTER_NAMES.choose(rng).copied().unwrap_or(COMPUTER_NAMES[0]).to_string()
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::rngs::StdRng;
  use rand::SeedableRng;

  #[test]
  fn test_opponent() {
    assert_eq!(Marker::X.opponent(), Marker::O);
    assert_eq!(Marker::O.opponent(), Marker::X);
  }

  #[test]
  fn test_parse_marker() {
    assert_eq!(Marker::parse("x"), Some(Marker::X));
    assert_eq!(Marker::parse(" O "), Some(Marker::O));
    assert_eq!(Marker::parse("xo"), None);
    assert_eq!(Marker::parse(""), None);
  }

  #[test]
  fn test_assign_players_distinct_markers() {
    for marker in [Marker::X, Marker::O] {
      let (human, computer) = assign_players("Ada".to_string(), marker, "C3PO".to_string());
      assert_eq!(human.marker, marker);
      assert_eq!(computer.marker, marker.opponent());
      assert!(human.is_human());
      assert!(!computer.is_human());
    }
  }

  #[test]
  fn test_random_computer_name() {
    let mut rng = StdRng::seed_from_u64(7);
    let name = random_computer_name(&mut rng);
    assert!(COMPUTER_NAMES.contains(&name.as_str()));
  }
}
