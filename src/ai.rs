use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, CENTER};
use crate::player::Marker;

/// Which rule picked the square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
  Center,
  Advantage,
  Block,
  Random,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
  pub position: usize,
  pub reason: Reason,
}

/// Greedy one-ply player. Rules are tried in order and the first one that
/// applies wins: take the center, complete an own pair, block an opposing
/// pair, otherwise pick any open square at random.
pub struct MoveSelector<R> {
  rng: R,
}

impl<R: Rng> MoveSelector<R> {
  pub fn new(rng: R) -> Self {
    Self { rng }
  }

  /// Square to mark for `marker`, None only when the board is full
  pub fn choose(&mut self, board: &Board, marker: Marker) -> Option<usize> {
    self.decide(board, marker).map(|d| d.position)
  }

  pub fn decide(&mut self, board: &Board, marker: Marker) -> Option<Decision> {
    let decision = if board.is_center_open() {
      Decision {
        position: CENTER,
        reason: Reason::Center,
      }
    } else if let Some(position) = board.locate_advantage(marker) {
      Decision {
        position,
        reason: Reason::Advantage,
      }
    } else if let Some(position) = board.locate_threat(marker) {
      Decision {
        position,
        reason: Reason::Block,
      }
    } else {
      let position = *board.unmarked_positions().choose(&mut self.rng)?;
      Decision {
        position,
        reason: Reason::Random,
      }
    };
    debug!("{} picks square {} ({:?})", marker, decision.position, decision.reason);
    Some(decision)
  }
}
