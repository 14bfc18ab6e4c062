use std::fmt;

use crate::player::Marker;

pub const SIZE: usize = 9;
pub const CENTER: usize = 5;

// Rows, then columns, then diagonals. Scan order decides which square
// `locate_threat` / `locate_advantage` report when several lines qualify.
#[rustfmt::skip]
pub const LINES: [[usize; 3]; 8] = [
  [1, 2, 3], [4, 5, 6], [7, 8, 9],
  [1, 4, 7], [2, 5, 8], [3, 6, 9],
  [1, 5, 9], [3, 5, 7],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
  #[default]
  Empty,
  Marked(Marker),
}

impl Cell {
  pub fn is_empty(&self) -> bool {
    *self == Cell::Empty
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
  #[error("square {position} is not on the board (1-9)")]
  OutOfRange { position: usize },

  #[error("square {position} is already marked")]
  Occupied { position: usize },
}

/// 3x3 grid addressed by squares 1..=9, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
  cells: [Cell; SIZE],
}

impl Board {
  // Create a new empty board
  pub fn new() -> Self {
    Self::default()
  }

  // Cell at a square, None when the square is off the board
  pub fn get(&self, position: usize) -> Option<Cell> {
    if (1..=SIZE).contains(&position) {
      Some(self.cells[position - 1])
    } else {
      None
    }
  }

  // Place a marker on an unmarked square
  pub fn place(&mut self, position: usize, marker: Marker) -> Result<(), MoveError> {
    match self.get(position) {
      None => Err(MoveError::OutOfRange { position }),
      Some(Cell::Marked(_)) => Err(MoveError::Occupied { position }),
      Some(Cell::Empty) => {
        self.cells[position - 1] = Cell::Marked(marker);
        Ok(())
      }
    }
  }

  /// Open squares in ascending order
  pub fn unmarked_positions(&self) -> Vec<usize> {
    (1..=SIZE).filter(|&p| self.cells[p - 1].is_empty()).collect()
  }

  pub fn is_full(&self) -> bool {
    self.unmarked_positions().is_empty()
  }

  /// Marker holding a complete line, first in scan order
  pub fn winner(&self) -> Option<Marker> {
    LINES.iter().find_map(|line| match self.line_cells(line) {
      [Cell::Marked(a), Cell::Marked(b), Cell::Marked(c)] if a == b && b == c => Some(a),
      _ => None,
    })
  }

  pub fn has_win(&self) -> bool {
    self.winner().is_some()
  }

  /// Square that blocks the first line where the opponent of `marker`
  /// has two marks and the third square is open.
  pub fn locate_threat(&self, marker: Marker) -> Option<usize> {
    self.locate_open_pair(marker.opponent())
  }

  pub fn has_threat(&self, marker: Marker) -> bool {
    self.locate_threat(marker).is_some()
  }

  /// Square that completes the first line where `marker` has two marks
  /// and the third square is open.
  pub fn locate_advantage(&self, marker: Marker) -> Option<usize> {
    self.locate_open_pair(marker)
  }

  pub fn has_advantage(&self, marker: Marker) -> bool {
    self.locate_advantage(marker).is_some()
  }

  pub fn is_center_open(&self) -> bool {
    self.cells[CENTER - 1].is_empty()
  }

  // Clear every square
  pub fn reset(&mut self) {
    self.cells = [Cell::Empty; SIZE];
  }

  fn line_cells(&self, line: &[usize; 3]) -> [Cell; 3] {
    line.map(|p| self.cells[p - 1])
  }

  fn locate_open_pair(&self, owner: Marker) -> Option<usize> {
    LINES.iter().find_map(|line| {
      let cells = self.line_cells(line);
      let owned = cells.iter().filter(|&&c| c == Cell::Marked(owner)).count();
      let open = cells.iter().position(Cell::is_empty);
      match (owned, open) {
        (2, Some(idx)) => Some(line[idx]),
        _ => None,
      }
    })
  }
}

impl fmt::Display for Board {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (row, squares) in self.cells.chunks(3).enumerate() {
      if row > 0 {
        writeln!(f, "-----+-----+-----")?;
      }
      writeln!(f, "     |     |")?;
      let symbols: Vec<String> = squares
        .iter()
        .map(|cell| match cell {
          Cell::Empty => " ".to_string(),
          Cell::Marked(m) => m.to_string(),
        })
        .collect();
      writeln!(f, "  {}  |  {}  |  {}", symbols[0], symbols[1], symbols[2])?;
      writeln!(f, "     |     |")?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use Marker::{O, X};

  fn board_with(marks: &[(usize, Marker)]) -> Board {
    let mut board = Board::new();
    for &(p, m) in marks {
      board.place(p, m).unwrap();
    }
    board
  }

  #[test]
  fn test_new_board_is_empty() {
    let board = Board::new();
    assert_eq!(board.unmarked_positions(), (1..=9).collect::<Vec<_>>());
    assert!(!board.is_full());
    assert!(board.is_center_open());
    assert_eq!(board.winner(), None);
  }

  #[test]
  fn test_place_removes_position() {
    let mut board = Board::new();
    board.place(4, X).unwrap();
    assert!(!board.unmarked_positions().contains(&4));
    assert_eq!(board.unmarked_positions().len(), 8);
    assert_eq!(board.get(4), Some(Cell::Marked(X)));
  }

  #[test]
  fn test_place_rejects_marked_square() {
    let mut board = board_with(&[(2, X)]);
    assert_eq!(board.place(2, O), Err(MoveError::Occupied { position: 2 }));
    assert_eq!(board.get(2), Some(Cell::Marked(X)));
  }

  #[test]
  fn test_place_rejects_out_of_range() {
    let mut board = Board::new();
    assert_eq!(board.place(0, X), Err(MoveError::OutOfRange { position: 0 }));
    assert_eq!(board.place(10, X), Err(MoveError::OutOfRange { position: 10 }));
    assert_eq!(board.get(10), None);
  }

  #[test]
  fn test_move_error_display() {
    let err = MoveError::Occupied { position: 5 };
    assert_eq!(err.to_string(), "square 5 is already marked");
  }

  #[test]
  fn test_every_line_wins() {
    for line in LINES {
      for marker in [X, O] {
        let marks: Vec<_> = line.iter().map(|&p| (p, marker)).collect();
        let board = board_with(&marks);
        assert_eq!(board.winner(), Some(marker), "line {:?}", line);
        assert!(board.has_win());
      }
    }
  }

  #[test]
  fn test_diagonal_winner() {
    let board = board_with(&[(1, X), (5, X), (9, X)]);
    assert_eq!(board.winner(), Some(X));
  }

  #[test]
  fn test_mixed_line_is_not_a_win() {
    let board = board_with(&[(1, X), (2, O), (3, X)]);
    assert_eq!(board.winner(), None);
    assert!(!board.has_win());
  }

  #[test]
  fn test_full_board_tie() {
    // X O X
    // X O O
    // O X X
    let board = board_with(&[(1, X), (2, O), (3, X), (4, X), (5, O), (6, O), (7, O), (8, X), (9, X)]);
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
    assert!(board.unmarked_positions().is_empty());
  }

  #[test]
  fn test_full_iff_no_unmarked() {
    let mut board = Board::new();
    for p in 1..=9 {
      assert_eq!(board.is_full(), board.unmarked_positions().is_empty());
      let marker = if p % 2 == 0 { O } else { X };
      board.place(p, marker).unwrap();
    }
    assert!(board.is_full());
  }

  #[test]
  fn test_reset_is_idempotent() {
    let mut board = board_with(&[(1, X), (5, O)]);
    board.reset();
    let once = board;
    board.reset();
    assert_eq!(board, once);
    assert_eq!(board, Board::new());
  }

  #[test]
  fn test_advantage_located() {
    let board = board_with(&[(1, O), (2, O), (5, X)]);
    assert!(board.has_advantage(O));
    assert_eq!(board.locate_advantage(O), Some(3));
    assert!(!board.has_advantage(X));
  }

  #[test]
  fn test_threat_is_opponent_pair() {
    let board = board_with(&[(1, X), (2, X), (5, O)]);
    assert!(board.has_threat(O));
    assert_eq!(board.locate_threat(O), Some(3));
    // X sees its own pair as an advantage, not a threat
    assert!(!board.has_threat(X));
    assert_eq!(board.locate_advantage(X), Some(3));
  }

  #[test]
  fn test_threat_is_symmetric() {
    let x_pair = board_with(&[(4, X), (6, X)]);
    let o_pair = board_with(&[(4, O), (6, O)]);
    assert_eq!(x_pair.locate_threat(O), Some(5));
    assert_eq!(o_pair.locate_threat(X), Some(5));
  }

  #[test]
  fn test_blocked_pair_is_not_a_threat() {
    let board = board_with(&[(1, X), (2, X), (3, O)]);
    assert!(!board.has_threat(O));
    assert!(!board.has_advantage(X));
  }

  #[test]
  fn test_scan_order_prefers_rows() {
    // pair on row 1,2,_ and on column 1,4,_
    let board = board_with(&[(1, X), (2, X), (4, X)]);
    assert_eq!(board.locate_advantage(X), Some(3));
    assert_eq!(board.locate_threat(O), Some(3));

    // column 3,6,_ comes before diagonal 3,_,7
    let board = board_with(&[(3, O), (6, O), (7, O)]);
    assert_eq!(board.locate_advantage(O), Some(9));
  }

  #[test]
  fn test_center_open() {
    let mut board = Board::new();
    assert!(board.is_center_open());
    board.place(CENTER, O).unwrap();
    assert!(!board.is_center_open());
  }

  #[test]
  fn test_display_grid() {
    let board = board_with(&[(1, X), (5, O)]);
    let text = board.to_string();
    assert!(text.contains("  X  |     |  "));
    assert!(text.contains("     |  O  |  "));
    assert_eq!(text.matches("-----+-----+-----").count(), 2);
  }
}
