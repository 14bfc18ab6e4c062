use crossterm::{
  cursor::MoveTo,
  execute, queue,
  style::{Color, Print, ResetColor, SetForegroundColor},
  terminal::{Clear, ClearType},
};

use crate::board::{Board, Cell};
use crate::game::Score;
use crate::player::Player;
use std::io::{stdin, stdout, BufRead, Result as IoResult, Write};

/// Everything one screen of the game shows
pub struct Frame<'a> {
  pub board: &'a Board,
  pub human: &'a Player,
  pub computer: &'a Player,
  pub score: &'a Score,
  pub last_move: Option<usize>,
}

/// Line-based console the game talks to. The game never touches the
/// terminal directly, so it can be driven headless.
pub trait Console {
  /// Wipe the screen
  fn clear(&mut self) -> IoResult<()>;

  /// Draw the header, scores and board
  fn draw(&mut self, frame: &Frame<'_>) -> IoResult<()>;

  /// Print one line of text
  fn show_message(&mut self, msg: &str) -> IoResult<()>;

  /// Read one line with the trailing newline removed, None at end of input
  fn read_line(&mut self) -> IoResult<Option<String>>;
}

// Terminal console on stdin/stdout
pub struct TerminalUI {
  color: bool,
}

impl TerminalUI {
  /// Human marker color, RGB value
  const HUMAN_COLOR: Color = Color::Rgb { r: 120, g: 200, b: 255 };
  /// Computer marker color, RGB value
  const COMPUTER_COLOR: Color = Color::Rgb { r: 255, g: 200, b: 120 };
  /// "Light red" for the last marker, RGB value
  const LAST_MOVE_COLOR: Color = Color::Rgb { r: 255, g: 140, b: 140 };

  pub fn new(color: bool) -> Self {
    Self { color }
  }

  fn draw_cell(&self, out: &mut impl Write, frame: &Frame<'_>, position: usize) -> IoResult<()> {
    let cell = frame.board.get(position).unwrap_or_default();
    let marker = match cell {
      Cell::Empty => return queue!(out, Print(" ")),
      Cell::Marked(m) => m,
    };

    let color = if frame.last_move == Some(position) {
      Self::LAST_MOVE_COLOR
    } else if marker == frame.human.marker {
      Self::HUMAN_COLOR
    } else {
      Self::COMPUTER_COLOR
    };

    if self.color {
      queue!(out, SetForegroundColor(color), Print(marker), ResetColor)
    } else {
      queue!(out, Print(marker))
    }
  }
}

impl Console for TerminalUI {
  fn clear(&mut self) -> IoResult<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))
  }

  fn draw(&mut self, frame: &Frame<'_>) -> IoResult<()> {
    let mut out = stdout().lock();

    writeln!(out, "Welcome to Tic Tac Toe!")?;
    writeln!(out)?;
    for line in header_lines(frame) {
      writeln!(out, "{}", line)?;
    }

    for row in 0..3 {
      if row > 0 {
        writeln!(out, "-----+-----+-----")?;
      }
      writeln!(out, "     |     |")?;
      for col in 0..3 {
        if col > 0 {
          queue!(out, Print("  |"))?;
        }
        queue!(out, Print("  "))?;
        self.draw_cell(&mut out, frame, row * 3 + col + 1)?;
      }
      writeln!(out)?;
      writeln!(out, "     |     |")?;
    }
    writeln!(out)?;
    out.flush()
  }

  fn show_message(&mut self, msg: &str) -> IoResult<()> {
    let mut out = stdout().lock();
    writeln!(out, "{}", msg)?;
    out.flush()
  }

  fn read_line(&mut self) -> IoResult<Option<String>> {
    let mut line = String::new();
    if stdin().lock().read_line(&mut line)? == 0 {
      return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
  }
}

/// Marker reminder and both scores, right-aligned to 70 columns
pub fn header_lines(frame: &Frame<'_>) -> Vec<String> {
  vec![
    format!(
      "You're an {}. {} is an {}.",
      frame.human.marker, frame.computer.name, frame.computer.marker
    ),
    format!("{:>70}", format!("{} => Rounds won: {}", frame.human.name, frame.score.human)),
    format!("{:>70}", format!("{} => Rounds won: {}", frame.computer.name, frame.score.computer)),
  ]
}
