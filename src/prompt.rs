//! Prompts that keep asking until the answer is well-formed.

use crate::board::Board;
use crate::game::GameError;
use crate::player::Marker;
use crate::terminal_ui::Console;

// Read one line, end of input ends the game
fn read<C: Console + ?Sized>(console: &mut C) -> Result<String, GameError> {
  console.read_line()?.ok_or(GameError::InputClosed)
}

/// Ask `question` until `parse` accepts the answer, printing `complaint` after each rejected one
pub fn ask<C, T, F>(console: &mut C, question: &str, complaint: &str, mut parse: F) -> Result<T, GameError>
where
  C: Console + ?Sized,
  F: FnMut(&str) -> Option<T>,
{
  console.show_message(question)?;
  loop {
    let answer = read(console)?;
    if let Some(value) = parse(&answer) {
      return Ok(value);
    }
    console.show_message(complaint)?;
    console.show_message(question)?;
  }
}

pub fn ask_name<C: Console + ?Sized>(console: &mut C) -> Result<String, GameError> {
  ask(console, "Please choose your name", "Please provide a valid name", |answer| {
    let name = answer.trim();
    (!name.is_empty()).then(|| name.to_string())
  })
}

pub fn ask_marker<C: Console + ?Sized>(console: &mut C) -> Result<Marker, GameError> {
  console.show_message(" ")?;
  ask(console, "Please choose your marker (X or O)", "Must provide valid input!", Marker::parse)
}

pub fn ask_yes_no<C: Console + ?Sized>(console: &mut C, question: &str, complaint: &str) -> Result<bool, GameError> {
  ask(console, question, complaint, |answer| match answer.trim().to_lowercase().as_str() {
    "y" => Some(true),
    "n" => Some(false),
    _ => None,
  })
}

/// Ask the human for an open square
pub fn ask_square<C: Console + ?Sized>(console: &mut C, board: &Board) -> Result<usize, GameError> {
  let open = board.unmarked_positions();
  let question = format!("Choose a square ({}): ", joinor(&open, ", ", "or"));
  console.show_message(&question)?;
  loop {
    let answer = read(console)?;
    match answer.trim().parse::<usize>() {
      Ok(square) if open.contains(&square) => return Ok(square),
      _ => console.show_message("Sorry, that's not a valid choice.")?,
    }
  }
}

pub fn wait_for_enter<C: Console + ?Sized>(console: &mut C) -> Result<(), GameError> {
  console.show_message("Press Enter to continue to the next round:")?;
  while !read(console)?.is_empty() {
    console.show_message("Sorry, you must ONLY press Enter")?;
  }
  Ok(())
}

/// "1, 2, or 3" style list
pub fn joinor(items: &[usize], separator: &str, last_word: &str) -> String {
  match items {
    [] => String::new(),
    [only] => only.to_string(),
    [first, second] => format!("{} {} {}", first, last_word, second),
    [rest @ .., last] => {
      let head: Vec<String> = rest.iter().map(|i| i.to_string()).collect();
      format!("{}{}{} {}", head.join(separator), separator, last_word, last)
    }
  }
}
