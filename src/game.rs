use crate::ai::{Decision, MoveSelector};
use crate::board::{Board, MoveError};
use crate::player::{assign_players, random_computer_name, Marker, Player};
use crate::prompt;
use crate::terminal_ui::{Console, Frame};
use log::{debug, info, warn};
use rand::Rng;

pub const DEFAULT_TARGET_WINS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
  #[error("invalid move: {0}")]
  InvalidMove(#[from] MoveError),

  #[error("no move expected in the current state")]
  NotAwaitingMove,

  #[error("input closed")]
  InputClosed,

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),
}

/// Who opens each round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstMove {
  Human,
  Computer,
  /// Human opens odd rounds, computer even ones
  Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
  Won(Marker),
  Tie,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
  AwaitingMove(Marker),
  RoundOver(RoundOutcome),
  MatchOver(Marker),
}

/// Round wins in the current match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
  pub human: u32,
  pub computer: u32,
}

/// Match settings, anything left None is asked for on the console
#[derive(Debug, Clone)]
pub struct MatchConfig {
  pub human_name: Option<String>,
  pub human_marker: Option<Marker>,
  pub computer_name: Option<String>,
  pub first_move: Option<FirstMove>,
  pub target_wins: u32,
}

impl Default for MatchConfig {
  fn default() -> Self {
    Self {
      human_name: None,
      human_marker: None,
      computer_name: None,
      first_move: None,
      target_wins: DEFAULT_TARGET_WINS,
    }
  }
}

pub struct Game<R> {
  pub board: Board,

  pub human: Player,
  pub computer: Player,

  pub selector: MoveSelector<R>,

  pub first_move: FirstMove,
  pub target_wins: u32,
  pub score: Score,
  pub round: u32,
  pub state: MatchState,
  pub last_move: Option<usize>,
}

impl<R: Rng> Game<R> {
  pub fn new(human: Player, computer: Player, first_move: FirstMove, target_wins: u32, rng: R) -> Self {
    if target_wins == 0 {
      warn!("A match needs at least one round win, playing to 1");
    }
    let mut game = Self {
      board: Board::new(),
      human,
      computer,
      selector: MoveSelector::new(rng),
      first_move,
      target_wins: target_wins.max(1),
      score: Score::default(),
      round: 1,
      state: MatchState::RoundOver(RoundOutcome::Tie),
      last_move: None,
    };
    game.start_match();
    game
  }

  /// Fill in whatever `config` leaves open by asking on the console, then
  /// hand out the markers.
  pub fn setup<C: Console + ?Sized>(console: &mut C, config: MatchConfig, mut rng: R) -> Result<Self, GameError> {
    console.clear()?;
    let human_name = match config.human_name {
      Some(name) => name,
      None => prompt::ask_name(console)?,
    };
    let human_marker = match config.human_marker {
      Some(marker) => marker,
      None => prompt::ask_marker(console)?,
    };
    let computer_name = config.computer_name.unwrap_or_else(|| random_computer_name(&mut rng));
    let first_move = match config.first_move {
      Some(first_move) => first_move,
      None => {
        let human_first = prompt::ask_yes_no(
          console,
          "Would you like to go first? (Y/N)",
          "Please provide a valid input (Y or N)!",
        )?;
        if human_first {
          FirstMove::Human
        } else {
          FirstMove::Computer
        }
      }
    };

    let (human, computer) = assign_players(human_name, human_marker, computer_name);
    info!(
      "{} plays {}, {} plays {}, first move: {:?}",
      human.name, human.marker, computer.name, computer.marker, first_move
    );
    Ok(Self::new(human, computer, first_move, config.target_wins, rng))
  }

  // Scores back to zero, first round on an empty board
  pub fn start_match(&mut self) {
    self.score = Score::default();
    self.round = 1;
    self.reset_board();
    info!("Match started, first to {} round wins", self.target_wins);
  }

  pub fn start_round(&mut self) {
    self.round += 1;
    self.reset_board();
  }

  fn reset_board(&mut self) {
    self.board.reset();
    self.last_move = None;
    self.state = MatchState::AwaitingMove(self.opening_marker());
    debug!("Round {} starts with {}", self.round, self.opening_marker());
  }

  /// Marker that moves first in the current round
  pub fn opening_marker(&self) -> Marker {
    match self.first_move {
      FirstMove::Human => self.human.marker,
      FirstMove::Computer => self.computer.marker,
      FirstMove::Alternate if self.round % 2 == 1 => self.human.marker,
      FirstMove::Alternate => self.computer.marker,
    }
  }

  pub fn active_player(&self) -> Option<&Player> {
    match self.state {
      MatchState::AwaitingMove(marker) => Some(self.player(marker)),
      _ => None,
    }
  }

  pub fn player(&self, marker: Marker) -> &Player {
    if marker == self.human.marker {
      &self.human
    } else {
      &self.computer
    }
  }

  pub fn champion(&self) -> Option<&Player> {
    match self.state {
      MatchState::MatchOver(marker) => Some(self.player(marker)),
      _ => None,
    }
  }

  /// Mark `position` for the active player and advance the state: win, then
  /// full board, otherwise the other player is up.
  pub fn apply_move(&mut self, position: usize) -> Result<MatchState, GameError> {
    let marker = match self.state {
      MatchState::AwaitingMove(marker) => marker,
      _ => return Err(GameError::NotAwaitingMove),
    };
    self.board.place(position, marker)?;
    self.last_move = Some(position);
    debug!("{} marks square {}\n{}", marker, position, self.board);

    self.state = if let Some(winner) = self.board.winner() {
      let wins = if winner == self.human.marker {
        self.score.human += 1;
        self.score.human
      } else {
        self.score.computer += 1;
        self.score.computer
      };
      info!("Round {} won by {} ({} wins)", self.round, self.player(winner).name, wins);
      if wins >= self.target_wins {
        info!("Match won by {}", self.player(winner).name);
        MatchState::MatchOver(winner)
      } else {
        MatchState::RoundOver(RoundOutcome::Won(winner))
      }
    } else if self.board.is_full() {
      info!("Round {} is a tie", self.round);
      MatchState::RoundOver(RoundOutcome::Tie)
    } else {
      MatchState::AwaitingMove(marker.opponent())
    };
    Ok(self.state)
  }

  /// Let the selector pick and play a square for the computer
  pub fn computer_move(&mut self) -> Result<Decision, GameError> {
    match self.state {
      MatchState::AwaitingMove(marker) if marker == self.computer.marker => {}
      _ => return Err(GameError::NotAwaitingMove),
    }
    let decision = self
      .selector
      .decide(&self.board, self.computer.marker)
      .ok_or(GameError::NotAwaitingMove)?;
    info!("{} chose square {} ({:?})", self.computer.name, decision.position, decision.reason);
    self.apply_move(decision.position)?;
    Ok(decision)
  }

  fn frame(&self) -> Frame<'_> {
    Frame {
      board: &self.board,
      human: &self.human,
      computer: &self.computer,
      score: &self.score,
      last_move: self.last_move,
    }
  }

  fn redraw<C: Console + ?Sized>(&self, console: &mut C) -> Result<(), GameError> {
    console.clear()?;
    console.draw(&self.frame())?;
    Ok(())
  }

  /// Play turns until the round is decided
  pub fn play_round<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<RoundOutcome, GameError> {
    loop {
      self.redraw(console)?;
      match self.state {
        MatchState::RoundOver(outcome) => return Ok(outcome),
        MatchState::MatchOver(champion) => return Ok(RoundOutcome::Won(champion)),
        MatchState::AwaitingMove(_) => {}
      }

      if self.active_player().is_some_and(Player::is_human) {
        let square = prompt::ask_square(console, &self.board)?;
        self.apply_move(square)?;
      } else {
        self.computer_move()?;
      }
    }
  }

  fn show_result<C: Console + ?Sized>(&self, console: &mut C, outcome: RoundOutcome) -> Result<(), GameError> {
    let msg = match outcome {
      RoundOutcome::Won(marker) if marker == self.human.marker => "You won!".to_string(),
      RoundOutcome::Won(_) => format!("{} won!", self.computer.name),
      RoundOutcome::Tie => "It's a tie!".to_string(),
    };
    console.show_message(&msg)?;
    Ok(())
  }

  /// Rounds until someone reaches the target, then report the champion
  pub fn play_match<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
    self.start_match();
    loop {
      let outcome = self.play_round(console)?;
      self.show_result(console, outcome)?;
      if let Some(champion) = self.champion() {
        let msg = format!("{} won it all!", champion.name);
        self.redraw(console)?;
        console.show_message(&msg)?;
        return Ok(());
      }
      prompt::wait_for_enter(console)?;
      self.start_round();
    }
  }

  /// Matches until the human declines a replay
  pub fn run<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<(), GameError> {
    loop {
      self.play_match(console)?;
      let again = prompt::ask_yes_no(console, "Would you like to play again? (y/n)", "Sorry, must be y or n")?;
      if !again {
        break;
      }
      console.show_message("Let's play again!")?;
    }
    console.show_message("Thanks for playing Tic Tac Toe! Goodbye!")?;
    Ok(())
  }
}
