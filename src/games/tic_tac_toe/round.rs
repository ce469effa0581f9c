//! One board of Tic-Tac-Toe, free of I/O.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use super::board::{Board, Line, Position};
use crate::core::{Actor, GameError, Outcome};

/// Where a round stands after the last placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    /// Waiting for this actor to mark a square.
    Turn(Actor),
    Won(Actor),
    Tied,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::Turn(actor) => write!(f, "{actor} to move"),
            RoundState::Won(actor) => write!(f, "won by {actor}"),
            RoundState::Tied => write!(f, "tied"),
        }
    }
}

/// Board plus whose turn it is.
#[derive(Clone, Debug)]
pub struct Round {
    board: Board,
    lines: Vec<Line>,
    state: RoundState,
}

impl Round {
    /// An empty board with `first` to move.
    pub fn new(first: Actor, lines: &[Line]) -> Self {
        Self {
            board: Board::new(),
            lines: lines.to_vec(),
            state: RoundState::Turn(first),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Whose turn it is, if the round is still going.
    pub fn to_move(&self) -> Option<Actor> {
        match self.state {
            RoundState::Turn(actor) => Some(actor),
            _ => None,
        }
    }

    /// Mark `position` for the actor to move, then check for an end.
    pub fn place(&mut self, position: Position) -> Result<RoundState, GameError> {
        let actor = self.to_move().ok_or_else(|| GameError::InvalidTransition {
            state: self.state.to_string(),
            event: format!("place {position}"),
        })?;

        self.board.place(position, actor)?;

        self.state = if let Some(winner) = self.board.detect_line_winner(&self.lines) {
            RoundState::Won(winner)
        } else if self.board.is_full() {
            RoundState::Tied
        } else {
            RoundState::Turn(actor.other())
        };
        debug!("{actor} took {position}: {}", self.state);
        Ok(self.state)
    }

    /// The result, once the round has ended.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            RoundState::Turn(_) => None,
            RoundState::Won(actor) => Some(Outcome::won_by(actor)),
            RoundState::Tied => Some(Outcome::Tie),
        }
    }
}
