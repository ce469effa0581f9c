//! The computer's move choice.
//!
//! Priorities, first match wins:
//! 1. Offense: complete a line holding two computer marks
//! 2. Center: take square 5 if open
//! 3. Defense: block a line holding two user marks
//! 4. Random open square
//!
//! Within 1 and 3 the first qualifying line, in line order, decides.

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Line, Position};
use crate::core::{Actor, GameRng};

/// Which rule picked the square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveReason {
    Offense,
    Center,
    Defense,
    Random,
}

/// A chosen square and why.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerMove {
    pub position: Position,
    pub reason: MoveReason,
}

/// The open square of a line where `actor` holds the other two.
#[must_use]
pub fn at_risk_square(board: &Board, line: &Line, actor: Actor) -> Option<Position> {
    if board.count(line, Cell::Marked(actor)) != 2 {
        return None;
    }
    line.iter().copied().find(|&p| board.is_open(p))
}

fn first_at_risk(board: &Board, lines: &[Line], actor: Actor) -> Option<Position> {
    lines.iter().find_map(|line| at_risk_square(board, line, actor))
}

/// Pick the computer's next square. `None` only when the board is full.
pub fn choose_move(board: &Board, lines: &[Line], rng: &mut GameRng) -> Option<ComputerMove> {
    let pick = |position, reason| Some(ComputerMove { position, reason });

    if let Some(position) = first_at_risk(board, lines, Actor::Computer) {
        return pick(position, MoveReason::Offense);
    }
    if board.is_open(Position::CENTER) {
        return pick(Position::CENTER, MoveReason::Center);
    }
    if let Some(position) = first_at_risk(board, lines, Actor::Human) {
        return pick(position, MoveReason::Defense);
    }

    let open = board.empty_positions();
    let position = *rng.choose(&open)?;
    pick(position, MoveReason::Random)
}
