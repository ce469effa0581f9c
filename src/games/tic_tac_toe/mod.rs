//! Tic-Tac-Toe against a heuristic computer.
//!
//! Three in a row wins the round; a full board with no line is a tie.
//! First to three round wins is the grand winner.

mod board;
mod game;
mod round;
mod strategy;

pub use board::{Board, Cell, Line, Position, STANDARD_LINES};
pub use game::{joinor, render_board, TicTacToe, TicTacToeConfig};
pub use round::{Round, RoundState};
pub use strategy::{at_risk_square, choose_move, ComputerMove, MoveReason};
