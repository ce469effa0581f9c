//! The 3x3 board.
//!
//! Squares are numbered like a phone keypad read top to bottom:
//!
//! ```text
//!  1 | 2 | 3
//! ---+---+---
//!  4 | 5 | 6
//! ---+---+---
//!  7 | 8 | 9
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Actor, GameError};

/// A square number, always in 1..=9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    pub const CENTER: Position = Position(5);

    /// Validate a square number.
    pub fn new(square: u8) -> Result<Self, GameError> {
        match square {
            1..=9 => Ok(Self(square)),
            _ => Err(GameError::PositionOutOfRange(square)),
        }
    }

    /// Parse a typed square number.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        input.trim().parse::<u8>().ok().and_then(|n| Self::new(n).ok())
    }

    /// All nine squares in order.
    pub fn all() -> impl Iterator<Item = Position> {
        (1..=9).map(Position)
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    const fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u8> for Position {
    type Error = GameError;

    fn try_from(square: u8) -> Result<Self, Self::Error> {
        Self::new(square)
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> u8 {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Three squares that win when held by one side.
pub type Line = [Position; 3];

const fn line(a: u8, b: u8, c: u8) -> Line {
    [Position(a), Position(b), Position(c)]
}

/// Rows, then columns, then diagonals.
pub const STANDARD_LINES: [Line; 8] = [
    line(1, 2, 3),
    line(4, 5, 6),
    line(7, 8, 9),
    line(1, 4, 7),
    line(2, 5, 8),
    line(3, 6, 9),
    line(1, 5, 9),
    line(3, 5, 7),
];

/// Contents of one square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Actor),
}

/// Nine squares. A marked square can never be re-marked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.index()]
    }

    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position) == Cell::Empty
    }

    /// Unmarked squares in ascending order.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|&p| self.is_open(p)).collect()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Mark `position` for `actor`.
    pub fn place(&mut self, position: Position, actor: Actor) -> Result<(), GameError> {
        let cell = &mut self.cells[position.index()];
        if *cell != Cell::Empty {
            return Err(GameError::OccupiedPosition(position.get()));
        }
        *cell = Cell::Marked(actor);
        Ok(())
    }

    /// How many squares of `line` hold `cell`.
    #[must_use]
    pub fn count(&self, line: &Line, cell: Cell) -> usize {
        line.iter().filter(|&&p| self.cell(p) == cell).count()
    }

    /// The side holding every square of some line, checked in line order.
    #[must_use]
    pub fn detect_line_winner(&self, lines: &[Line]) -> Option<Actor> {
        lines.iter().find_map(|line| match self.cell(line[0]) {
            Cell::Marked(actor) if self.count(line, Cell::Marked(actor)) == 3 => Some(actor),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(n: u8) -> Position {
        Position::new(n).unwrap()
    }

    fn board_with(human: &[u8], computer: &[u8]) -> Board {
        let mut board = Board::new();
        for &n in human {
            board.place(pos(n), Actor::Human).unwrap();
        }
        for &n in computer {
            board.place(pos(n), Actor::Computer).unwrap();
        }
        board
    }

    #[test]
    fn test_position_range() {
        assert!(Position::new(1).is_ok());
        assert!(Position::new(9).is_ok());
        assert!(matches!(Position::new(0), Err(GameError::PositionOutOfRange(0))));
        assert!(matches!(Position::new(10), Err(GameError::PositionOutOfRange(10))));
    }

    #[test]
    fn test_position_parse() {
        assert_eq!(Position::parse("5"), Some(Position::CENTER));
        assert_eq!(Position::parse(" 9 "), Some(pos(9)));
        assert_eq!(Position::parse("0"), None);
        assert_eq!(Position::parse("12"), None);
        assert_eq!(Position::parse("five"), None);
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn test_position_serde_validates() {
        assert_eq!(serde_json::to_string(&pos(4)).unwrap(), "4");
        assert_eq!(serde_json::from_str::<Position>("7").unwrap(), pos(7));
        assert!(serde_json::from_str::<Position>("11").is_err());
    }

    #[test]
    fn test_empty_positions() {
        let board = board_with(&[1, 5], &[9]);
        let open: Vec<u8> = board.empty_positions().into_iter().map(Position::get).collect();
        assert_eq!(open, vec![2, 3, 4, 6, 7, 8]);
        assert_eq!(Board::new().empty_positions().len(), 9);
    }

    #[test]
    fn test_place_never_overwrites() {
        let mut board = Board::new();
        board.place(pos(3), Actor::Human).unwrap();

        let err = board.place(pos(3), Actor::Computer).unwrap_err();
        assert!(matches!(err, GameError::OccupiedPosition(3)));
        assert_eq!(board.cell(pos(3)), Cell::Marked(Actor::Human));
    }

    #[test]
    fn test_detect_line_winner() {
        assert_eq!(Board::new().detect_line_winner(&STANDARD_LINES), None);

        let row = board_with(&[4, 5, 6], &[1, 9]);
        assert_eq!(row.detect_line_winner(&STANDARD_LINES), Some(Actor::Human));

        let column = board_with(&[1, 5], &[3, 6, 9]);
        assert_eq!(column.detect_line_winner(&STANDARD_LINES), Some(Actor::Computer));

        let diagonal = board_with(&[3, 5, 7], &[1, 2]);
        assert_eq!(diagonal.detect_line_winner(&STANDARD_LINES), Some(Actor::Human));

        let two_in_a_row = board_with(&[1, 2], &[5]);
        assert_eq!(two_in_a_row.detect_line_winner(&STANDARD_LINES), None);
    }

    #[test]
    fn test_full_board_without_line_is_no_winner() {
        // X O X
        // X O O
        // O X X
        let board = board_with(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        assert!(board.is_full());
        assert_eq!(board.detect_line_winner(&STANDARD_LINES), None);
    }

    #[test]
    fn test_standard_lines_cover_each_square() {
        for p in Position::all() {
            let lines = STANDARD_LINES.iter().filter(|line| line.contains(&p)).count();
            let expected = match p.get() {
                5 => 4,
                1 | 3 | 7 | 9 => 3,
                _ => 2,
            };
            assert_eq!(lines, expected, "square {p}");
        }
    }
}
