//! Tic-Tac-Toe played at the terminal.

use std::num::NonZeroU32;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::board::{Board, Cell, Line, Position, STANDARD_LINES};
use super::round::{Round, RoundState};
use super::strategy::choose_move;
use crate::console::{Console, LinePrompter, Messages};
use crate::core::config::threshold;
use crate::core::{Actor, ActorMap, GameError, GameRng, MatchConfig, Outcome};
use crate::rules::RoundGame;

const MESSAGES: &str = include_str!("../../../messages/tic_tac_toe.json");

/// Tic-Tac-Toe settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeConfig {
    /// Lines that win, in the order the computer scans them.
    pub lines: Vec<Line>,

    /// Round wins that end a match.
    pub grand_winner: NonZeroU32,

    /// Mark drawn for each side.
    pub marks: ActorMap<char>,
}

impl Default for TicTacToeConfig {
    fn default() -> Self {
        Self {
            lines: STANDARD_LINES.to_vec(),
            grand_winner: threshold(3),
            marks: ActorMap::new('X', 'O'),
        }
    }
}

impl TicTacToeConfig {
    #[must_use]
    pub fn with_grand_winner(mut self, rounds: NonZeroU32) -> Self {
        self.grand_winner = rounds;
        self
    }
}

/// The user against the computer, first move alternating between rounds.
#[derive(Clone, Debug)]
pub struct TicTacToe {
    config: TicTacToeConfig,
    rng: GameRng,
    starter: Actor,
}

impl TicTacToe {
    pub fn new(config: TicTacToeConfig, rng: GameRng) -> Self {
        Self {
            config,
            rng,
            starter: Actor::Human,
        }
    }

    /// Shared messages with the Tic-Tac-Toe table laid over them.
    pub fn messages() -> Result<Messages, GameError> {
        Ok(Messages::common()?.merge(Messages::from_json(MESSAGES)?))
    }

    pub fn config(&self) -> &TicTacToeConfig {
        &self.config
    }

    /// Who moves first in the next round.
    pub fn starter(&self) -> Actor {
        self.starter
    }

    fn show_board<P: LinePrompter>(&self, console: &mut Console<P>, board: &Board) -> Result<(), GameError> {
        console.clear()?;
        let marks = &self.config.marks;
        console.prompt_render(
            "marks",
            &[("user_mark", &marks[Actor::Human]), ("computer_mark", &marks[Actor::Computer])],
        )?;
        for line in render_board(board, marks) {
            console.print(&line)?;
        }
        console.blank_line()
    }

    fn human_move<P: LinePrompter>(&self, round: &mut Round, console: &mut Console<P>) -> Result<(), GameError> {
        let open: Vec<String> = round.board().empty_positions().iter().map(ToString::to_string).collect();
        let squares = joinor(&open, ", ", "or");
        let question = console.messages().render("choose_square", &[("squares", &squares)]);
        let retry = console.messages().get("sorry").to_string();

        let board = round.board();
        let position = console.ask(&question, &retry, |answer| {
            Position::parse(answer).filter(|&p| board.is_open(p))
        })?;
        round.place(position)?;
        Ok(())
    }

    fn computer_move<P: LinePrompter>(&mut self, round: &mut Round, console: &mut Console<P>) -> Result<(), GameError> {
        let choice = choose_move(round.board(), round.lines(), &mut self.rng).ok_or_else(|| {
            GameError::InvalidTransition {
                state: round.state().to_string(),
                event: "computer move on a full board".to_string(),
            }
        })?;
        debug!("computer picks {} ({:?})", choice.position, choice.reason);

        round.place(choice.position)?;
        console.prompt_render("computer_moved", &[("square", &choice.position)])
    }
}

impl RoundGame for TicTacToe {
    fn match_config(&self) -> MatchConfig {
        MatchConfig::new(self.config.grand_winner.get())
    }

    fn begin_match<P: LinePrompter>(&mut self, console: &mut Console<P>) -> Result<(), GameError> {
        console.clear()?;
        console.prompt_msg("which_player")?;
        self.starter = console.ask_msg("enter_player", "sorry", parse_first_mover)?;
        debug!("{} moves first", self.starter);
        Ok(())
    }

    fn play_round<P: LinePrompter>(&mut self, console: &mut Console<P>) -> Result<Outcome, GameError> {
        let mut round = Round::new(self.starter, &self.config.lines);

        while let Some(actor) = round.to_move() {
            match actor {
                Actor::Human => {
                    self.show_board(console, round.board())?;
                    self.human_move(&mut round, console)?;
                }
                Actor::Computer => self.computer_move(&mut round, console)?,
            }
        }

        self.show_board(console, round.board())?;
        console.prompt_msg(match round.state() {
            RoundState::Won(Actor::Human) => "user_wins",
            RoundState::Won(Actor::Computer) => "computer_wins",
            _ => "tie",
        })?;

        let outcome = round.outcome().ok_or_else(|| GameError::InvalidTransition {
            state: round.state().to_string(),
            event: "resolve round".to_string(),
        })?;
        info!("round over: {} -> {:?}", round.state(), outcome);

        self.starter = self.starter.other();
        Ok(outcome)
    }
}

/// Accept `u`/`user` or `c`/`computer`, any case.
fn parse_first_mover(answer: &str) -> Option<Actor> {
    match answer.to_lowercase().as_str() {
        "u" | "user" => Some(Actor::Human),
        "c" | "computer" => Some(Actor::Computer),
        _ => None,
    }
}

/// Join items for a sentence: "1", "1 or 2", "1, 2, or 3".
///
/// ```
/// use parlor::games::tic_tac_toe::joinor;
///
/// assert_eq!(joinor(&["1", "2", "3"], ", ", "or"), "1, 2, or 3");
/// assert_eq!(joinor(&["4", "9"], ", ", "or"), "4 or 9");
/// ```
pub fn joinor<S: AsRef<str>>(items: &[S], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} {word} {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{}{delimiter}{word} {}", head.join(delimiter), last.as_ref())
        }
    }
}

/// Draw the board as text rows, empty squares showing their number.
pub fn render_board(board: &Board, marks: &ActorMap<char>) -> Vec<String> {
    let symbol = |p: Position| match board.cell(p) {
        Cell::Empty => char::from(b'0' + p.get()),
        Cell::Marked(actor) => marks[actor],
    };

    let squares: Vec<Position> = Position::all().collect();
    let mut rows = Vec::with_capacity(5);
    for (i, row) in squares.chunks(3).enumerate() {
        if i > 0 {
            rows.push("---+---+---".to_string());
        }
        let cells: Vec<String> = row.iter().map(|&p| format!(" {} ", symbol(p))).collect();
        rows.push(cells.join("|"));
    }
    rows
}
