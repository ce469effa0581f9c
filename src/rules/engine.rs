//! Round-based game trait and the loops that drive it.
//!
//! Games implement `RoundGame` to define:
//! - How one round is played and what it resolves to
//! - What happens when a fresh match begins
//! - The match settings (grand-winner threshold, continue prompt)
//!
//! `run_match` and `run_session` own everything around the rounds:
//! scoreboard, grand-winner banner, "another round?", "play again?".

use std::fmt::Display;

use log::info;

use super::machine::{MatchEnd, MatchMachine, MatchState};
use super::scoreboard::ScoreTally;
use crate::console::{Console, LinePrompter};
use crate::core::{Actor, GameError, MatchConfig, Outcome};

/// Message keys every round game's table must provide.
pub const SESSION_MESSAGES: &[&str] = &[
    "game",
    "opponent",
    "greeting",
    "rules",
    "press_any",
    "scoreboard",
    "grand_winner_human",
    "grand_winner_computer",
    "another_round",
    "new_game",
    "new_game_prompt",
    "thanks",
];

/// A game made of independent rounds.
///
/// ## Implementation Notes
///
/// - `play_round`: build a fresh board or deck, run turns to the end,
///   return the outcome. Must not touch the score.
/// - `begin_match`: per-match setup (e.g. who moves first); default does nothing
pub trait RoundGame {
    /// Settings for the match loop.
    fn match_config(&self) -> MatchConfig;

    /// Called once at the start of every match.
    fn begin_match<P: LinePrompter>(&mut self, _console: &mut Console<P>) -> Result<(), GameError> {
        Ok(())
    }

    /// Play one complete round.
    fn play_round<P: LinePrompter>(&mut self, console: &mut Console<P>) -> Result<Outcome, GameError>;

    /// Extra placeholders for the rules text.
    fn rules_vars(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// How a match went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchSummary {
    pub tally: ScoreTally,
    pub end: MatchEnd,
}

/// Play one match to its end.
pub fn run_match<G, P>(game: &mut G, console: &mut Console<P>) -> Result<MatchSummary, GameError>
where
    G: RoundGame,
    P: LinePrompter,
{
    let mut machine = MatchMachine::new(game.match_config());
    game.begin_match(console)?;

    loop {
        match machine.state() {
            MatchState::AwaitingRound => {
                machine.start_round()?;
                let outcome = game.play_round(console)?;
                machine.finish_round(outcome)?;
                show_scoreboard(console, machine.tally(), machine.config().grand_winner)?;
            }
            MatchState::AwaitingContinue => {
                let keep_playing = console.confirm("another_round", |answer| answer != "q")?;
                machine.answer_continue(keep_playing)?;
            }
            MatchState::MatchOver(end) => {
                if let MatchEnd::GrandWinner(actor) = end {
                    announce_grand_winner(console, actor, machine.config().grand_winner)?;
                }
                info!("match over: {:?} after {} rounds", end, machine.tally().rounds_played());
                return Ok(MatchSummary { tally: *machine.tally(), end });
            }
            state @ MatchState::RoundInProgress => {
                return Err(GameError::InvalidTransition {
                    state: state.to_string(),
                    event: "resume match".to_string(),
                });
            }
        }
    }
}

/// Greet the player, then play matches until they stop.
///
/// Running out of input ends the session quietly.
pub fn run_session<G, P>(game: &mut G, console: &mut Console<P>) -> Result<Vec<MatchSummary>, GameError>
where
    G: RoundGame,
    P: LinePrompter,
{
    console.messages().require(SESSION_MESSAGES)?;

    let mut summaries = Vec::new();
    match play_matches(game, console, &mut summaries) {
        Err(e) if e.is_input_closed() => info!("input closed, leaving session"),
        other => other?,
    }

    console.clear()?;
    let game_name = console.messages().get("game").to_string();
    console.prompt_render("thanks", &[("game", &game_name)])?;
    Ok(summaries)
}

fn play_matches<G, P>(
    game: &mut G,
    console: &mut Console<P>,
    summaries: &mut Vec<MatchSummary>,
) -> Result<(), GameError>
where
    G: RoundGame,
    P: LinePrompter,
{
    intro(game, console)?;

    loop {
        summaries.push(run_match(game, console)?);

        console.blank_line()?;
        console.prompt_msg("new_game")?;
        if !console.confirm("new_game_prompt", |answer| answer == "y" || answer == "yes")? {
            return Ok(());
        }
    }
}

fn intro<G, P>(game: &G, console: &mut Console<P>) -> Result<(), GameError>
where
    G: RoundGame,
    P: LinePrompter,
{
    let game_name = console.messages().get("game").to_string();

    console.clear()?;
    let greeting = console.messages().render("greeting", &[("game", &game_name)]);
    console.print(&greeting)?;

    if console.read_answer()?.eq_ignore_ascii_case("help") {
        let threshold = game.match_config().grand_winner;
        let extra = game.rules_vars();
        let mut vars: Vec<(&str, &dyn Display)> = vec![("game", &game_name), ("threshold", &threshold)];
        vars.extend(extra.iter().map(|(name, value)| (*name, value as &dyn Display)));

        console.clear()?;
        let rules = console.messages().render("rules", &vars);
        console.print(&rules)?;
        console.pause("press_any")?;
    }
    Ok(())
}

fn show_scoreboard<P: LinePrompter>(
    console: &mut Console<P>,
    tally: &ScoreTally,
    threshold: u32,
) -> Result<(), GameError> {
    let opponent = console.messages().get("opponent").to_string();
    let board = console.messages().render(
        "scoreboard",
        &[
            ("wins", &tally.wins()),
            ("losses", &tally.losses()),
            ("ties", &tally.ties()),
            ("opponent", &opponent),
            ("threshold", &threshold),
        ],
    );
    console.print(&board)
}

fn announce_grand_winner<P: LinePrompter>(
    console: &mut Console<P>,
    winner: Actor,
    threshold: u32,
) -> Result<(), GameError> {
    let key = match winner {
        Actor::Human => "grand_winner_human",
        Actor::Computer => "grand_winner_computer",
    };
    let opponent = console.messages().get("opponent").to_lowercase();
    console.prompt_render(key, &[("threshold", &threshold), ("opponent", &opponent)])
}
