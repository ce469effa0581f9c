//! Session-level tests: RPSLS, the mortgage calculator, message overlays,
//! and a custom round game driven through the shared match loop.

use parlor::console::{Console, IoPrompter, LinePrompter, Messages};
use parlor::games::mortgage;
use parlor::games::rpsls::{Rpsls, RpslsConfig};
use parlor::rules::{run_match, run_session, MatchEnd, RoundGame, SESSION_MESSAGES};
use parlor::{Actor, GameError, GameRng, MatchConfig, Outcome};

type TestConsole = Console<IoPrompter<&'static [u8], Vec<u8>>>;

fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_prompter().into_writer()).unwrap()
}

/// Plays back a fixed list of outcomes.
struct Scripted {
    outcomes: Vec<Outcome>,
    config: MatchConfig,
    played: usize,
}

impl Scripted {
    fn new(outcomes: &[Outcome], config: MatchConfig) -> Self {
        Self {
            outcomes: outcomes.to_vec(),
            config,
            played: 0,
        }
    }
}

impl RoundGame for Scripted {
    fn match_config(&self) -> MatchConfig {
        self.config
    }

    fn play_round<P: LinePrompter>(&mut self, _console: &mut Console<P>) -> Result<Outcome, GameError> {
        let outcome = self.outcomes[self.played];
        self.played += 1;
        Ok(outcome)
    }
}

fn scripted_console(input: &'static str) -> TestConsole {
    let messages = Messages::common()
        .unwrap()
        .merge([("game", "Scripted"), ("opponent", "Robot"), ("rules", "No rules.")].into_iter().collect());
    Console::new(IoPrompter::new(input.as_bytes(), Vec::new()), messages)
}

// =============================================================================
// Match Loop Tests
// =============================================================================

#[test]
fn test_three_straight_wins_end_match() {
    let mut game = Scripted::new(&[Outcome::Win; 5], MatchConfig::new(3));
    let mut console = scripted_console("\n\n\n\n");

    let summary = run_match(&mut game, &mut console).unwrap();

    assert_eq!(game.played, 3);
    assert_eq!(summary.end, MatchEnd::GrandWinner(Actor::Human));
    assert_eq!(summary.tally.wins(), 3);
    // Two continue prompts, none after the winning round
    assert_eq!(output(console).matches("next round").count(), 2);
}

#[test]
fn test_banner_names_the_computer() {
    let mut game = Scripted::new(&[Outcome::Loss, Outcome::Tie, Outcome::Loss], MatchConfig::new(2));
    let mut console = scripted_console("\n\n\n");

    let summary = run_match(&mut game, &mut console).unwrap();

    assert_eq!(summary.end, MatchEnd::GrandWinner(Actor::Computer));
    assert_eq!(summary.tally.rounds_played(), 3);
    assert!(output(console).contains("Sorry, the robot has won 2 rounds and is the grand winner."));
}

#[test]
fn test_no_continue_prompt_when_disabled() {
    let config = MatchConfig::new(2).without_continue_prompt();
    let mut game = Scripted::new(&[Outcome::Tie, Outcome::Win, Outcome::Win], config);
    let mut console = scripted_console("");

    let summary = run_match(&mut game, &mut console).unwrap();

    assert_eq!(summary.tally.rounds_played(), 3);
    assert!(!output(console).contains("next round"));
}

#[test]
fn test_session_rejects_partial_table() {
    let mut game = Scripted::new(&[Outcome::Win], MatchConfig::new(1));
    let messages: Messages = [("game", "Bare")].into_iter().collect();
    let mut console = Console::new(IoPrompter::new("".as_bytes(), Vec::new()), messages);

    let err = run_session(&mut game, &mut console).unwrap_err();
    assert!(matches!(err, GameError::MissingMessage(_)));
}

#[test]
fn test_common_messages_need_game_specific_keys() {
    let err = Messages::common().unwrap().require(SESSION_MESSAGES).unwrap_err();
    assert!(matches!(err, GameError::MissingMessage(key) if key == "game" || key == "opponent" || key == "rules"));
}

// =============================================================================
// RPSLS Tests
// =============================================================================

#[test]
fn test_rpsls_session_runs_to_three() {
    let mut script = String::from("\n");
    for _ in 0..100 {
        script.push_str("rock\n");
    }

    let mut game = Rpsls::new(RpslsConfig::default(), GameRng::new(4));
    let mut console = Console::new(IoPrompter::new(script.as_bytes(), Vec::new()), Rpsls::messages().unwrap());

    let summaries = run_session(&mut game, &mut console).unwrap();
    let output = String::from_utf8(console.into_prompter().into_writer()).unwrap();

    assert_eq!(summaries.len(), 1);
    let tally = summaries[0].tally;
    assert!(tally.wins() == 3 || tally.losses() == 3);
    assert_eq!(output.matches("You chose: ROCK").count() as u32, tally.rounds_played());
    assert!(!output.contains("next round"));
}

// =============================================================================
// Mortgage Tests
// =============================================================================

#[test]
fn test_mortgage_with_overlay() {
    let overlay = Messages::from_json(r#"{ "result": "Pay ${payment} a month" }"#).unwrap();
    let messages = mortgage::messages().unwrap().merge(overlay);
    let mut console = Console::new(IoPrompter::new("100000\n6\n30\n0\nn\n".as_bytes(), Vec::new()), messages);

    let loans = mortgage::run(&mut console).unwrap();

    assert_eq!(loans.len(), 1);
    assert!(output(console).contains("=> Pay $599.55 a month"));
}

#[test]
fn test_mortgage_rejects_incomplete_table() {
    let messages: Messages = [("welcome", "Hi")].into_iter().collect();
    let mut console = Console::new(IoPrompter::new("".as_bytes(), Vec::new()), messages);

    assert!(matches!(mortgage::run(&mut console), Err(GameError::MissingMessage(_))));
}
