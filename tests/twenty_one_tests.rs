//! Twenty-One integration tests: deck, rounds and a full session.

use parlor::console::{Console, IoPrompter};
use parlor::games::twenty_one::{
    hand_total, is_bust, Card, DealerTurn, Deck, PlayerTurn, Rank, Round, Suit, TurnChoice, TwentyOne,
    TwentyOneConfig,
};
use parlor::rules::{run_session, MatchEnd};
use parlor::{GameError, GameRng, Outcome};

fn card(rank: Rank) -> Card {
    Card::new(rank, Suit::Spades)
}

/// A deck that deals `order` front to back.
fn stacked(order: &[Rank]) -> Deck {
    Deck::from_cards(order.iter().rev().map(|&rank| card(rank)).collect())
}

// =============================================================================
// Deck and Hand Tests
// =============================================================================

#[test]
fn test_two_deals_leave_48_cards() {
    let mut deck = Deck::shuffled(&mut GameRng::new(1));
    assert_eq!(deck.len(), Deck::SIZE);

    deck.deal(2).unwrap();
    deck.deal(2).unwrap();
    assert_eq!(deck.len(), 48);
}

#[test]
fn test_every_card_appears_once() {
    let deck = Deck::shuffled(&mut GameRng::new(2));
    let mut cards = deck.cards().to_vec();
    cards.sort_by_key(|c| (c.suit as u8, c.rank as u8));
    cards.dedup();
    assert_eq!(cards.len(), 52);
}

#[test]
fn test_rounds_get_independent_decks() {
    let mut rng = GameRng::new(3);
    let first = Deck::shuffled(&mut rng.fork());
    let second = Deck::shuffled(&mut rng.fork());
    assert_ne!(first.cards(), second.cards());
}

#[test]
fn test_overdraw_fails() {
    let mut deck = stacked(&[Rank::Two]);
    let err = deck.deal(2).unwrap_err();
    assert!(matches!(err, GameError::EmptyDeck { requested: 2, remaining: 1 }));
}

#[test]
fn test_ace_totals() {
    assert_eq!(hand_total(&[card(Rank::Ten), card(Rank::Ace)]), 21);
    assert!(!is_bust(21));
    assert_eq!(hand_total(&[card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)]), 21);
    assert_eq!(hand_total(&[card(Rank::King), card(Rank::Queen), card(Rank::Ace)]), 21);
    assert_eq!(hand_total(&[card(Rank::King), card(Rank::Queen), card(Rank::Two)]), 22);
}

// =============================================================================
// Round Tests
// =============================================================================

#[test]
fn test_player_bust_skips_dealer() {
    // player 10 6, dealer 9 8, then the player draws a king
    let deck = stacked(&[Rank::Ten, Rank::Six, Rank::Nine, Rank::Eight, Rank::King]);
    let mut round = Round::deal(deck, 2, 17).unwrap();

    assert_eq!(round.play(TurnChoice::Hit).unwrap(), PlayerTurn::Busted);
    assert_eq!(round.outcome(), Some(Outcome::Loss));
    assert!(round.dealer_step().is_err());
}

#[test]
fn test_dealer_draws_to_floor() {
    // player 10 9, dealer 5 6, dealer draws 3 then 4 and stands on 18
    let deck = stacked(&[Rank::Ten, Rank::Nine, Rank::Five, Rank::Six, Rank::Three, Rank::Four]);
    let mut round = Round::deal(deck, 2, 17).unwrap();

    round.play(TurnChoice::Stand).unwrap();
    assert_eq!(round.play_dealer().unwrap(), DealerTurn::Standing);
    assert_eq!(round.dealer().total(), 18);
    assert_eq!(round.dealer().len(), 4);
    assert_eq!(round.outcome(), Some(Outcome::Win));
}

#[test]
fn test_dealer_bust_is_a_win() {
    // player 10 2, dealer 10 6, dealer draws a queen
    let deck = stacked(&[Rank::Ten, Rank::Two, Rank::Ten, Rank::Six, Rank::Queen]);
    let mut round = Round::deal(deck, 2, 17).unwrap();

    round.play(TurnChoice::Stand).unwrap();
    assert_eq!(round.play_dealer().unwrap(), DealerTurn::Busted);
    assert_eq!(round.outcome(), Some(Outcome::Win));
}

#[test]
fn test_equal_totals_tie() {
    let deck = stacked(&[Rank::Ten, Rank::Eight, Rank::Jack, Rank::Eight]);
    let mut round = Round::deal(deck, 2, 17).unwrap();

    round.play(TurnChoice::Stand).unwrap();
    round.play_dealer().unwrap();
    assert_eq!(round.outcome(), Some(Outcome::Tie));
}

#[test]
fn test_dealer_up_card_is_first_dealt() {
    let deck = stacked(&[Rank::Two, Rank::Three, Rank::Queen, Rank::Four]);
    let round = Round::deal(deck, 2, 17).unwrap();
    assert_eq!(round.dealer_up_card(), Some(card(Rank::Queen)));
}

// =============================================================================
// Session Tests
// =============================================================================

#[test]
fn test_session_plays_to_grand_winner() {
    // Stay every round and keep going until someone reaches five wins
    let mut script = String::from("\n");
    for _ in 0..200 {
        script.push_str("s\n\n");
    }

    let mut game = TwentyOne::new(TwentyOneConfig::default(), GameRng::new(7));
    let mut console = Console::new(
        IoPrompter::new(script.as_bytes(), Vec::new()),
        TwentyOne::messages().unwrap(),
    );

    let summaries = run_session(&mut game, &mut console).unwrap();
    let output = String::from_utf8(console.into_prompter().into_writer()).unwrap();

    assert_eq!(summaries.len(), 1);
    let summary = summaries[0];
    assert!(matches!(summary.end, MatchEnd::GrandWinner(_)));
    assert!(summary.tally.wins() == 5 || summary.tally.losses() == 5);
    assert!(output.contains("grand winner"));
    assert!(output.ends_with("=> Thank you for playing Twenty-One! Bye!\n"));
}

#[test]
fn test_quit_after_first_round() {
    let mut game = TwentyOne::new(TwentyOneConfig::default(), GameRng::new(8));
    let mut console = Console::new(
        IoPrompter::new("\ns\nq\nn\n".as_bytes(), Vec::new()),
        TwentyOne::messages().unwrap(),
    );

    let summaries = run_session(&mut game, &mut console).unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].end, MatchEnd::Declined);
    assert_eq!(summaries[0].tally.rounds_played(), 1);
}
