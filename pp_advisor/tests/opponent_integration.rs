//! Integration tests for bot opponents.
//!
//! Tests cover:
//! - Catalog listing and lookup
//! - Dealing from a bot's hand range
//! - Bot decisions across full hands
//! - Style offsets changing how often bots continue

use pp_advisor::{
    Action, BotError, Card, OpponentCatalog, OpponentState, PokerEngine, Suit,
    bot::{AiOpponentProfile, BotStyle, SkillLevel, parse_hand_shorthand},
};
use rand::{SeedableRng, rngs::StdRng};
use std::sync::Arc;

fn profile(id: &str, style: BotStyle, frequencies: (f32, f32, f32)) -> AiOpponentProfile {
    let (bluff, call, raise) = frequencies;
    AiOpponentProfile {
        id: id.to_string(),
        name: id.to_uppercase(),
        skill_level: SkillLevel::Intermediate,
        style,
        bluff_frequency: bluff,
        call_frequency: call,
        raise_frequency: raise,
        hand_range: vec!["AA".to_string(), "72o".to_string(), "JTs".to_string()],
    }
}

fn cards(tokens: &[&str]) -> Vec<Card> {
    tokens.iter().map(|t| t.parse().unwrap()).collect()
}

#[test]
fn test_list_and_get_opponents() {
    let engine = PokerEngine::default();
    let ids: Vec<&str> = engine
        .list_opponents()
        .iter()
        .map(|profile| profile.id.as_str())
        .collect();
    assert_eq!(ids.len(), 5);

    for id in ids {
        assert_eq!(engine.get_opponent(id).unwrap().id, id);
    }

    assert!(matches!(
        engine.get_opponent("missing"),
        Err(BotError::UnknownOpponent(id)) if id == "missing"
    ));
}

#[test]
fn test_dealt_hands_come_from_range() {
    let engine = PokerEngine::default();
    let mut rng = StdRng::seed_from_u64(21);

    for profile in engine.list_opponents() {
        let range: Vec<Vec<Card>> = profile
            .hand_range
            .iter()
            .map(|hand| parse_hand_shorthand(hand))
            .collect();

        for _ in 0..25 {
            let hand = engine.deal_opponent_hand(profile, &mut rng).unwrap();
            assert!(range.contains(&hand.to_vec()), "{:?} not in range of {}", hand, profile.id);
        }
    }
}

#[test]
fn test_suited_shorthand_is_dealt_offsuit() {
    // Suits follow card position, so "s" and "o" hands deal the same cards
    assert_eq!(parse_hand_shorthand("JTs"), parse_hand_shorthand("JTo"));
    assert_eq!(
        parse_hand_shorthand("JTs"),
        vec![Card(11, Suit::Heart), Card(10, Suit::Diamond)]
    );
}

#[test]
fn test_custom_catalog() {
    let catalog = OpponentCatalog::new(vec![
        profile("one", BotStyle::Tight, (0.1, 0.2, 0.3)),
        profile("two", BotStyle::Loose, (0.3, 0.2, 0.1)),
    ])
    .unwrap();
    let engine = PokerEngine::new(Default::default(), catalog);
    assert_eq!(engine.list_opponents().len(), 2);
    assert_eq!(engine.get_opponent("two").unwrap().style, BotStyle::Loose);
}

#[test]
fn test_bot_plays_a_full_hand() {
    let engine = PokerEngine::default();
    let mut rng = StdRng::seed_from_u64(5);
    let board = cards(&["Kc", "8d", "3h", "Jd", "2s"]);

    for profile in engine.list_opponents() {
        let state = engine.seat_opponent(&profile.id, 800, &mut rng).unwrap();

        for street in [0, 3, 4, 5] {
            for (pot, bet) in [(30, 20), (200, 0), (400, 150)] {
                let decision =
                    engine.decide_opponent_action(&state, &board[..street], pot, bet, 20, &mut rng);
                assert!(decision.amount <= state.stack, "{} bet past its stack", profile.id);
                match decision.action {
                    Action::Check => assert_eq!(bet, 0),
                    Action::Call => assert_eq!(decision.amount, bet),
                    Action::Raise => {
                        assert!(decision.amount >= 20 && decision.amount < state.stack)
                    }
                    Action::AllIn => assert_eq!(decision.amount, state.stack),
                    Action::Fold => assert!(bet > 0),
                    Action::Bet => panic!("bots raise rather than bet"),
                }
            }
        }
    }
}

#[test]
fn test_style_changes_continue_rate() {
    let engine = PokerEngine::default();
    let mut rng = StdRng::seed_from_u64(17);
    let hole = cards(&["9h", "4d"]);

    // High card pre-flop reads 0.20 for tight bots and 0.40 for loose bots
    let continues = |style, rng: &mut StdRng| {
        let state = OpponentState {
            profile: Arc::new(profile("style", style, (0.0, 1.0, 0.0))),
            hole_cards: hole.clone(),
            stack: 1000,
        };
        (0..100)
            .filter(|_| {
                engine
                    .decide_opponent_action(&state, &[], 40, 20, 20, rng)
                    .action
                    != Action::Fold
            })
            .count()
    };

    assert_eq!(continues(BotStyle::Tight, &mut rng), 0);
    assert_eq!(continues(BotStyle::Loose, &mut rng), 100);
}

#[test]
fn test_bot_decisions_are_reproducible() {
    let engine = PokerEngine::default();
    let board = cards(&["Ah", "7c", "7d"]);

    let play = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        let state = engine.seat_opponent("pro_paul", 1200, &mut rng).unwrap();
        (0..30)
            .map(|_| engine.decide_opponent_action(&state, &board, 90, 30, 30, &mut rng))
            .collect::<Vec<_>>()
    };

    assert_eq!(play(4), play(4));
}

#[test]
fn test_empty_range_is_an_error() {
    let mut bot = profile("broken", BotStyle::Balanced, (0.1, 0.1, 0.1));
    bot.hand_range = vec!["Z".to_string(), "1".to_string()];
    let mut rng = StdRng::seed_from_u64(0);

    assert!(matches!(
        PokerEngine::default().deal_opponent_hand(&bot, &mut rng),
        Err(BotError::EmptyHandRange(id)) if id == "broken"
    ));
}
