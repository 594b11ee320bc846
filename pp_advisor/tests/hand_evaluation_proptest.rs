/// Property-based tests for hand evaluation using proptest
///
/// These tests verify that classification, strength scoring and
/// confidence hold their contracts across randomly generated hands.
use pp_advisor::analysis::{
    Advisor, AnalysisRequest, SuggestionStyle,
    confidence::{MAX_CONFIDENCE, MIN_CONFIDENCE, estimate_confidence},
    policy::decide,
    strength::{base_strength, estimate_hand_strength},
};
use pp_advisor::game::{
    entities::{Card, HandCategory, SUITS},
    functional::{classify, suit_counts, value_counts},
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::BTreeSet;

// Strategy to generate a valid card (values 2-14, aces are 14)
fn card_strategy() -> impl Strategy<Value = Card> {
    (2u8..=14, 0usize..4).prop_map(|(value, suit_idx)| Card(value, SUITS[suit_idx]))
}

// Strategy to generate a vec of unique cards (no duplicates)
fn unique_cards_strategy(min: usize, max: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(card_strategy(), min..=max).prop_filter("Cards must be unique", |cards| {
        let set: BTreeSet<_> = cards.iter().collect();
        set.len() == cards.len()
    })
}

// Strategy to generate 7 unique cards (like Texas Hold'em: 2 hole + 5 board)
fn seven_card_hand_strategy() -> impl Strategy<Value = Vec<Card>> {
    unique_cards_strategy(7, 7)
}

// Hole cards plus a legal board size
fn hole_and_board_strategy() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    prop_oneof![Just(0usize), Just(3), Just(4), Just(5)].prop_flat_map(|board| {
        unique_cards_strategy(2 + board, 2 + board).prop_map(|mut cards| {
            let board = cards.split_off(2);
            (cards, board)
        })
    })
}

const CATEGORIES: [HandCategory; 10] = [
    HandCategory::HighCard,
    HandCategory::Pair,
    HandCategory::TwoPair,
    HandCategory::ThreeOfAKind,
    HandCategory::Straight,
    HandCategory::Flush,
    HandCategory::FullHouse,
    HandCategory::FourOfAKind,
    HandCategory::StraightFlush,
    HandCategory::RoyalFlush,
];

proptest! {
    #[test]
    fn test_classify_deterministic(cards in seven_card_hand_strategy()) {
        prop_assert_eq!(classify(&cards), classify(&cards));
    }

    #[test]
    fn test_classify_ignores_card_order(cards in seven_card_hand_strategy()) {
        let mut reversed = cards.clone();
        reversed.reverse();
        prop_assert_eq!(classify(&cards).category, classify(&reversed).category);
    }

    #[test]
    fn test_classify_agrees_with_counts(cards in seven_card_hand_strategy()) {
        let category = classify(&cards).category;
        let max_of_value = value_counts(&cards).values().copied().max().unwrap_or(0);
        let max_of_suit = suit_counts(&cards).values().copied().max().unwrap_or(0);

        if max_of_value >= 4 {
            prop_assert!(category >= HandCategory::FourOfAKind);
        }
        if max_of_suit >= 5 {
            prop_assert!(category >= HandCategory::Flush);
        }
        if category == HandCategory::HighCard {
            prop_assert_eq!(max_of_value, 1);
            prop_assert!(max_of_suit < 5);
        }
        if category == HandCategory::Pair {
            prop_assert_eq!(max_of_value, 2);
        }
        if matches!(
            category,
            HandCategory::Flush | HandCategory::StraightFlush | HandCategory::RoyalFlush
        ) {
            prop_assert!(max_of_suit >= 5);
        }
    }

    #[test]
    fn test_short_hands_are_high_card(cards in unique_cards_strategy(0, 4)) {
        prop_assert_eq!(classify(&cards).category, HandCategory::HighCard);
    }

    #[test]
    fn test_strength_in_range((hole, board) in hole_and_board_strategy()) {
        let strength = estimate_hand_strength(&hole, &board);
        prop_assert!((0.0..=1.0).contains(&strength), "strength {} out of range", strength);
    }

    #[test]
    fn test_confidence_in_range(
        strength in any::<f32>(),
        pot_odds in any::<f32>(),
        history_len in 0usize..10_000,
    ) {
        let confidence = estimate_confidence(strength, pot_odds, history_len);
        prop_assert!(
            (MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&confidence),
            "confidence {} out of range", confidence
        );
    }

    #[test]
    fn test_decision_never_exceeds_stack(
        strength in 0.0f32..=1.0,
        pot_odds in 0.0f32..20.0,
        current_bet in 0u32..5_000,
        stack in 0u32..10_000,
    ) {
        let decision = decide(strength, pot_odds, current_bet, stack);
        prop_assert!(decision.amount <= stack);
    }

    #[test]
    fn test_suggestions_respect_stack(
        (hole, board) in hole_and_board_strategy(),
        pot_size in 0u32..5_000,
        current_bet in 0u32..2_000,
        stack_size in 0u32..5_000,
        seed in any::<u64>(),
    ) {
        let advisor = Advisor::default();
        let request = AnalysisRequest {
            user_id: 1,
            session_id: uuid::Uuid::nil(),
            hole_cards: hole,
            community_cards: board,
            bet_history: vec![],
            pot_size,
            current_bet,
            stack_size,
        };
        let mut rng = StdRng::seed_from_u64(seed);

        for style in [SuggestionStyle::Gto, SuggestionStyle::Professional] {
            let suggestion = advisor.suggest(&request, style, &mut rng).unwrap();
            prop_assert!(suggestion.recommended_amount <= stack_size);
            prop_assert!((MIN_CONFIDENCE..=MAX_CONFIDENCE).contains(&suggestion.confidence));
        }
    }
}

#[test]
fn test_base_strength_monotone_in_category() {
    for pair in CATEGORIES.windows(2) {
        assert!(pair[0] < pair[1]);
        assert!(
            base_strength(pair[0]) < base_strength(pair[1]),
            "{} should score below {}",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn test_known_hands() {
    let cards = |tokens: &[&str]| -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    };

    assert_eq!(
        classify(&cards(&["Ah", "Kh", "Qh", "Jh", "10h", "2c", "3d"])).category,
        HandCategory::RoyalFlush
    );
    assert_eq!(
        classify(&cards(&["Ah", "2h", "3h", "4h", "5h"])).category,
        HandCategory::StraightFlush
    );
    let wheel = classify(&cards(&["Ac", "2d", "3h", "4s", "5c", "9h", "9d"]));
    assert_eq!(wheel.category, HandCategory::Straight);
    assert_eq!(wheel.straight_high, Some(5));
}
