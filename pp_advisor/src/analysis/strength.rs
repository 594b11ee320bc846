//! Continuous hand-strength scoring over the currently known cards.

use crate::game::{
    entities::{Card, HandCategory, TEN},
    functional::{Classification, classify, has_flush_draw, has_straight_draw, is_unpaired_broadway},
};

// === Hand Strength Base Values ===
// Scores are kept in whole points (hundredths of strength) so that sums
// land exactly on the decision thresholds.

/// Points in a strength of 1.0
pub const POINTS_PER_UNIT: i32 = 100;

/// Hand strength for high card
const STRENGTH_HIGH_CARD: i32 = 30;

/// Hand strength for one pair
const STRENGTH_PAIR: i32 = 50;

/// Hand strength for two pair
const STRENGTH_TWO_PAIR: i32 = 60;

/// Hand strength for three of a kind
const STRENGTH_THREE_OF_A_KIND: i32 = 70;

/// Hand strength for straight
const STRENGTH_STRAIGHT: i32 = 75;

/// Hand strength for flush
const STRENGTH_FLUSH: i32 = 80;

/// Hand strength for full house
const STRENGTH_FULL_HOUSE: i32 = 85;

/// Hand strength for four of a kind
const STRENGTH_FOUR_OF_A_KIND: i32 = 90;

/// Hand strength for straight flush
const STRENGTH_STRAIGHT_FLUSH: i32 = 95;

/// Hand strength for royal flush
const STRENGTH_ROYAL_FLUSH: i32 = 100;

// === Street Adjustments ===

const FLOP_DISCOUNT: i32 = 20;
const TURN_DISCOUNT: i32 = 10;

// === Playability Adjustments ===

const FLUSH_DRAW_BONUS: i32 = 5;
const STRAIGHT_DRAW_BONUS: i32 = 4;
const COMBO_DRAW_BONUS: i32 = 3;
const SMALL_POCKET_PAIR_BONUS: i32 = 2;
const UNPAIRED_BROADWAY_BONUS: i32 = 3;

fn to_strength(points: i32) -> f32 {
    points as f32 / POINTS_PER_UNIT as f32
}

/// Round a strength to the nearest whole point.
pub fn round_to_points(strength: f32) -> f32 {
    (strength * POINTS_PER_UNIT as f32).round() / POINTS_PER_UNIT as f32
}

fn base_points(category: HandCategory) -> i32 {
    match category {
        HandCategory::HighCard => STRENGTH_HIGH_CARD,
        HandCategory::Pair => STRENGTH_PAIR,
        HandCategory::TwoPair => STRENGTH_TWO_PAIR,
        HandCategory::ThreeOfAKind => STRENGTH_THREE_OF_A_KIND,
        HandCategory::Straight => STRENGTH_STRAIGHT,
        HandCategory::Flush => STRENGTH_FLUSH,
        HandCategory::FullHouse => STRENGTH_FULL_HOUSE,
        HandCategory::FourOfAKind => STRENGTH_FOUR_OF_A_KIND,
        HandCategory::StraightFlush => STRENGTH_STRAIGHT_FLUSH,
        HandCategory::RoyalFlush => STRENGTH_ROYAL_FLUSH,
    }
}

fn street_points(community_count: usize) -> i32 {
    match community_count {
        3 => -FLOP_DISCOUNT,
        4 => -TURN_DISCOUNT,
        _ => 0,
    }
}

fn playability_points(hole_cards: &[Card], community_cards: &[Card]) -> i32 {
    if community_cards.is_empty() {
        return 0;
    }

    let mut all_cards = Vec::with_capacity(hole_cards.len() + community_cards.len());
    all_cards.extend_from_slice(hole_cards);
    all_cards.extend_from_slice(community_cards);

    let flush_draw = has_flush_draw(&all_cards);
    let straight_draw = has_straight_draw(&all_cards);

    let mut bonus = 0;
    if flush_draw {
        bonus += FLUSH_DRAW_BONUS;
    }
    if straight_draw {
        bonus += STRAIGHT_DRAW_BONUS;
    }
    if flush_draw && straight_draw {
        bonus += COMBO_DRAW_BONUS;
    }

    if let [a, b] = hole_cards {
        if a.0 == b.0 && a.0 < TEN {
            bonus += SMALL_POCKET_PAIR_BONUS;
        }
    }

    if is_unpaired_broadway(hole_cards)
        && !hole_cards
            .iter()
            .any(|h| community_cards.iter().any(|c| c.0 == h.0))
    {
        bonus += UNPAIRED_BROADWAY_BONUS;
    }

    bonus
}

/// Baseline strength for a hand category.
pub fn base_strength(category: HandCategory) -> f32 {
    to_strength(base_points(category))
}

/// Discount applied for an incomplete board.
///
/// Flop hands lose 0.20 and turn hands 0.10; pre-flop, river and
/// malformed board sizes are left alone.
pub fn street_adjustment(community_count: usize) -> f32 {
    to_strength(street_points(community_count))
}

/// Bonus for draws and hole-card playability.
///
/// Only applies once at least one community card is out.
pub fn playability_adjustment(hole_cards: &[Card], community_cards: &[Card]) -> f32 {
    to_strength(playability_points(hole_cards, community_cards))
}

/// Hand strength with the classification it was derived from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScoredHand {
    pub classification: Classification,
    pub strength: f32,
}

/// Score hole cards against the board.
///
/// # Arguments
///
/// * `hole_cards` - Player's hole cards
/// * `community_cards` - Community cards dealt so far
///
/// # Returns
///
/// * `ScoredHand` - Classification and strength clamped to `[0.0, 1.0]`
pub fn score_hand(hole_cards: &[Card], community_cards: &[Card]) -> ScoredHand {
    let mut all_cards = Vec::with_capacity(hole_cards.len() + community_cards.len());
    all_cards.extend_from_slice(hole_cards);
    all_cards.extend_from_slice(community_cards);

    let classification = classify(&all_cards);
    let points = base_points(classification.category)
        + street_points(community_cards.len())
        + playability_points(hole_cards, community_cards);

    ScoredHand {
        classification,
        strength: to_strength(points.clamp(0, POINTS_PER_UNIT)),
    }
}

/// Estimate hand strength based on hole cards and board.
pub fn estimate_hand_strength(hole_cards: &[Card], community_cards: &[Card]) -> f32 {
    score_hand(hole_cards, community_cards).strength
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(tokens: &[&str]) -> Vec<Card> {
        tokens.iter().map(|t| t.parse().unwrap()).collect()
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_base_strength_is_monotonic() {
        let categories = [
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
        for pair in categories.windows(2) {
            assert!(base_strength(pair[0]) < base_strength(pair[1]));
        }
        assert_eq!(base_strength(HandCategory::RoyalFlush), 1.0);
    }

    #[test]
    fn test_preflop_uses_base_only() {
        // Pocket pair pre-flop: fewer than five cards, so high card base.
        let strength = estimate_hand_strength(&cards(&["7h", "7d"]), &[]);
        assert!(approx(strength, 0.30));
    }

    #[test]
    fn test_flop_discount() {
        // Trips on the flop, no draws: 0.70 - 0.20
        let strength = estimate_hand_strength(&cards(&["Kh", "Kd"]), &cards(&["Kc", "7s", "2d"]));
        assert!(approx(strength, 0.50), "got {strength}");
    }

    #[test]
    fn test_turn_discount() {
        let strength =
            estimate_hand_strength(&cards(&["Kh", "Kd"]), &cards(&["Kc", "7s", "2d", "4c"]));
        assert!(approx(strength, 0.60), "got {strength}");
    }

    #[test]
    fn test_discounted_scores_land_on_exact_values() {
        let two_pair_flop =
            estimate_hand_strength(&cards(&["Kh", "7d"]), &cards(&["Kc", "7s", "2d"]));
        assert_eq!(two_pair_flop, 0.40);

        let trips_turn =
            estimate_hand_strength(&cards(&["Kh", "Kd"]), &cards(&["Kc", "7s", "2d", "4c"]));
        assert_eq!(trips_turn, 0.60);

        let pair_flop =
            estimate_hand_strength(&cards(&["Kh", "Qd"]), &cards(&["Kc", "7s", "2d"]));
        assert_eq!(pair_flop, 0.30);
    }

    #[test]
    fn test_river_has_no_discount() {
        let strength = estimate_hand_strength(
            &cards(&["Ah", "Kh"]),
            &cards(&["Qh", "Jh", "10h", "2c", "3d"]),
        );
        assert_eq!(strength, 1.0);
    }

    #[test]
    fn test_flush_draw_bonus() {
        // High card, flush draw only: 0.30 - 0.20 + 0.05
        let strength =
            estimate_hand_strength(&cards(&["2h", "9h"]), &cards(&["Kh", "5h", "Jd"]));
        assert!(approx(strength, 0.15), "got {strength}");
    }

    #[test]
    fn test_combo_draw_bonus() {
        // 8h 9h on 6h 7h Kc: flush draw + open-ender + combo
        let strength =
            estimate_hand_strength(&cards(&["8h", "9h"]), &cards(&["6h", "7h", "Kc"]));
        assert!(approx(strength, 0.30 - 0.20 + 0.05 + 0.04 + 0.03), "got {strength}");
    }

    #[test]
    fn test_small_pocket_pair_bonus() {
        // Pair of fives on a dry flop: 0.50 - 0.20 + 0.02
        let strength =
            estimate_hand_strength(&cards(&["5h", "5d"]), &cards(&["Kc", "9s", "2d"]));
        assert!(approx(strength, 0.32), "got {strength}");
    }

    #[test]
    fn test_unpaired_broadway_bonus_only_without_board_pair() {
        // A-K on a low dry flop: 0.30 - 0.20 + 0.03
        let unpaired =
            estimate_hand_strength(&cards(&["Ah", "Kd"]), &cards(&["7c", "2s", "9d"]));
        assert!(approx(unpaired, 0.13), "got {unpaired}");

        // A-K with an ace on board: pair, no broadway bonus: 0.50 - 0.20
        let paired =
            estimate_hand_strength(&cards(&["Ah", "Kd"]), &cards(&["Ac", "2s", "7d"]));
        assert!(approx(paired, 0.30), "got {paired}");
    }

    #[test]
    fn test_strength_is_clamped() {
        let strength = estimate_hand_strength(&[], &[]);
        assert!((0.0..=1.0).contains(&strength));
    }
}
