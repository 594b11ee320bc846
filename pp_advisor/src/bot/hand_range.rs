//! Starting-hand generation from a bot's hand range.
//!
//! Ranges are written in the usual shorthand (`AA`, `AKs`, `T9o`, `109s`).
//! Only the two rank tokens are read; suits are handed out by position
//! (first card hearts, second diamonds, then clubs and spades), so the
//! `s`/`o` suffix does not make the dealt hand suited or offsuit.

use log::warn;
use rand::{RngCore, seq::IndexedRandom};

use super::{
    errors::{BotError, BotResult},
    models::AiOpponentProfile,
};
use crate::game::entities::{Card, SUITS, parse_value};

/// Cards in a dealt starting hand
pub const HAND_SIZE: usize = 2;

/// Split the rank part of a shorthand entry into rank tokens.
///
/// `"10"` is a single token; everything after the second token (suitedness
/// markers, `+` ranges) is ignored.
fn rank_tokens(shorthand: &str) -> Vec<&str> {
    let mut tokens = Vec::with_capacity(HAND_SIZE);
    let mut rest = shorthand.trim();

    while tokens.len() < HAND_SIZE && !rest.is_empty() {
        let len = if rest.starts_with("10") {
            2
        } else {
            rest.chars().next().map_or(1, char::len_utf8)
        };
        let (token, tail) = rest.split_at(len);
        tokens.push(token);
        rest = tail;
    }

    tokens
}

/// Parse one shorthand entry into cards.
///
/// A token that is not a rank is logged and skipped, so the result can hold
/// fewer than two cards.
pub fn parse_hand_shorthand(shorthand: &str) -> Vec<Card> {
    rank_tokens(shorthand)
        .into_iter()
        .enumerate()
        .filter_map(|(position, token)| match parse_value(token) {
            Ok(value) => Some(Card(value, SUITS[position % SUITS.len()])),
            Err(error) => {
                warn!("skipping '{token}' in hand '{shorthand}': {error}");
                None
            }
        })
        .collect()
}

/// Parse an entry into a full starting hand, if it yields two cards.
pub fn parse_starting_hand(shorthand: &str) -> Option<[Card; HAND_SIZE]> {
    match parse_hand_shorthand(shorthand).as_slice() {
        [first, second] => Some([*first, *second]),
        _ => None,
    }
}

/// Deal a starting hand for a bot.
///
/// Picks uniformly among the entries of the bot's range that parse into two
/// cards.
///
/// # Errors
///
/// Returns [`BotError::EmptyHandRange`] when no entry in the range is usable.
pub fn deal_opponent_hand(
    profile: &AiOpponentProfile,
    rng: &mut dyn RngCore,
) -> BotResult<[Card; HAND_SIZE]> {
    let usable: Vec<[Card; HAND_SIZE]> = profile
        .hand_range
        .iter()
        .filter_map(|entry| parse_starting_hand(entry))
        .collect();

    usable
        .choose(rng)
        .copied()
        .ok_or_else(|| BotError::EmptyHandRange(profile.id.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bot::models::{BotStyle, SkillLevel};
    use crate::game::entities::Suit;
    use rand::{SeedableRng, rngs::StdRng};

    fn profile(range: &[&str]) -> AiOpponentProfile {
        AiOpponentProfile {
            id: "range_bot".to_string(),
            name: "Range Bot".to_string(),
            skill_level: SkillLevel::Intermediate,
            style: BotStyle::Balanced,
            bluff_frequency: 0.1,
            call_frequency: 0.5,
            raise_frequency: 0.3,
            hand_range: range.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_pocket_pair() {
        assert_eq!(
            parse_hand_shorthand("AA"),
            vec![Card(14, Suit::Heart), Card(14, Suit::Diamond)]
        );
    }

    #[test]
    fn test_suited_marker_does_not_make_hand_suited() {
        // Suits come from card position only
        let hand = parse_hand_shorthand("AKs");
        assert_eq!(hand, vec![Card(14, Suit::Heart), Card(13, Suit::Diamond)]);
        assert_ne!(hand[0].suit(), hand[1].suit());
    }

    #[test]
    fn test_ten_forms() {
        assert_eq!(
            parse_hand_shorthand("T9o"),
            vec![Card(10, Suit::Heart), Card(9, Suit::Diamond)]
        );
        assert_eq!(
            parse_hand_shorthand("109s"),
            vec![Card(10, Suit::Heart), Card(9, Suit::Diamond)]
        );
        assert_eq!(
            parse_hand_shorthand("J10"),
            vec![Card(11, Suit::Heart), Card(10, Suit::Diamond)]
        );
    }

    #[test]
    fn test_bad_token_is_skipped() {
        assert_eq!(parse_hand_shorthand("XK"), vec![Card(13, Suit::Diamond)]);
        assert_eq!(parse_starting_hand("XK"), None);
        assert!(parse_hand_shorthand("").is_empty());
    }

    #[test]
    fn test_deal_from_single_entry() {
        let mut rng = StdRng::seed_from_u64(3);
        let hand = deal_opponent_hand(&profile(&["QQ"]), &mut rng).unwrap();
        assert_eq!(hand, [Card(12, Suit::Heart), Card(12, Suit::Diamond)]);
    }

    #[test]
    fn test_deal_skips_unusable_entries() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let hand = deal_opponent_hand(&profile(&["ZZ", "7", "KQo"]), &mut rng).unwrap();
            assert_eq!(hand, [Card(13, Suit::Heart), Card(12, Suit::Diamond)]);
        }
    }

    #[test]
    fn test_deal_covers_range() {
        let mut rng = StdRng::seed_from_u64(9);
        let range = profile(&["AA", "KK"]);
        let aces = (0..200)
            .filter(|_| deal_opponent_hand(&range, &mut rng).unwrap()[0].value() == 14)
            .count();
        assert!((50..150).contains(&aces), "dealt aces {aces} times out of 200");
    }

    #[test]
    fn test_deal_with_no_usable_entry() {
        let mut rng = StdRng::seed_from_u64(3);
        let err = deal_opponent_hand(&profile(&["??", "Q"]), &mut rng).unwrap_err();
        assert!(matches!(err, BotError::EmptyHandRange(id) if id == "range_bot"));
    }
}
