//! Card-set classification and board-texture helpers.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use super::entities::{ACE, Card, HandCategory, Suit, Value};

/// Fewest cards that can form a made five-card hand.
pub const MIN_CLASSIFIABLE_CARDS: usize = 5;

/// Category of a card set plus the details strength scoring needs.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Classification {
    pub category: HandCategory,
    /// Top card of the best straight, 5 for the wheel.
    pub straight_high: Option<Value>,
    /// Suit holding five or more cards.
    pub flush_suit: Option<Suit>,
}

impl Classification {
    fn high_card() -> Self {
        Self {
            category: HandCategory::HighCard,
            straight_high: None,
            flush_suit: None,
        }
    }
}

/// Count of each card value.
pub fn value_counts(cards: &[Card]) -> HashMap<Value, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.0).or_insert(0) += 1;
    }
    counts
}

/// Count of each suit.
pub fn suit_counts(cards: &[Card]) -> HashMap<Suit, usize> {
    let mut counts = HashMap::new();
    for card in cards {
        *counts.entry(card.1).or_insert(0) += 1;
    }
    counts
}

/// Distinct values in ascending order, with an ace also contributing a
/// low value of 1 so that A-2-3-4-5 reads as a run.
fn distinct_values_ace_low(cards: impl IntoIterator<Item = Value>) -> Vec<Value> {
    let mut values: BTreeSet<Value> = BTreeSet::new();
    for value in cards {
        values.insert(value);
        if value == ACE {
            values.insert(1);
        }
    }
    values.into_iter().collect()
}

/// Consecutive runs over sorted distinct values as `(top, length)` pairs.
fn runs(values: &[Value]) -> Vec<(Value, usize)> {
    let mut runs = Vec::new();
    let mut iter = values.iter().copied();
    let Some(first) = iter.next() else {
        return runs;
    };
    let (mut top, mut len) = (first, 1);
    for value in iter {
        if value == top + 1 {
            len += 1;
        } else {
            runs.push((top, len));
            len = 1;
        }
        top = value;
    }
    runs.push((top, len));
    runs
}

/// Highest card of the best straight among `values`, if any.
///
/// Any five consecutive values qualify, as does the wheel {A,2,3,4,5},
/// which is reported with a top card of 5.
pub fn straight_high(values: impl IntoIterator<Item = Value>) -> Option<Value> {
    let distinct = distinct_values_ace_low(values);
    runs(&distinct)
        .into_iter()
        .filter(|&(_, len)| len >= 5)
        .map(|(top, _)| top)
        .max()
}

/// Length of the longest run of consecutive distinct values.
pub fn longest_run(cards: &[Card]) -> usize {
    let distinct = distinct_values_ace_low(cards.iter().map(|c| c.0));
    runs(&distinct)
        .into_iter()
        .map(|(_, len)| len)
        .max()
        .unwrap_or(0)
}

/// Four cards of one suit without a completed flush.
pub fn has_flush_draw(cards: &[Card]) -> bool {
    let counts = suit_counts(cards);
    counts.values().any(|&n| n == 4) && !counts.values().any(|&n| n >= 5)
}

/// Three or four consecutive distinct values without a completed straight.
///
/// A run of four is treated as open-ended, a run of three as a gutshot.
pub fn has_straight_draw(cards: &[Card]) -> bool {
    matches!(longest_run(cards), 3 | 4)
}

/// Classify a set of cards into exactly one hand category.
///
/// Fewer than five cards always classify as [`HandCategory::HighCard`],
/// which lets pre-flop analysis run on hole cards alone.
///
/// # Examples
///
/// ```
/// use pp_advisor::game::{entities::{Card, HandCategory}, functional::classify};
///
/// let cards: Vec<Card> = ["Ah", "Kh", "Qh", "Jh", "10h", "2c", "3d"]
///     .iter()
///     .map(|t| t.parse().unwrap())
///     .collect();
/// assert_eq!(classify(&cards).category, HandCategory::RoyalFlush);
/// ```
pub fn classify(cards: &[Card]) -> Classification {
    if cards.len() < MIN_CLASSIFIABLE_CARDS {
        return Classification::high_card();
    }

    let values = value_counts(cards);
    let suits = suit_counts(cards);

    let flush_suit = suits
        .iter()
        .filter(|&(_, &n)| n >= 5)
        .map(|(&suit, _)| suit)
        .next();
    let straight = straight_high(cards.iter().map(|c| c.0));

    // Any flush together with any straight; royal when the straight runs to the ace.
    if let (Some(_), Some(high)) = (flush_suit, straight) {
        let category = if high == ACE {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return Classification {
            category,
            straight_high: Some(high),
            flush_suit,
        };
    }

    let mut counts: Vec<usize> = values.values().copied().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    let first = counts.first().copied().unwrap_or(0);
    let second = counts.get(1).copied().unwrap_or(0);

    let category = match (first, second) {
        (n, _) if n >= 4 => HandCategory::FourOfAKind,
        (3, m) if m >= 2 => HandCategory::FullHouse,
        _ if flush_suit.is_some() => HandCategory::Flush,
        _ if straight.is_some() => HandCategory::Straight,
        (3, _) => HandCategory::ThreeOfAKind,
        (2, 2) => HandCategory::TwoPair,
        (2, _) => HandCategory::Pair,
        _ => HandCategory::HighCard,
    };

    Classification {
        category,
        straight_high: straight,
        flush_suit,
    }
}

/// Whether both hole cards are A/K/Q/J of different values.
pub fn is_unpaired_broadway(hole_cards: &[Card]) -> bool {
    match hole_cards {
        [a, b] => a.0 != b.0 && a.0 >= 11 && b.0 >= 11 && a.0 <= ACE && b.0 <= ACE,
        _ => false,
    }
}
