use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Heart,
    Diamond,
    Club,
    Spade,
}

/// Suit rotation used when a hand is built from a shorthand string.
pub const SUITS: [Suit; 4] = [Suit::Heart, Suit::Diamond, Suit::Club, Suit::Spade];

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Heart => "♥",
            Self::Diamond => "♦",
            Self::Club => "♣",
            Self::Spade => "♠",
        };
        write!(f, "{repr}")
    }
}

impl Suit {
    fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'h' => Some(Self::Heart),
            'd' => Some(Self::Diamond),
            'c' => Some(Self::Club),
            's' => Some(Self::Spade),
            _ => None,
        }
    }
}

/// Placeholder for card values.
pub type Value = u8;

pub const ACE: Value = 14;
pub const KING: Value = 13;
pub const QUEEN: Value = 12;
pub const JACK: Value = 11;
pub const TEN: Value = 10;

/// A card is a tuple of a uInt8 value (two=2u8 ... ace=14u8) and a suit.
/// Aces only ever carry 14; ace-low straights are handled by the classifier.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub struct Card(pub Value, pub Suit);

impl Card {
    pub fn value(&self) -> Value {
        self.0
    }

    pub fn suit(&self) -> Suit {
        self.1
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let value = match self.0 {
            14 => "A",
            13 => "K",
            12 => "Q",
            11 => "J",
            v => &v.to_string(),
        };
        let repr = format!("{value}/{}", self.1);
        write!(f, "{repr:>4}")
    }
}

/// Errors raised while reading card tokens.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum CardParseError {
    #[error("invalid card token: {0:?}")]
    InvalidCardToken(String),
}

/// Parse a rank token: `2`..`9`, `10`/`T`, `J`, `Q`, `K`, `A`.
pub fn parse_value(token: &str) -> Result<Value, CardParseError> {
    let value = match token.to_ascii_uppercase().as_str() {
        "A" => ACE,
        "K" => KING,
        "Q" => QUEEN,
        "J" => JACK,
        "T" | "10" => TEN,
        s => match s.parse::<Value>() {
            Ok(v) if (2..=9).contains(&v) => v,
            _ => return Err(CardParseError::InvalidCardToken(token.to_string())),
        },
    };
    Ok(value)
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses tokens such as `Ah`, `10h`, `Td` or `2c`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || CardParseError::InvalidCardToken(s.to_string());
        let suit_char = s.chars().last().ok_or_else(invalid)?;
        let suit = Suit::from_char(suit_char).ok_or_else(invalid)?;
        let rank = &s[..s.len() - suit_char.len_utf8()];
        let value = parse_value(rank).map_err(|_| invalid())?;
        Ok(Card(value, suit))
    }
}

/// Type alias for whole chips. Bets, pots and stacks are whole numbers.
pub type Chips = u32;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
    RoyalFlush,
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::HighCard => "high card",
            Self::Pair => "pair",
            Self::TwoPair => "two pair",
            Self::ThreeOfAKind => "three of a kind",
            Self::Straight => "straight",
            Self::Flush => "flush",
            Self::FullHouse => "full house",
            Self::FourOfAKind => "four of a kind",
            Self::StraightFlush => "straight flush",
            Self::RoyalFlush => "royal flush",
        };
        write!(f, "{repr}")
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Bet => "bet",
            Self::Raise => "raise",
            Self::AllIn => "all-in",
        };
        write!(f, "{repr}")
    }
}

/// One entry of a hand's betting history.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct BetRecord {
    pub action: Action,
    #[serde(default)]
    pub amount: Chips,
}

impl BetRecord {
    pub fn new(action: Action, amount: Chips) -> Self {
        Self { action, amount }
    }
}

/// Where in the hand a decision is being made, derived from the
/// number of community cards.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionPoint {
    Preflop,
    Flop,
    Turn,
    River,
    Unknown,
}

impl DecisionPoint {
    pub fn from_community_count(count: usize) -> Self {
        match count {
            0 => Self::Preflop,
            3 => Self::Flop,
            4 => Self::Turn,
            5 => Self::River,
            _ => Self::Unknown,
        }
    }

    /// Betting rounds still to come after this one.
    pub fn streets_remaining(&self) -> u32 {
        match self {
            Self::Preflop => 3,
            Self::Flop => 2,
            Self::Turn => 1,
            Self::River | Self::Unknown => 0,
        }
    }
}

impl fmt::Display for DecisionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let repr = match self {
            Self::Preflop => "pre-flop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
            Self::Unknown => "unknown",
        };
        write!(f, "{repr}")
    }
}
