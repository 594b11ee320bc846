//! Analysis request and result models.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::profiler::OpponentArchetype;
use crate::game::entities::{Action, BetRecord, Card, Chips, DecisionPoint, HandCategory};

/// User identifier
pub type UserId = i64;

/// Game session identifier
pub type SessionId = Uuid;

/// A recommended action with its size and reasoning.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Decision {
    pub action: Action,
    /// Chips committed by the action, never more than the stack
    pub amount: Chips,
    pub explanation: String,
}

impl Decision {
    pub fn new(action: Action, amount: Chips, explanation: impl Into<String>) -> Self {
        Self {
            action,
            amount,
            explanation: explanation.into(),
        }
    }

    pub fn fold(explanation: impl Into<String>) -> Self {
        Self::new(Action::Fold, 0, explanation)
    }

    pub fn check(explanation: impl Into<String>) -> Self {
        Self::new(Action::Check, 0, explanation)
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Fold | Action::Check => write!(f, "{}", self.action),
            action => write!(f, "{action} ${}", self.amount),
        }
    }
}

/// Context for a player-assistant analysis
///
/// Carries everything the engine needs about the current decision so the
/// caller's session layer stays out of the engine.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AnalysisRequest {
    pub user_id: UserId,
    pub session_id: SessionId,

    /// Player's hole cards (must be exactly two)
    pub hole_cards: Vec<Card>,

    /// Community board cards
    pub community_cards: Vec<Card>,

    /// Opponent actions seen so far this hand
    #[serde(default)]
    pub bet_history: Vec<BetRecord>,

    /// Current pot size
    pub pot_size: Chips,

    /// Current bet amount to call
    pub current_bet: Chips,

    /// Player's remaining chips
    pub stack_size: Chips,
}

/// Output of [`analyze`](super::advisor::Advisor::analyze).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub hand_strength: f32,
    pub hand_category: HandCategory,
    pub decision_point: DecisionPoint,
    pub pot_odds: f32,
    pub implied_odds: f32,
    pub recommended_action: Action,
    pub recommended_amount: Chips,
    pub confidence: f32,
    pub explanation: String,
}

/// Output of [`suggest`](super::advisor::Advisor::suggest).
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Suggestion {
    pub style: super::style::SuggestionStyle,
    pub recommended_action: Action,
    pub recommended_amount: Chips,
    pub confidence: f32,
    pub explanation: String,
    /// Archetype read from the bet history (professional style only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opponent_archetype: Option<OpponentArchetype>,
}
