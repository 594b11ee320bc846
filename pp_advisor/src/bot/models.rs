//! Bot opponent models and profiles.

use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};

use crate::game::entities::{Action, Card, Chips};

/// Bot opponent identifier
pub type BotId = String;

/// Skill tier shown to players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "beginner"),
            SkillLevel::Intermediate => write!(f, "intermediate"),
            SkillLevel::Advanced => write!(f, "advanced"),
            SkillLevel::Expert => write!(f, "expert"),
        }
    }
}

/// Bot play style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BotStyle {
    Tight,  // Plays fewer hands, reads its own hand as weaker
    Loose,  // Plays many hands, reads its own hand as stronger
    Aggressive,
    Passive,
    Balanced,
}

impl fmt::Display for BotStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotStyle::Tight => write!(f, "tight"),
            BotStyle::Loose => write!(f, "loose"),
            BotStyle::Aggressive => write!(f, "aggressive"),
            BotStyle::Passive => write!(f, "passive"),
            BotStyle::Balanced => write!(f, "balanced"),
        }
    }
}

/// Bot opponent definition
///
/// Loaded once at startup and shared read-only between every decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiOpponentProfile {
    /// Bot unique ID
    pub id: BotId,

    /// Bot display name
    pub name: String,

    pub skill_level: SkillLevel,

    pub style: BotStyle,

    /// Chance to raise a weak hand when the pot is laying good odds (0.0 to 1.0)
    pub bluff_frequency: f32,

    /// Chance to call with a marginal hand (0.0 to 1.0)
    pub call_frequency: f32,

    /// Chance to raise a medium-strength hand (0.0 to 1.0)
    pub raise_frequency: f32,

    /// Starting hands the bot is dealt from, in shorthand (`AA`, `AKs`, `T9o`)
    pub hand_range: Vec<String>,
}

impl AiOpponentProfile {
    /// Validate profile
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Profile id must not be empty".to_string());
        }

        for (name, value) in [
            ("bluff_frequency", self.bluff_frequency),
            ("call_frequency", self.call_frequency),
            ("raise_frequency", self.raise_frequency),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} must be between 0.0 and 1.0"));
            }
        }

        if self.hand_range.is_empty() {
            return Err("Hand range must not be empty".to_string());
        }

        Ok(())
    }
}

/// A bot seated in a hand
#[derive(Debug, Clone)]
pub struct OpponentState {
    pub profile: Arc<AiOpponentProfile>,

    /// Bot's hole cards
    pub hole_cards: Vec<Card>,

    /// Bot's remaining chips
    pub stack: Chips,
}

/// Action chosen by a bot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentDecision {
    pub action: Action,
    pub amount: Chips,
}

impl OpponentDecision {
    pub fn new(action: Action, amount: Chips) -> Self {
        Self { action, amount }
    }
}

impl fmt::Display for OpponentDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.action {
            Action::Fold | Action::Check => write!(f, "{}", self.action),
            action => write!(f, "{action} ${}", self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> AiOpponentProfile {
        AiOpponentProfile {
            id: "test".to_string(),
            name: "TestBot".to_string(),
            skill_level: SkillLevel::Beginner,
            style: BotStyle::Balanced,
            bluff_frequency: 0.1,
            call_frequency: 0.5,
            raise_frequency: 0.3,
            hand_range: vec!["AA".to_string()],
        }
    }

    #[test]
    fn test_valid_profile() {
        assert!(profile().validate().is_ok());
    }

    #[test]
    fn test_invalid_profiles() {
        let mut p = profile();
        p.call_frequency = 1.2;
        assert!(p.validate().unwrap_err().contains("call_frequency"));

        let mut p = profile();
        p.hand_range.clear();
        assert!(p.validate().is_err());

        let mut p = profile();
        p.id = " ".to_string();
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_profile_json_shape() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["skill_level"], "beginner");
        assert_eq!(json["style"], "balanced");
    }
}
