//! Catalog of bot opponents available to players.

use log::{debug, info};
use std::{collections::HashSet, fs, path::Path, sync::Arc};

use super::{
    errors::{BotError, BotResult},
    models::{AiOpponentProfile, BotStyle, SkillLevel},
};

/// Immutable set of opponent profiles
///
/// Built once and shared; lookups hand out `Arc`s so callers never copy a
/// profile.
#[derive(Debug, Clone)]
pub struct OpponentCatalog {
    profiles: Vec<Arc<AiOpponentProfile>>,
}

fn range(hands: &[&str]) -> Vec<String> {
    hands.iter().map(|hand| hand.to_string()).collect()
}

impl Default for OpponentCatalog {
    /// Built-in opponents, one per play style
    fn default() -> Self {
        let profiles = vec![
            AiOpponentProfile {
                id: "rookie_rita".to_string(),
                name: "Rookie Rita".to_string(),
                skill_level: SkillLevel::Beginner,
                style: BotStyle::Loose,
                bluff_frequency: 0.20,
                call_frequency: 0.70,
                raise_frequency: 0.20,
                hand_range: range(&[
                    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "77", "66", "55", "AKs", "AKo",
                    "AQs", "AJo", "KQs", "KJo", "QJs", "JTs", "T9s", "98s", "A5s", "K9o",
                ]),
            },
            AiOpponentProfile {
                id: "steady_sam".to_string(),
                name: "Steady Sam".to_string(),
                skill_level: SkillLevel::Intermediate,
                style: BotStyle::Passive,
                bluff_frequency: 0.05,
                call_frequency: 0.80,
                raise_frequency: 0.15,
                hand_range: range(&[
                    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "AKs", "AKo", "AQs", "AQo", "KQs",
                    "QJs", "JTs",
                ]),
            },
            AiOpponentProfile {
                id: "rock_rachel".to_string(),
                name: "Rock Rachel".to_string(),
                skill_level: SkillLevel::Advanced,
                style: BotStyle::Tight,
                bluff_frequency: 0.05,
                call_frequency: 0.40,
                raise_frequency: 0.60,
                hand_range: range(&["AA", "KK", "QQ", "JJ", "TT", "AKs", "AKo", "AQs", "KQs"]),
            },
            AiOpponentProfile {
                id: "shark_sofia".to_string(),
                name: "Shark Sofia".to_string(),
                skill_level: SkillLevel::Expert,
                style: BotStyle::Aggressive,
                bluff_frequency: 0.30,
                call_frequency: 0.45,
                raise_frequency: 0.75,
                hand_range: range(&[
                    "AA", "KK", "QQ", "JJ", "TT", "99", "AKs", "AKo", "AQs", "AJs", "KQs", "KJs",
                    "QJs", "JTs", "T9s", "A5s", "A4s",
                ]),
            },
            AiOpponentProfile {
                id: "pro_paul".to_string(),
                name: "Pro Paul".to_string(),
                skill_level: SkillLevel::Expert,
                style: BotStyle::Balanced,
                bluff_frequency: 0.15,
                call_frequency: 0.55,
                raise_frequency: 0.50,
                hand_range: range(&[
                    "AA", "KK", "QQ", "JJ", "TT", "99", "88", "AKs", "AKo", "AQs", "AQo", "AJs",
                    "KQs", "KQo", "QJs", "JTs", "T9s", "98s",
                ]),
            },
        ];

        Self {
            profiles: profiles.into_iter().map(Arc::new).collect(),
        }
    }
}

impl OpponentCatalog {
    /// Build a catalog, validating every profile.
    ///
    /// # Errors
    ///
    /// - `BotError::InvalidProfile` - A profile failed validation
    /// - `BotError::DuplicateOpponent` - Two profiles share an id
    pub fn new(profiles: Vec<AiOpponentProfile>) -> BotResult<Self> {
        let mut seen = HashSet::with_capacity(profiles.len());
        for profile in &profiles {
            profile.validate().map_err(|reason| BotError::InvalidProfile {
                id: profile.id.clone(),
                reason,
            })?;
            if !seen.insert(profile.id.as_str()) {
                return Err(BotError::DuplicateOpponent(profile.id.clone()));
            }
        }

        Ok(Self {
            profiles: profiles.into_iter().map(Arc::new).collect(),
        })
    }

    /// Build a catalog from a JSON array of profiles.
    pub fn from_json(json: &str) -> BotResult<Self> {
        let profiles: Vec<AiOpponentProfile> = serde_json::from_str(json)?;
        debug!("Parsed {} opponent profiles", profiles.len());
        Self::new(profiles)
    }

    /// Load a catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> BotResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(
            "Loaded {} opponents from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// All opponents, in catalog order
    pub fn list(&self) -> &[Arc<AiOpponentProfile>] {
        &self.profiles
    }

    /// Find an opponent by id
    pub fn get(&self, id: &str) -> Option<Arc<AiOpponentProfile>> {
        self.profiles
            .iter()
            .find(|profile| profile.id == id)
            .cloned()
    }

    /// Find an opponent by id, failing if it doesn't exist
    pub fn require(&self, id: &str) -> BotResult<Arc<AiOpponentProfile>> {
        self.get(id)
            .ok_or_else(|| BotError::UnknownOpponent(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}
