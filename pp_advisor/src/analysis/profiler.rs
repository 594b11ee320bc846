//! Opponent profiling from a window of observed actions.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::game::entities::{Action, BetRecord};

/// Aggressive share of actions below which a player is tight
const TIGHT_AGGRESSION_SHARE: f32 = 0.30;

/// Aggressive share of actions above which a player is loose
const LOOSE_AGGRESSION_SHARE: f32 = 0.50;

/// Aggression factor below which a player is passive
const PASSIVE_AGGRESSION_FACTOR: f32 = 1.5;

/// Aggression factor above which a player is aggressive
const AGGRESSIVE_AGGRESSION_FACTOR: f32 = 2.5;

/// Coarse opponent style classification
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpponentArchetype {
    TightPassive,
    TightAggressive,
    LoosePassive,
    LooseAggressive,
    Unknown,
}

impl fmt::Display for OpponentArchetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpponentArchetype::TightPassive => write!(f, "tight-passive"),
            OpponentArchetype::TightAggressive => write!(f, "tight-aggressive"),
            OpponentArchetype::LoosePassive => write!(f, "loose-passive"),
            OpponentArchetype::LooseAggressive => write!(f, "loose-aggressive"),
            OpponentArchetype::Unknown => write!(f, "unknown"),
        }
    }
}

/// Opponent tendencies derived from an action history
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct OpponentProfile {
    pub archetype: OpponentArchetype,
    pub bet_frequency: f32,
    pub raise_frequency: f32,
    pub fold_frequency: f32,
    pub call_frequency: f32,
    /// (bets + raises) / (calls + folds), 0 without any calls or folds
    pub aggression_factor: f32,
}

impl Default for OpponentProfile {
    fn default() -> Self {
        Self {
            archetype: OpponentArchetype::Unknown,
            bet_frequency: 0.0,
            raise_frequency: 0.0,
            fold_frequency: 0.0,
            call_frequency: 0.0,
            aggression_factor: 0.0,
        }
    }
}

#[derive(Debug, Default)]
struct ActionCounts {
    bets: u32,
    raises: u32,
    calls: u32,
    folds: u32,
    total: u32,
}

impl ActionCounts {
    fn tally<'a>(actions: impl IntoIterator<Item = &'a Action>) -> Self {
        let mut counts = Self::default();
        for action in actions {
            match action {
                Action::Bet => counts.bets += 1,
                Action::Raise => counts.raises += 1,
                Action::Call => counts.calls += 1,
                Action::Fold => counts.folds += 1,
                Action::Check | Action::AllIn => {}
            }
            counts.total += 1;
        }
        counts
    }
}

/// Classify an opponent from their ordered actions this hand.
///
/// Checks and all-ins count toward the total but are neither aggressive
/// nor passive actions. With no calls or folds there is nothing to
/// measure aggression against, so the factor is 0 and the archetype
/// is [`OpponentArchetype::Unknown`].
pub fn profile_actions(actions: &[Action]) -> OpponentProfile {
    let counts = ActionCounts::tally(actions);
    if counts.total == 0 {
        return OpponentProfile::default();
    }

    let total = counts.total as f32;
    let aggressive = (counts.bets + counts.raises) as f32;
    let passive = (counts.calls + counts.folds) as f32;

    let mut profile = OpponentProfile {
        archetype: OpponentArchetype::Unknown,
        bet_frequency: counts.bets as f32 / total,
        raise_frequency: counts.raises as f32 / total,
        fold_frequency: counts.folds as f32 / total,
        call_frequency: counts.calls as f32 / total,
        aggression_factor: 0.0,
    };

    if passive == 0.0 {
        return profile;
    }
    profile.aggression_factor = aggressive / passive;

    let aggression_share = aggressive / total;
    let is_tight = aggression_share < TIGHT_AGGRESSION_SHARE;
    let is_loose = aggression_share > LOOSE_AGGRESSION_SHARE;
    let is_passive = profile.aggression_factor < PASSIVE_AGGRESSION_FACTOR;
    let is_aggressive = profile.aggression_factor > AGGRESSIVE_AGGRESSION_FACTOR;

    profile.archetype = match (is_tight, is_loose, is_passive, is_aggressive) {
        (true, _, true, _) => OpponentArchetype::TightPassive,
        (true, _, _, true) => OpponentArchetype::TightAggressive,
        (_, true, true, _) => OpponentArchetype::LoosePassive,
        (_, true, _, true) => OpponentArchetype::LooseAggressive,
        _ => OpponentArchetype::Unknown,
    };

    log::debug!(
        "profiled {} actions: {} (af={:.2}, aggression share={:.2})",
        counts.total,
        profile.archetype,
        profile.aggression_factor,
        aggression_share
    );

    profile
}

/// Classify an opponent from a betting history.
pub fn profile_history(history: &[BetRecord]) -> OpponentProfile {
    let actions: Vec<Action> = history.iter().map(|record| record.action).collect();
    profile_actions(&actions)
}
