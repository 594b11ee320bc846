//! Style adjusters that turn the base decision into a style-specific one.
//!
//! Two strategies are provided:
//! - [`GtoAdjuster`]: balanced play, mixing in low-probability alternate
//!   lines so the strength-to-action mapping isn't predictable
//! - [`ProfessionalAdjuster`]: exploitative play, profiling the opponent's
//!   betting history first and branching on the resulting archetype
//!
//! Both implement [`StyleAdjuster`] and are dispatched through
//! [`SuggestionStrategy`].

use enum_dispatch::enum_dispatch;
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{errors::AnalysisError, models::Decision, profiler::OpponentProfile};
use crate::game::entities::{BetRecord, Chips};

pub mod gto;
pub mod professional;

pub use gto::{GtoAdjuster, GtoProbabilities, InvalidProbability};
pub use professional::ProfessionalAdjuster;

/// Suggestion styles a player can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionStyle {
    Gto,
    Professional,
}

impl fmt::Display for SuggestionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuggestionStyle::Gto => write!(f, "gto"),
            SuggestionStyle::Professional => write!(f, "professional"),
        }
    }
}

impl FromStr for SuggestionStyle {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gto" => Ok(SuggestionStyle::Gto),
            "professional" => Ok(SuggestionStyle::Professional),
            _ => Err(AnalysisError::InvalidStyle(s.to_string())),
        }
    }
}

/// What a style adjuster knows about the decision being made.
#[derive(Clone, Copy, Debug)]
pub struct Situation<'a> {
    pub strength: f32,
    pub pot_odds: f32,
    pub current_bet: Chips,
    pub stack: Chips,
    pub bet_history: &'a [BetRecord],
}

/// A styled decision and, for exploitative styles, the opponent read.
#[derive(Clone, Debug, PartialEq)]
pub struct Adjustment {
    pub decision: Decision,
    pub opponent: Option<OpponentProfile>,
}

impl From<Decision> for Adjustment {
    fn from(decision: Decision) -> Self {
        Self {
            decision,
            opponent: None,
        }
    }
}

#[enum_dispatch]
pub trait StyleAdjuster {
    /// Transform the base decision for this style.
    ///
    /// Randomized styles draw only from `rng`, so a seeded generator
    /// reproduces the same suggestion.
    fn adjust(&self, base: Decision, situation: &Situation, rng: &mut dyn RngCore) -> Adjustment;

    fn style(&self) -> SuggestionStyle;
}

/// Pluggable style strategy
#[enum_dispatch(StyleAdjuster)]
#[derive(Clone, Debug)]
pub enum SuggestionStrategy {
    GtoAdjuster,
    ProfessionalAdjuster,
}

impl SuggestionStrategy {
    /// Build the strategy for a style.
    pub fn for_style(style: SuggestionStyle, probabilities: &GtoProbabilities) -> Self {
        match style {
            SuggestionStyle::Gto => GtoAdjuster::new(probabilities.clone()).into(),
            SuggestionStyle::Professional => ProfessionalAdjuster.into(),
        }
    }
}

/// Bernoulli trial with `p` clamped into `[0, 1]`; non-finite `p` never fires.
pub(crate) fn roll(rng: &mut dyn RngCore, p: f32) -> bool {
    if !p.is_finite() {
        return false;
    }
    rng.random_bool(f64::from(p.clamp(0.0, 1.0)))
}
