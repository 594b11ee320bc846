//! Exploitative (professional) style adjustment.
//!
//! Profiles the opponent from the bet history, then applies the rule table
//! for the resulting archetype. Each archetype's table is a separate
//! function so it can be exercised on its own.

use rand::RngCore;

use super::{Adjustment, Situation, StyleAdjuster, SuggestionStyle};
use crate::analysis::{
    models::Decision,
    policy,
    profiler::{OpponentArchetype, profile_history},
};
use crate::game::entities::Action;

// === Tight-Passive Thresholds ===

/// Strength above which a call becomes a value raise, and at or below
/// which facing a bet is a fold
const TIGHT_PASSIVE_VALUE_RAISE: f32 = 0.60;

/// Strength a shove needs against a tight-passive opponent
const TIGHT_PASSIVE_SHOVE: f32 = 0.85;

// === Tight-Aggressive Thresholds ===

/// Strength below which a call becomes a fold
const TIGHT_AGGRESSIVE_CALL: f32 = 0.45;

/// Strength below which a raise becomes a call
const TIGHT_AGGRESSIVE_RAISE: f32 = 0.60;

/// Strength a shove needs against a tight-aggressive opponent
const TIGHT_AGGRESSIVE_SHOVE: f32 = 0.75;

// === Loose-Passive Thresholds ===

/// Strength above which a call becomes a value raise
const LOOSE_PASSIVE_VALUE_RAISE: f32 = 0.55;

// === Loose-Aggressive Thresholds ===

/// Strength above which a fold becomes a defending call
const LOOSE_AGGRESSIVE_DEFEND: f32 = 0.30;

/// Strength a raise needs against a loose-aggressive opponent
const LOOSE_AGGRESSIVE_RAISE: f32 = 0.60;

/// Strength a shove needs against a loose-aggressive opponent
const LOOSE_AGGRESSIVE_SHOVE: f32 = 0.80;

/// Exploitative style adjuster
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfessionalAdjuster;

/// Against a tight-passive opponent any bet means strength; value-bet
/// them thinly since they rarely re-raise.
pub fn vs_tight_passive(base: Decision, s: &Situation) -> Decision {
    match base.action {
        Action::Call if s.strength > TIGHT_PASSIVE_VALUE_RAISE => policy::value_raise(
            s.current_bet,
            s.stack,
            "Passive opponent won't re-raise: raise for value",
        ),
        Action::Call | Action::Raise
            if s.current_bet > 0 && s.strength <= TIGHT_PASSIVE_VALUE_RAISE =>
        {
            Decision::fold("Tight-passive opponent only bets with strength: fold")
        }
        Action::AllIn if s.strength <= TIGHT_PASSIVE_SHOVE => policy::commit_raise(
            s.current_bet,
            s.stack,
            "Tight-passive opponent won't pay off a shove: raise instead",
        ),
        _ => base,
    }
}

/// Against a tight-aggressive opponent respect their aggression and
/// avoid raising wars without a strong hand.
pub fn vs_tight_aggressive(base: Decision, s: &Situation) -> Decision {
    match base.action {
        Action::Call if s.strength < TIGHT_AGGRESSIVE_CALL => Decision::fold(
            "Tight-aggressive opponent has a strong range: fold marginal hands",
        ),
        Action::Raise if s.strength < TIGHT_AGGRESSIVE_RAISE => policy::call(
            s.current_bet,
            s.stack,
            "Avoid a re-raise war with a tight-aggressive opponent: call",
        ),
        Action::AllIn if s.strength <= TIGHT_AGGRESSIVE_SHOVE => policy::commit_raise(
            s.current_bet,
            s.stack,
            "Tight-aggressive opponent folds weak hands to pressure: \
             raise without risking the stack",
        ),
        _ => base,
    }
}

/// Against a loose-passive opponent (calling station) never bluff and
/// bet big for value.
pub fn vs_loose_passive(base: Decision, s: &Situation) -> Decision {
    match base.action {
        Action::Call if s.strength > LOOSE_PASSIVE_VALUE_RAISE => policy::value_raise(
            s.current_bet,
            s.stack,
            "Calling station will pay off: raise for value",
        ),
        Action::Raise => policy::commit_raise(
            s.current_bet,
            s.stack,
            "Calling station will pay off: size the raise up",
        ),
        _ => base,
    }
}

/// Against a loose-aggressive opponent defend wider and let them bluff,
/// but only commit the stack with a very strong hand.
pub fn vs_loose_aggressive(base: Decision, s: &Situation) -> Decision {
    match base.action {
        Action::Fold if s.strength > LOOSE_AGGRESSIVE_DEFEND && s.current_bet == 0 => {
            Decision::check("Nothing to call against a loose-aggressive opponent: check")
        }
        Action::Fold if s.strength > LOOSE_AGGRESSIVE_DEFEND => policy::call(
            s.current_bet,
            s.stack,
            "Loose-aggressive opponent over-bluffs: defend wider with a call",
        ),
        Action::Raise if s.strength <= LOOSE_AGGRESSIVE_RAISE => policy::call(
            s.current_bet,
            s.stack,
            "Let the loose-aggressive opponent keep betting: call",
        ),
        Action::AllIn if s.strength <= LOOSE_AGGRESSIVE_SHOVE => policy::call(
            s.current_bet,
            s.stack,
            "Trap the loose-aggressive opponent: call instead of shoving",
        ),
        _ => base,
    }
}

impl StyleAdjuster for ProfessionalAdjuster {
    fn adjust(
        &self,
        base: Decision,
        situation: &Situation,
        _rng: &mut dyn RngCore,
    ) -> Adjustment {
        let profile = profile_history(situation.bet_history);
        let decision = match profile.archetype {
            OpponentArchetype::TightPassive => vs_tight_passive(base, situation),
            OpponentArchetype::TightAggressive => vs_tight_aggressive(base, situation),
            OpponentArchetype::LoosePassive => vs_loose_passive(base, situation),
            OpponentArchetype::LooseAggressive => vs_loose_aggressive(base, situation),
            OpponentArchetype::Unknown => base,
        };

        log::debug!(
            "professional adjustment vs {}: {} ({})",
            profile.archetype,
            decision,
            decision.explanation
        );

        Adjustment {
            decision,
            opponent: Some(profile),
        }
    }

    fn style(&self) -> SuggestionStyle {
        SuggestionStyle::Professional
    }
}
