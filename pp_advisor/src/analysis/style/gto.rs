//! Balanced (GTO-flavored) style adjustment.
//!
//! Not an equilibrium solver: this mixes occasional alternate lines into the
//! base decision so opponents can't read the hand from the action alone.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use super::{Adjustment, Situation, StyleAdjuster, SuggestionStyle, roll};
use crate::analysis::{
    models::Decision,
    policy::{self, value_raise_amount},
};
use crate::game::entities::Action;

/// Mixing probabilities for the balanced style.
///
/// Every value is a probability in `[0.0, 1.0]`. Setting a value to 0.0 or
/// 1.0 makes the corresponding branch deterministic.
///
/// # Examples
///
/// ```
/// use pp_advisor::analysis::style::GtoProbabilities;
///
/// let probabilities = GtoProbabilities::default();
/// assert_eq!(probabilities.fold_to_call, 0.10);
/// assert_eq!(probabilities.all_in_commit, 0.50);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GtoProbabilities {
    /// Continue with a marginal hand instead of folding.
    ///
    /// **Applies when**: base folds, strength > 0.30 and pot odds > 2.5
    pub fold_to_call: f32,

    /// Escalate a call to a raise, representing a polarized range.
    ///
    /// **Applies when**: base calls and strength > 0.60
    pub call_to_raise: f32,

    /// Keep calling a weak hand as a pure bluff-catch.
    ///
    /// **Applies when**: base calls, strength <= 0.40 and pot odds > 3.5;
    /// weak calls that miss this roll fold
    pub bluff_catch: f32,

    /// Escalate a raise to all-in.
    ///
    /// **Applies when**: base raises and strength > 0.80
    pub raise_to_all_in: f32,

    /// Keep a weak raise going as a semi-bluff.
    ///
    /// **Applies when**: base raises, strength <= 0.50 and pot odds > 4;
    /// weak raises that miss this roll call instead
    pub semi_bluff_raise: f32,

    /// Stay all-in with a strong but not dominant hand.
    ///
    /// **Applies when**: base is all-in and 0.70 < strength <= 0.90
    pub all_in_commit: f32,

    /// Shove a drawing hand as a semi-bluff.
    ///
    /// **Applies when**: base is all-in, strength in (0.40, 0.70] and pot odds > 5
    pub semi_bluff_all_in: f32,
}

impl Default for GtoProbabilities {
    fn default() -> Self {
        Self {
            fold_to_call: 0.10,
            call_to_raise: 0.30,
            bluff_catch: 0.05,
            raise_to_all_in: 0.20,
            semi_bluff_raise: 0.05,
            all_in_commit: 0.50,
            semi_bluff_all_in: 0.10,
        }
    }
}

impl GtoProbabilities {
    /// Probabilities that always take the alternate line when allowed.
    pub fn always() -> Self {
        Self {
            fold_to_call: 1.0,
            call_to_raise: 1.0,
            bluff_catch: 1.0,
            raise_to_all_in: 1.0,
            semi_bluff_raise: 1.0,
            all_in_commit: 1.0,
            semi_bluff_all_in: 1.0,
        }
    }

    /// Probabilities that never take the alternate line.
    pub fn never() -> Self {
        Self {
            fold_to_call: 0.0,
            call_to_raise: 0.0,
            bluff_catch: 0.0,
            raise_to_all_in: 0.0,
            semi_bluff_raise: 0.0,
            all_in_commit: 0.0,
            semi_bluff_all_in: 0.0,
        }
    }

    /// Named values, used for validation and logging.
    pub fn entries(&self) -> [(&'static str, f32); 7] {
        [
            ("fold_to_call", self.fold_to_call),
            ("call_to_raise", self.call_to_raise),
            ("bluff_catch", self.bluff_catch),
            ("raise_to_all_in", self.raise_to_all_in),
            ("semi_bluff_raise", self.semi_bluff_raise),
            ("all_in_commit", self.all_in_commit),
            ("semi_bluff_all_in", self.semi_bluff_all_in),
        ]
    }

    /// Validate that every value is a probability
    pub fn validate(&self) -> Result<(), InvalidProbability> {
        match self
            .entries()
            .into_iter()
            .find(|(_, value)| !(0.0..=1.0).contains(value))
        {
            Some((name, value)) => Err(InvalidProbability { name, value }),
            None => Ok(()),
        }
    }
}

/// A mixing probability outside `[0.0, 1.0]`
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
#[error("{name} must be between 0.0 and 1.0, got {value}")]
pub struct InvalidProbability {
    pub name: &'static str,
    pub value: f32,
}

// === Mixing Thresholds ===
// Strength and pot-odds gates for each alternate line

/// Strength a folded hand needs before it can be called instead
const FOLD_TO_CALL_MIN_STRENGTH: f32 = 0.30;

/// Pot odds a folded hand needs before it can be called instead
const FOLD_TO_CALL_MIN_ODDS: f32 = 2.5;

/// Strength above which a call may be raised
const CALL_TO_RAISE_MIN_STRENGTH: f32 = 0.60;

/// Strength at or below which a call is a weak holding
const WEAK_CALL_MAX_STRENGTH: f32 = 0.40;

/// Pot odds a weak holding needs to bluff-catch
const BLUFF_CATCH_MIN_ODDS: f32 = 3.5;

/// Strength above which a raise may become an all-in
const RAISE_TO_ALL_IN_MIN_STRENGTH: f32 = 0.80;

/// Strength at or below which a raise is thin
const THIN_RAISE_MAX_STRENGTH: f32 = 0.50;

/// Pot odds a thin raise needs to stay a semi-bluff
const SEMI_BLUFF_RAISE_MIN_ODDS: f32 = 4.0;

/// Strength above which an all-in is never mixed
const DOMINANT_STRENGTH: f32 = 0.90;

/// Strength above which an all-in follows the commit probability
const ALL_IN_COMMIT_MIN_STRENGTH: f32 = 0.70;

/// Strength a semi-bluff all-in needs
const SEMI_BLUFF_ALL_IN_MIN_STRENGTH: f32 = 0.40;

/// Pot odds a semi-bluff all-in needs
const SEMI_BLUFF_ALL_IN_MIN_ODDS: f32 = 5.0;

/// Balanced style adjuster
#[derive(Debug, Clone, Default)]
pub struct GtoAdjuster {
    probabilities: GtoProbabilities,
}

impl GtoAdjuster {
    pub fn new(probabilities: GtoProbabilities) -> Self {
        Self { probabilities }
    }

    pub fn probabilities(&self) -> &GtoProbabilities {
        &self.probabilities
    }

    fn from_fold(&self, base: Decision, s: &Situation, rng: &mut dyn RngCore) -> Decision {
        if s.strength > FOLD_TO_CALL_MIN_STRENGTH
            && s.pot_odds > FOLD_TO_CALL_MIN_ODDS
            && roll(rng, self.probabilities.fold_to_call)
        {
            return policy::call(
                s.current_bet,
                s.stack,
                "Balanced play: occasionally continue with a marginal holding",
            );
        }
        base
    }

    fn from_call(&self, base: Decision, s: &Situation, rng: &mut dyn RngCore) -> Decision {
        if s.strength > CALL_TO_RAISE_MIN_STRENGTH {
            if roll(rng, self.probabilities.call_to_raise) {
                let amount = value_raise_amount(s.current_bet, s.stack);
                if amount >= s.stack {
                    return policy::all_in(
                        s.stack,
                        "Balanced play: polarize by shoving a strong hand",
                    );
                }
                return Decision::new(
                    Action::Raise,
                    amount,
                    "Balanced play: raise a strong hand to keep the range polarized",
                );
            }
            return base;
        }

        if s.strength <= WEAK_CALL_MAX_STRENGTH {
            if s.pot_odds > BLUFF_CATCH_MIN_ODDS && roll(rng, self.probabilities.bluff_catch) {
                return Decision {
                    explanation: "Balanced play: call as a bluff-catcher at this frequency"
                        .to_string(),
                    ..base
                };
            }
            return Decision::fold("Balanced play: fold a weak holding");
        }

        base
    }

    fn from_raise(&self, base: Decision, s: &Situation, rng: &mut dyn RngCore) -> Decision {
        if s.strength > RAISE_TO_ALL_IN_MIN_STRENGTH
            && roll(rng, self.probabilities.raise_to_all_in)
        {
            return policy::all_in(s.stack, "Balanced play: move all-in with a premium hand");
        }

        if s.strength <= THIN_RAISE_MAX_STRENGTH {
            if s.pot_odds > SEMI_BLUFF_RAISE_MIN_ODDS
                && roll(rng, self.probabilities.semi_bluff_raise)
            {
                return policy::value_raise(
                    s.current_bet,
                    s.stack,
                    "Balanced play: semi-bluff raise with a drawing hand",
                );
            }
            return policy::call(
                s.current_bet,
                s.stack,
                "Balanced play: call rather than raise a thin hand",
            );
        }

        base
    }

    fn from_all_in(&self, base: Decision, s: &Situation, rng: &mut dyn RngCore) -> Decision {
        if s.strength > DOMINANT_STRENGTH {
            return base;
        }

        if s.strength > ALL_IN_COMMIT_MIN_STRENGTH {
            if roll(rng, self.probabilities.all_in_commit) {
                return base;
            }
            return policy::commit_raise(
                s.current_bet,
                s.stack,
                "Balanced play: raise instead of shoving to keep the raising range strong",
            );
        }

        if s.strength > SEMI_BLUFF_ALL_IN_MIN_STRENGTH
            && s.pot_odds > SEMI_BLUFF_ALL_IN_MIN_ODDS
            && roll(rng, self.probabilities.semi_bluff_all_in)
        {
            return policy::all_in(s.stack, "Balanced play: semi-bluff all-in");
        }

        policy::commit_raise(
            s.current_bet,
            s.stack,
            "Balanced play: raise rather than commit the stack",
        )
    }
}

impl StyleAdjuster for GtoAdjuster {
    fn adjust(&self, base: Decision, situation: &Situation, rng: &mut dyn RngCore) -> Adjustment {
        let decision = match base.action {
            Action::Fold => self.from_fold(base, situation, rng),
            Action::Call => self.from_call(base, situation, rng),
            Action::Raise => self.from_raise(base, situation, rng),
            Action::AllIn => self.from_all_in(base, situation, rng),
            Action::Check | Action::Bet => base,
        };
        decision.into()
    }

    fn style(&self) -> SuggestionStyle {
        SuggestionStyle::Gto
    }
}
