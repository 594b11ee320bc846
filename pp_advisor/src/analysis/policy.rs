//! Deterministic base decision policy.
//!
//! Buckets hand strength and pot odds into a single recommendation. Both
//! style adjusters start from this decision.

use super::models::Decision;
use crate::game::entities::{Action, Chips};

// === Strength Buckets ===

/// Below this strength the policy always folds
pub const FOLD_THRESHOLD: f32 = 0.30;

/// Below this strength the hand is a marginal call
pub const CALL_THRESHOLD: f32 = 0.50;

/// At or above this strength the hand commits
pub const COMMIT_THRESHOLD: f32 = 0.70;

// === Pot Odds Requirements ===

/// Marginal hands call only above this pot odds ratio
pub const MARGINAL_CALL_ODDS: f32 = 3.0;

/// Medium hands raise only above this pot odds ratio
pub const VALUE_RAISE_ODDS: f32 = 2.0;

// === Bet Sizing ===

/// Value raise: `min(2 x current bet, 0.3 x stack)`
const VALUE_RAISE_BET_MULTIPLIER: Chips = 2;
const VALUE_RAISE_STACK_FRACTION: f64 = 0.3;

/// Commit raise: `min(3 x current bet, 0.5 x stack)`
const COMMIT_RAISE_BET_MULTIPLIER: Chips = 3;
const COMMIT_RAISE_STACK_FRACTION: f64 = 0.5;

fn stack_fraction(stack: Chips, fraction: f64) -> Chips {
    (stack as f64 * fraction).floor() as Chips
}

/// Chips needed to call, capped at the stack.
pub fn call_amount(current_bet: Chips, stack: Chips) -> Chips {
    current_bet.min(stack)
}

/// Raise size for medium-strength value hands.
pub fn value_raise_amount(current_bet: Chips, stack: Chips) -> Chips {
    current_bet
        .saturating_mul(VALUE_RAISE_BET_MULTIPLIER)
        .min(stack_fraction(stack, VALUE_RAISE_STACK_FRACTION))
        .min(stack)
}

/// Raise size for strong hands that can't profitably shove.
pub fn commit_raise_amount(current_bet: Chips, stack: Chips) -> Chips {
    current_bet
        .saturating_mul(COMMIT_RAISE_BET_MULTIPLIER)
        .min(stack_fraction(stack, COMMIT_RAISE_STACK_FRACTION))
        .min(stack)
}

/// Whether the stack is deep enough relative to the bet to shove.
pub fn can_shove(current_bet: Chips, stack: Chips) -> bool {
    stack > current_bet.saturating_mul(3)
}

pub fn call(current_bet: Chips, stack: Chips, explanation: impl Into<String>) -> Decision {
    Decision::new(Action::Call, call_amount(current_bet, stack), explanation)
}

pub fn value_raise(current_bet: Chips, stack: Chips, explanation: impl Into<String>) -> Decision {
    Decision::new(
        Action::Raise,
        value_raise_amount(current_bet, stack),
        explanation,
    )
}

pub fn commit_raise(current_bet: Chips, stack: Chips, explanation: impl Into<String>) -> Decision {
    Decision::new(
        Action::Raise,
        commit_raise_amount(current_bet, stack),
        explanation,
    )
}

pub fn all_in(stack: Chips, explanation: impl Into<String>) -> Decision {
    Decision::new(Action::AllIn, stack, explanation)
}

/// Base recommendation for a hand.
///
/// | strength       | rule                                                  |
/// |----------------|-------------------------------------------------------|
/// | `< 0.30`       | fold                                                  |
/// | `[0.30, 0.50)` | call if pot odds > 3, else fold                       |
/// | `[0.50, 0.70)` | value raise if pot odds > 2, else call                |
/// | `>= 0.70`      | all-in if stack > 3x bet, else commit raise           |
///
/// # Examples
///
/// ```
/// use pp_advisor::analysis::policy::decide;
/// use pp_advisor::game::entities::Action;
///
/// let decision = decide(0.65, 3.0, 50, 2000);
/// assert_eq!(decision.action, Action::Raise);
/// assert_eq!(decision.amount, 100);
/// ```
pub fn decide(strength: f32, pot_odds: f32, current_bet: Chips, stack: Chips) -> Decision {
    if strength < FOLD_THRESHOLD {
        return Decision::fold(format!(
            "Hand strength {strength:.2} is too weak to continue"
        ));
    }

    if strength < CALL_THRESHOLD {
        if pot_odds > MARGINAL_CALL_ODDS {
            return call(
                current_bet,
                stack,
                format!(
                    "Marginal hand ({strength:.2}) but pot odds of {pot_odds:.1}:1 justify a call"
                ),
            );
        }
        return Decision::fold(format!(
            "Marginal hand ({strength:.2}) without the pot odds to continue ({pot_odds:.1}:1)"
        ));
    }

    if strength < COMMIT_THRESHOLD {
        if pot_odds > VALUE_RAISE_ODDS {
            return value_raise(
                current_bet,
                stack,
                format!("Solid hand ({strength:.2}) with good pot odds, raise for value"),
            );
        }
        return call(
            current_bet,
            stack,
            format!("Solid hand ({strength:.2}) but pot odds of {pot_odds:.1}:1 favor a call"),
        );
    }

    if can_shove(current_bet, stack) {
        all_in(
            stack,
            format!("Strong hand ({strength:.2}) and a deep stack, commit all chips"),
        )
    } else {
        commit_raise(
            current_bet,
            stack,
            format!("Strong hand ({strength:.2}), raise big relative to the bet"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weak_hands_fold_regardless_of_odds() {
        let decision = decide(0.2, 5.0, 20, 1000);
        assert_eq!(decision.action, Action::Fold);
        assert_eq!(decision.amount, 0);

        let decision = decide(0.29, 100.0, 20, 1000);
        assert_eq!(decision.action, Action::Fold);
    }

    #[test]
    fn test_marginal_hands_need_odds() {
        let call = decide(0.40, 3.5, 20, 1000);
        assert_eq!(call.action, Action::Call);
        assert_eq!(call.amount, 20);

        let fold = decide(0.40, 3.0, 20, 1000);
        assert_eq!(fold.action, Action::Fold);

        // Bucket starts exactly at 0.30
        assert_eq!(decide(0.30, 4.0, 20, 1000).action, Action::Call);
    }

    #[test]
    fn test_medium_hands_raise_with_odds() {
        let raise = decide(0.65, 3.0, 50, 2000);
        assert_eq!(raise.action, Action::Raise);
        assert_eq!(raise.amount, 100);

        // Sizing capped by 30% of the stack
        let capped = decide(0.55, 3.0, 200, 1000);
        assert_eq!(capped.action, Action::Raise);
        assert_eq!(capped.amount, 300);

        let call = decide(0.55, 2.0, 50, 2000);
        assert_eq!(call.action, Action::Call);
        assert_eq!(call.amount, 50);
    }

    #[test]
    fn test_strong_hands_commit() {
        let shove = decide(0.80, 1.0, 100, 1000);
        assert_eq!(shove.action, Action::AllIn);
        assert_eq!(shove.amount, 1000);

        // Stack of exactly 3x the bet can't shove
        let raise = decide(0.80, 1.0, 100, 300);
        assert_eq!(raise.action, Action::Raise);
        assert_eq!(raise.amount, 150);

        assert_eq!(decide(0.70, 0.0, 10, 1000).action, Action::AllIn);
    }

    #[test]
    fn test_amount_never_exceeds_stack() {
        for strength in [0.1, 0.35, 0.6, 0.9] {
            for odds in [0.0, 2.5, 3.5, 10.0] {
                for (bet, stack) in [(500, 100), (0, 0), (100, 1000), (Chips::MAX, 10)] {
                    let decision = decide(strength, odds, bet, stack);
                    assert!(decision.amount <= stack, "{decision:?} for stack {stack}");
                }
            }
        }
    }

    #[test]
    fn test_explanations_are_populated() {
        assert!(!decide(0.2, 0.0, 10, 100).explanation.is_empty());
        assert!(!decide(0.9, 0.0, 10, 100).explanation.is_empty());
    }
}
