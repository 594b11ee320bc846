//! Player assistant: hand analysis and style-specific suggestions.

use log::debug;
use rand::RngCore;

use super::{
    confidence::estimate_confidence,
    errors::{AdvisorResult, AnalysisError},
    models::{AnalysisRequest, AnalysisResult, Suggestion},
    odds::Odds,
    policy,
    strength::{ScoredHand, score_hand},
    style::{GtoProbabilities, Situation, StyleAdjuster, SuggestionStrategy, SuggestionStyle},
};
use crate::game::entities::DecisionPoint;

/// Hole cards every analysis requires
pub const HOLE_CARD_COUNT: usize = 2;

/// Everything derived from a request before any style is applied.
struct Evaluation {
    scored: ScoredHand,
    decision_point: DecisionPoint,
    odds: Odds,
}

/// Player assistant
///
/// Holds only immutable configuration, so one instance can serve any
/// number of concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct Advisor {
    probabilities: GtoProbabilities,
}

impl Advisor {
    /// Create an advisor with custom balanced-style probabilities
    pub fn new(probabilities: GtoProbabilities) -> Self {
        Self { probabilities }
    }

    pub fn probabilities(&self) -> &GtoProbabilities {
        &self.probabilities
    }

    fn evaluate(&self, request: &AnalysisRequest) -> AdvisorResult<Evaluation> {
        if request.hole_cards.len() != HOLE_CARD_COUNT {
            return Err(AnalysisError::InvalidHoleCards(request.hole_cards.len()));
        }

        let scored = score_hand(&request.hole_cards, &request.community_cards);
        let decision_point = DecisionPoint::from_community_count(request.community_cards.len());
        if decision_point == DecisionPoint::Unknown {
            debug!(
                "unexpected community card count {} for session {}",
                request.community_cards.len(),
                request.session_id
            );
        }

        let expected_future_bets = request
            .current_bet
            .saturating_mul(decision_point.streets_remaining());
        let odds = Odds::new(request.pot_size, request.current_bet, expected_future_bets);

        Ok(Evaluation {
            scored,
            decision_point,
            odds,
        })
    }

    /// Analyze a hand and recommend the base action.
    ///
    /// Deterministic: identical requests produce identical results.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidHoleCards`] unless exactly two hole
    /// cards are supplied.
    pub fn analyze(&self, request: &AnalysisRequest) -> AdvisorResult<AnalysisResult> {
        let eval = self.evaluate(request)?;
        let strength = eval.scored.strength;
        let decision = policy::decide(
            strength,
            eval.odds.pot_odds,
            request.current_bet,
            request.stack_size,
        );
        let confidence =
            estimate_confidence(strength, eval.odds.pot_odds, request.bet_history.len());

        debug!(
            "analysis for user {} session {}: {} ({:.2}) on the {}, {}",
            request.user_id,
            request.session_id,
            eval.scored.classification.category,
            strength,
            eval.decision_point,
            decision
        );

        Ok(AnalysisResult {
            hand_strength: strength,
            hand_category: eval.scored.classification.category,
            decision_point: eval.decision_point,
            pot_odds: eval.odds.pot_odds,
            implied_odds: eval.odds.implied_odds,
            recommended_action: decision.action,
            recommended_amount: decision.amount,
            confidence,
            explanation: decision.explanation,
        })
    }

    /// Suggest an action in the requested style.
    ///
    /// # Arguments
    ///
    /// * `request` - Hand and betting state
    /// * `style` - Suggestion style
    /// * `rng` - Randomness for the balanced style's mixing
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidHoleCards`] unless exactly two hole
    /// cards are supplied.
    pub fn suggest(
        &self,
        request: &AnalysisRequest,
        style: SuggestionStyle,
        rng: &mut dyn RngCore,
    ) -> AdvisorResult<Suggestion> {
        let eval = self.evaluate(request)?;
        let strength = eval.scored.strength;
        let base = policy::decide(
            strength,
            eval.odds.pot_odds,
            request.current_bet,
            request.stack_size,
        );

        let situation = Situation {
            strength,
            pot_odds: eval.odds.pot_odds,
            current_bet: request.current_bet,
            stack: request.stack_size,
            bet_history: &request.bet_history,
        };
        let strategy = SuggestionStrategy::for_style(style, &self.probabilities);
        let adjustment = strategy.adjust(base, &situation, rng);

        let confidence =
            estimate_confidence(strength, eval.odds.pot_odds, request.bet_history.len());
        let decision = adjustment.decision;

        debug!(
            "{} suggestion for user {} session {}: {}",
            style, request.user_id, request.session_id, decision
        );

        Ok(Suggestion {
            style,
            recommended_action: decision.action,
            recommended_amount: decision.amount.min(request.stack_size),
            confidence,
            explanation: format!(
                "{} ({:.2}) on the {}. {}",
                eval.scored.classification.category,
                strength,
                eval.decision_point,
                decision.explanation
            ),
            opponent_archetype: adjustment.opponent.map(|profile| profile.archetype),
        })
    }

    /// Suggest an action for a style given by name (`"gto"` or `"professional"`).
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::InvalidStyle`] for any other style name.
    pub fn suggest_named(
        &self,
        request: &AnalysisRequest,
        style: &str,
        rng: &mut dyn RngCore,
    ) -> AdvisorResult<Suggestion> {
        let style: SuggestionStyle = style.parse()?;
        self.suggest(request, style, rng)
    }
}
