//! Bot decision-making driven by the opponent profile.

use log::debug;
use rand::RngCore;

use super::models::{BotStyle, OpponentDecision, OpponentState};
use crate::analysis::{
    odds::pot_odds,
    policy::{
        CALL_THRESHOLD, COMMIT_THRESHOLD, FOLD_THRESHOLD, call_amount, can_shove,
        commit_raise_amount, value_raise_amount,
    },
    strength::{estimate_hand_strength, round_to_points},
    style::roll,
};
use crate::game::entities::{Action, Card, Chips};

/// Configuration for bot decision-making.
///
/// Offsets shift the bot's read of its own hand before bucketing; they
/// are added to a strength in `[0.0, 1.0]` and the result is clamped.
///
/// # Examples
///
/// ```
/// use pp_advisor::bot::decision::BotDecisionConfig;
/// use pp_advisor::bot::models::BotStyle;
///
/// let config = BotDecisionConfig::default();
/// assert_eq!(config.style_offset(BotStyle::Tight), -0.10);
/// assert_eq!(config.bluff_pot_odds_threshold, 3.0);
/// ```
#[derive(Debug, Clone)]
pub struct BotDecisionConfig {
    /// Strength offset for tight bots.
    ///
    /// **Effect**: -0.10 = a pair pre-flop (0.50) is read as a marginal hand
    /// **More negative** = folds more often
    pub tight_offset: f32,

    /// Strength offset for loose bots.
    ///
    /// **Effect**: +0.10 = bare high cards (0.30) are read as playable
    pub loose_offset: f32,

    /// Strength offset for aggressive bots.
    pub aggressive_offset: f32,

    /// Strength offset for passive bots.
    pub passive_offset: f32,

    /// Strength offset for balanced bots.
    pub balanced_offset: f32,

    /// Pot odds above which a weak hand may bluff-raise.
    ///
    /// **Range**: 2.0-5.0 (typical: 3.0)
    /// **Lower** = bluffs into smaller pots
    pub bluff_pot_odds_threshold: f32,
}

impl Default for BotDecisionConfig {
    fn default() -> Self {
        Self {
            tight_offset: -0.10,
            loose_offset: 0.10,
            aggressive_offset: 0.05,
            passive_offset: -0.05,
            balanced_offset: 0.0,
            bluff_pot_odds_threshold: 3.0,
        }
    }
}

impl BotDecisionConfig {
    /// Strength offset for a play style
    pub fn style_offset(&self, style: BotStyle) -> f32 {
        match style {
            BotStyle::Tight => self.tight_offset,
            BotStyle::Loose => self.loose_offset,
            BotStyle::Aggressive => self.aggressive_offset,
            BotStyle::Passive => self.passive_offset,
            BotStyle::Balanced => self.balanced_offset,
        }
    }
}

/// Context for bot decision making
#[derive(Debug, Clone, Copy)]
pub struct BotDecisionContext<'a> {
    /// Community board cards
    pub community_cards: &'a [Card],

    /// Current pot size
    pub pot_size: Chips,

    /// Current bet amount to call
    pub current_bet: Chips,

    /// Smallest legal raise
    pub min_raise: Chips,
}

/// Bot decision maker
#[derive(Debug, Clone, Default)]
pub struct BotDecisionMaker {
    /// Configuration for decision-making
    config: BotDecisionConfig,
}

impl BotDecisionMaker {
    /// Create a new decision maker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new decision maker with custom config
    pub fn with_config(config: BotDecisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BotDecisionConfig {
        &self.config
    }

    /// The bot's read of its hand: estimated strength plus its style offset.
    pub fn perceived_strength(&self, state: &OpponentState, community_cards: &[Card]) -> f32 {
        let strength = estimate_hand_strength(&state.hole_cards, community_cards);
        round_to_points(strength + self.config.style_offset(state.profile.style)).clamp(0.0, 1.0)
    }

    /// Decide bot action based on its profile and the game state
    ///
    /// # Arguments
    ///
    /// * `state` - Bot profile, hole cards and stack
    /// * `ctx` - Decision context with game state
    /// * `rng` - Source for the profile's frequencies
    ///
    /// # Returns
    ///
    /// * `OpponentDecision` - Bot's chosen action and amount
    pub fn decide_action(
        &self,
        state: &OpponentState,
        ctx: &BotDecisionContext,
        rng: &mut dyn RngCore,
    ) -> OpponentDecision {
        let profile = &state.profile;
        let stack = state.stack;
        let strength = self.perceived_strength(state, ctx.community_cards);
        let odds = pot_odds(ctx.pot_size, ctx.current_bet);

        let decision = if strength < FOLD_THRESHOLD {
            // Weak hands fold, or bluff when the pot is big enough
            if odds > self.config.bluff_pot_odds_threshold && roll(rng, profile.bluff_frequency) {
                self.raise(value_raise_amount(ctx.current_bet, stack), state, ctx)
            } else {
                self.fold(ctx)
            }
        } else if strength < CALL_THRESHOLD {
            if roll(rng, profile.call_frequency) {
                self.call(state, ctx)
            } else {
                self.fold(ctx)
            }
        } else if strength < COMMIT_THRESHOLD {
            if roll(rng, profile.raise_frequency) {
                self.raise(value_raise_amount(ctx.current_bet, stack), state, ctx)
            } else {
                self.call(state, ctx)
            }
        } else if can_shove(ctx.current_bet, stack) {
            OpponentDecision::new(Action::AllIn, stack)
        } else {
            self.raise(commit_raise_amount(ctx.current_bet, stack), state, ctx)
        };

        debug!(
            "bot {} ({}) read {:.2} facing {} into {}: {}",
            profile.id, profile.style, strength, ctx.current_bet, ctx.pot_size, decision
        );

        decision
    }

    fn fold(&self, ctx: &BotDecisionContext) -> OpponentDecision {
        if ctx.current_bet == 0 {
            return OpponentDecision::new(Action::Check, 0);
        }
        OpponentDecision::new(Action::Fold, 0)
    }

    fn call(&self, state: &OpponentState, ctx: &BotDecisionContext) -> OpponentDecision {
        if ctx.current_bet == 0 {
            return OpponentDecision::new(Action::Check, 0);
        }
        // Calling the whole stack is an all-in
        if state.stack <= ctx.current_bet {
            return OpponentDecision::new(Action::AllIn, state.stack);
        }
        OpponentDecision::new(Action::Call, call_amount(ctx.current_bet, state.stack))
    }

    fn raise(
        &self,
        amount: Chips,
        state: &OpponentState,
        ctx: &BotDecisionContext,
    ) -> OpponentDecision {
        let amount = amount.max(ctx.min_raise);
        if amount >= state.stack {
            OpponentDecision::new(Action::AllIn, state.stack)
        } else if amount == 0 {
            self.call(state, ctx)
        } else {
            OpponentDecision::new(Action::Raise, amount)
        }
    }
}

/// Decide a bot's action with the default configuration.
pub fn decide_opponent_action(
    state: &OpponentState,
    community_cards: &[Card],
    pot_size: Chips,
    current_bet: Chips,
    min_raise: Chips,
    rng: &mut dyn RngCore,
) -> OpponentDecision {
    let ctx = BotDecisionContext {
        community_cards,
        pot_size,
        current_bet,
        min_raise,
    };
    BotDecisionMaker::new().decide_action(state, &ctx, rng)
}
