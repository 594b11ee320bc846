//! Engine facade tying the player assistant and the bot opponents together.

use rand::RngCore;
use std::sync::Arc;

use crate::analysis::{
    Advisor, AdvisorResult, AnalysisRequest, AnalysisResult, Suggestion, SuggestionStyle,
};
use crate::bot::{
    AiOpponentProfile, BotDecisionContext, BotDecisionMaker, BotResult, OpponentCatalog,
    OpponentDecision, OpponentState, hand_range,
};
use crate::config::{ConfigError, EngineConfig};
use crate::game::entities::{Card, Chips};

/// Hand-evaluation and decision engine
///
/// Immutable after construction; share it behind an `Arc` across tasks.
#[derive(Debug, Clone, Default)]
pub struct PokerEngine {
    advisor: Advisor,
    catalog: OpponentCatalog,
    bot_decisions: BotDecisionMaker,
}

impl PokerEngine {
    /// Build an engine from configuration, loading its opponent catalog.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let catalog = config.load_catalog()?;
        Ok(Self::new(Advisor::new(config.gto.clone()), catalog))
    }

    pub fn new(advisor: Advisor, catalog: OpponentCatalog) -> Self {
        Self {
            advisor,
            catalog,
            bot_decisions: BotDecisionMaker::default(),
        }
    }

    /// Replace the bot decision maker
    pub fn with_bot_decisions(mut self, bot_decisions: BotDecisionMaker) -> Self {
        self.bot_decisions = bot_decisions;
        self
    }

    pub fn advisor(&self) -> &Advisor {
        &self.advisor
    }

    pub fn catalog(&self) -> &OpponentCatalog {
        &self.catalog
    }

    /// Analyze a player's hand. See [`Advisor::analyze`].
    pub fn analyze(&self, request: &AnalysisRequest) -> AdvisorResult<AnalysisResult> {
        self.advisor.analyze(request)
    }

    /// Suggest a player action in a style. See [`Advisor::suggest`].
    pub fn suggest(
        &self,
        request: &AnalysisRequest,
        style: SuggestionStyle,
        rng: &mut dyn RngCore,
    ) -> AdvisorResult<Suggestion> {
        self.advisor.suggest(request, style, rng)
    }

    /// All bot opponents on offer
    pub fn list_opponents(&self) -> &[Arc<AiOpponentProfile>] {
        self.catalog.list()
    }

    /// Look up a bot opponent.
    ///
    /// # Errors
    ///
    /// Returns `BotError::UnknownOpponent` if no bot has this id.
    pub fn get_opponent(&self, id: &str) -> BotResult<Arc<AiOpponentProfile>> {
        self.catalog.require(id)
    }

    /// Deal a starting hand from a bot's range
    pub fn deal_opponent_hand(
        &self,
        profile: &AiOpponentProfile,
        rng: &mut dyn RngCore,
    ) -> BotResult<[Card; 2]> {
        hand_range::deal_opponent_hand(profile, rng)
    }

    /// Seat a bot for a new hand: look it up and deal its hole cards.
    pub fn seat_opponent(
        &self,
        id: &str,
        stack: Chips,
        rng: &mut dyn RngCore,
    ) -> BotResult<OpponentState> {
        let profile = self.get_opponent(id)?;
        let hole_cards = self.deal_opponent_hand(&profile, rng)?;
        Ok(OpponentState {
            profile,
            hole_cards: hole_cards.to_vec(),
            stack,
        })
    }

    /// Decide a bot's action in the current betting round
    pub fn decide_opponent_action(
        &self,
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
        self.bot_decisions.decide_action(state, &ctx, rng)
    }
}
