//! # PP Advisor
//!
//! Hand evaluation and decision engine for a Texas Hold'em assistant and its
//! bot opponents.
//!
//! The engine classifies the known cards, scores them as a continuous
//! strength in `[0, 1]`, combines that with pot and implied odds, and maps
//! the result to a fold/call/raise/all-in decision. The decision is then
//! reshaped by one of two styles:
//!
//! - **GTO**: balanced, randomly mixes alternate lines into the base decision
//! - **Professional**: exploitative, profiles the opponent from the bet
//!   history and applies that archetype's rules
//!
//! Bot opponents run the same strength scoring through their own
//! frequency profile.
//!
//! ## Core Modules
//!
//! - [`game`]: Cards, actions and hand classification
//! - [`analysis`]: Player-assistant analysis and suggestions
//! - [`bot`]: Bot opponent catalog, hand dealing and decisions
//! - [`training`]: Training sample store boundary
//! - [`config`]: Environment-driven engine configuration
//!
//! ## Example
//!
//! ```
//! use pp_advisor::{AnalysisRequest, PokerEngine, SuggestionStyle};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let engine = PokerEngine::default();
//! let request = AnalysisRequest {
//!     user_id: 1,
//!     session_id: uuid::Uuid::new_v4(),
//!     hole_cards: vec!["Ah".parse().unwrap(), "Ad".parse().unwrap()],
//!     community_cards: vec!["Ac".parse().unwrap(), "7d".parse().unwrap(), "2s".parse().unwrap()],
//!     bet_history: vec![],
//!     pot_size: 100,
//!     current_bet: 20,
//!     stack_size: 1000,
//! };
//!
//! let analysis = engine.analyze(&request).unwrap();
//! assert_eq!(analysis.hand_category.to_string(), "three of a kind");
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let suggestion = engine.suggest(&request, SuggestionStyle::Professional, &mut rng).unwrap();
//! assert!(suggestion.recommended_amount <= request.stack_size);
//! ```

/// Player-assistant analysis: strength, odds, policy, styles and confidence.
pub mod analysis;
pub use analysis::{
    Advisor, AnalysisError, AnalysisRequest, AnalysisResult, Suggestion, SuggestionStyle,
};

/// Bot opponents.
pub mod bot;
pub use bot::{AiOpponentProfile, BotError, OpponentCatalog, OpponentDecision, OpponentState};

pub mod config;
pub use config::{ConfigError, EngineConfig};

pub mod engine;
pub use engine::PokerEngine;

/// Card model and hand classification.
pub mod game;
pub use game::{
    entities::{self, Action, BetRecord, Card, Chips, DecisionPoint, HandCategory, Suit},
    functional,
};

/// Training samples recorded from player decisions.
pub mod training;
pub use training::{InMemoryTrainingStore, TrainingSample, TrainingSampleStore, TrainingStoreError};
