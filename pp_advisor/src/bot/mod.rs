//! Bot opponents players can practice against.
//!
//! This module implements:
//! - AiOpponentProfile: a bot's style, frequencies and starting-hand range
//! - OpponentCatalog: the immutable set of bots on offer
//! - Hand generation from a bot's range
//! - BotDecisionMaker: the bot's per-action decision
//!
//! ## Play Styles
//!
//! Each style shifts how strong the bot believes its hand is:
//!
//! | style      | offset |
//! |------------|--------|
//! | tight      | -0.10  |
//! | loose      | +0.10  |
//! | aggressive | +0.05  |
//! | passive    | -0.05  |
//! | balanced   |  0.00  |
//!
//! The profile's `bluff_frequency`, `call_frequency` and `raise_frequency`
//! then decide between the two options available in each strength bucket.
//!
//! ## Example
//!
//! ```
//! use pp_advisor::bot::{
//!     OpponentCatalog, OpponentState, deal_opponent_hand, decide_opponent_action,
//! };
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let catalog = OpponentCatalog::default();
//! let profile = catalog.get("rock_rachel").unwrap();
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let hole_cards = deal_opponent_hand(&profile, &mut rng).unwrap();
//! let state = OpponentState {
//!     profile,
//!     hole_cards: hole_cards.to_vec(),
//!     stack: 1000,
//! };
//!
//! let decision = decide_opponent_action(&state, &[], 30, 20, 20, &mut rng);
//! assert!(decision.amount <= state.stack);
//! ```

pub mod catalog;
pub mod decision;
pub mod errors;
pub mod hand_range;
pub mod models;

pub use catalog::OpponentCatalog;
pub use decision::{BotDecisionConfig, BotDecisionContext, BotDecisionMaker, decide_opponent_action};
pub use errors::{BotError, BotResult};
pub use hand_range::{deal_opponent_hand, parse_hand_shorthand};
pub use models::{AiOpponentProfile, BotId, BotStyle, OpponentDecision, OpponentState, SkillLevel};
