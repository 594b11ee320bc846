//! Player-assistant analysis engine.
//!
//! The assistant path runs, in order:
//! - **Strength**: classify the known cards and score them in `[0, 1]`
//! - **Odds**: pot odds and implied odds from pot, bet and streets left
//! - **Policy**: bucket strength and odds into a base decision
//! - **Style**: transform the base decision (GTO or Professional)
//! - **Confidence**: blend strength, odds and history volume
//!
//! Every step is a pure function of its inputs; the only randomness is the
//! RNG handed to [`Advisor::suggest`].
//!
//! ## Example
//!
//! ```
//! use pp_advisor::analysis::{Advisor, AnalysisRequest, SuggestionStyle};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let advisor = Advisor::default();
//! let request = AnalysisRequest {
//!     user_id: 7,
//!     session_id: uuid::Uuid::new_v4(),
//!     hole_cards: vec!["Ah".parse().unwrap(), "Kh".parse().unwrap()],
//!     community_cards: vec![],
//!     bet_history: vec![],
//!     pot_size: 150,
//!     current_bet: 50,
//!     stack_size: 2000,
//! };
//!
//! let analysis = advisor.analyze(&request).unwrap();
//! assert!((0.5..=0.99).contains(&analysis.confidence));
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let suggestion = advisor.suggest(&request, SuggestionStyle::Gto, &mut rng).unwrap();
//! assert!(suggestion.recommended_amount <= request.stack_size);
//! ```

pub mod advisor;
pub mod confidence;
pub mod errors;
pub mod models;
pub mod odds;
pub mod policy;
pub mod profiler;
pub mod strength;
pub mod style;

pub use advisor::Advisor;
pub use errors::{AdvisorResult, AnalysisError};
pub use models::{AnalysisRequest, AnalysisResult, Decision, SessionId, Suggestion, UserId};
pub use odds::Odds;
pub use profiler::{OpponentArchetype, OpponentProfile};
pub use style::{
    GtoProbabilities, InvalidProbability, StyleAdjuster, SuggestionStrategy, SuggestionStyle,
};
