//! Training samples recorded from player decisions.
//!
//! A sample pairs the state a player saw with the action they took (and
//! the suggestion they were shown, if any). Samples are append-only.

pub mod errors;
pub mod models;
pub mod store;

pub use errors::{TrainingResult, TrainingStoreError};
pub use models::{SampleId, SampleOutcome, TrainingSample, TrainingStats};
pub use store::{InMemoryTrainingStore, TrainingSampleStore};
