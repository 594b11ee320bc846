//! Training store error types.

use thiserror::Error;

use super::models::SampleId;

/// Training store errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TrainingStoreError {
    /// Sample ID already stored
    #[error("Duplicate training sample: {0}")]
    DuplicateSample(SampleId),

    /// Sample not found
    #[error("Training sample not found: {0}")]
    SampleNotFound(SampleId),
}

/// Result type for training store operations
pub type TrainingResult<T> = Result<T, TrainingStoreError>;
