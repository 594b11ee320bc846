//! Analysis error types.

use thiserror::Error;

/// Player-assistant analysis errors
#[derive(Debug, Error, Eq, PartialEq)]
pub enum AnalysisError {
    /// Hole cards must be exactly two
    #[error("Invalid hole cards: expected 2, got {0}")]
    InvalidHoleCards(usize),

    /// Style is not one of the supported suggestion styles
    #[error("Invalid style: {0} (expected \"gto\" or \"professional\")")]
    InvalidStyle(String),
}

/// Result type for analysis operations
pub type AdvisorResult<T> = Result<T, AnalysisError>;
