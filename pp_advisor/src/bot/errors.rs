//! Bot error types.

use thiserror::Error;

use super::models::BotId;

/// Bot opponent errors
#[derive(Debug, Error)]
pub enum BotError {
    /// No hand in the profile's range parses into two cards
    #[error("No playable hand in range for opponent {0}")]
    EmptyHandRange(BotId),

    /// Opponent not in the catalog
    #[error("Opponent not found: {0}")]
    UnknownOpponent(BotId),

    /// Profile failed validation
    #[error("Invalid opponent profile {id}: {reason}")]
    InvalidProfile { id: BotId, reason: String },

    /// Duplicate profile id in a catalog
    #[error("Duplicate opponent id: {0}")]
    DuplicateOpponent(BotId),

    /// Catalog file could not be read
    #[error("Catalog I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not valid JSON
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// Result type for bot operations
pub type BotResult<T> = Result<T, BotError>;
