//! Engine configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.
//!
//! | variable                             | default |
//! |--------------------------------------|---------|
//! | `PP_ADVISOR_GTO_FOLD_TO_CALL`        | 0.10    |
//! | `PP_ADVISOR_GTO_CALL_TO_RAISE`       | 0.30    |
//! | `PP_ADVISOR_GTO_BLUFF_CATCH`         | 0.05    |
//! | `PP_ADVISOR_GTO_RAISE_TO_ALL_IN`     | 0.20    |
//! | `PP_ADVISOR_GTO_SEMI_BLUFF_RAISE`    | 0.05    |
//! | `PP_ADVISOR_GTO_ALL_IN_COMMIT`       | 0.50    |
//! | `PP_ADVISOR_GTO_SEMI_BLUFF_ALL_IN`   | 0.10    |
//! | `PP_ADVISOR_OPPONENT_CATALOG`        | built-in catalog |

use log::warn;
use std::path::PathBuf;

use crate::analysis::GtoProbabilities;
use crate::bot::{BotError, OpponentCatalog};

/// Prefix for the balanced-style probability variables
pub const GTO_ENV_PREFIX: &str = "PP_ADVISOR_GTO_";

/// Path to a JSON opponent catalog
pub const CATALOG_ENV: &str = "PP_ADVISOR_OPPONENT_CATALOG";

/// Complete engine configuration
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Balanced-style mixing probabilities
    pub gto: GtoProbabilities,
    /// Opponent catalog file; the built-in catalog when unset
    pub catalog_path: Option<PathBuf>,
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },

    #[error("Failed to read opponent catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid opponent catalog: {0}")]
    Catalog(BotError),
}

fn gto_var(name: &str) -> String {
    format!("{GTO_ENV_PREFIX}{}", name.to_uppercase())
}

impl EngineConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if a probability doesn't parse or
    /// falls outside `[0.0, 1.0]`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GtoProbabilities::default();
        let probability =
            |name: &str, default: f32| parse_var_or(&lookup, &gto_var(name), default);

        let gto = GtoProbabilities {
            fold_to_call: probability("fold_to_call", defaults.fold_to_call)?,
            call_to_raise: probability("call_to_raise", defaults.call_to_raise)?,
            bluff_catch: probability("bluff_catch", defaults.bluff_catch)?,
            raise_to_all_in: probability("raise_to_all_in", defaults.raise_to_all_in)?,
            semi_bluff_raise: probability("semi_bluff_raise", defaults.semi_bluff_raise)?,
            all_in_commit: probability("all_in_commit", defaults.all_in_commit)?,
            semi_bluff_all_in: probability("semi_bluff_all_in", defaults.semi_bluff_all_in)?,
        };

        let catalog_path = match lookup(CATALOG_ENV) {
            Some(path) if !path.trim().is_empty() => Some(PathBuf::from(path.trim())),
            Some(_) => {
                warn!("{CATALOG_ENV} is empty, using the built-in opponent catalog");
                None
            }
            None => None,
        };

        let config = EngineConfig { gto, catalog_path };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gto.validate().map_err(|err| ConfigError::Invalid {
            var: gto_var(err.name),
            reason: err.to_string(),
        })
    }

    /// Load the configured opponent catalog
    pub fn load_catalog(&self) -> Result<OpponentCatalog, ConfigError> {
        let Some(path) = &self.catalog_path else {
            return Ok(OpponentCatalog::default());
        };

        OpponentCatalog::load(path).map_err(|err| match err {
            BotError::Io(source) => ConfigError::Io {
                path: path.clone(),
                source,
            },
            other => ConfigError::Catalog(other),
        })
    }
}

/// Helper to parse a variable with default fallback when unset
fn parse_var_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("Cannot parse {value:?}"),
        }),
    }
}
