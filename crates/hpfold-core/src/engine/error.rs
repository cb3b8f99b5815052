use super::config::ConfigError;
use crate::core::models::fold::FoldError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Initialization failed: {0}")]
    Initialization(String),

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Fold operation failed: {source}")]
    Fold {
        #[from]
        source: FoldError,
    },

    #[error("Internal logic error: {0}")]
    Internal(String),
}
