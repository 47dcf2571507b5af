use thiserror::Error;

/// Gambit Error type
#[derive(Debug, Error)]
pub enum GambitError {
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Query error: {0}")]
    Query(#[from] crate::query::QueryError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Gambit Result type
pub type GambitResult<T> = Result<T, GambitError>;
