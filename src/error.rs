//! Error types for the scoring engine.
//!
//! Respondent input never produces one of these. They signal broken static
//! configuration (catalog or scoring config) or I/O around it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// No primary profiles to match against.
    #[error("profile table is empty")]
    EmptyProfileTable,

    /// Structural problem in profile or sub-profile definitions.
    #[error("invalid profile catalog: {0}")]
    InvalidCatalog(String),

    /// Scoring configuration out of range.
    #[error("invalid scoring config: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScoringError {
    pub fn invalid_catalog(message: impl Into<String>) -> Self {
        Self::InvalidCatalog(message.into())
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Short error code for logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyProfileTable => "empty_profile_table",
            Self::InvalidCatalog(_) => "invalid_catalog",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Io(_) => "io_error",
            Self::Json(_) => "json_error",
        }
    }
}
