//! Domain Errors
//!
//! Error types for character fetching, text generation and configuration.

use thiserror::Error;

/// Errors surfaced by the text-generation collaborator
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Text generation returned no choices")]
    EmptyResponse,
}

/// Character client errors
#[derive(Debug, Error)]
pub enum CharacterError {
    /// The character service answered with a non-OK status
    #[error("Error: {status} - Could not download character data")]
    Fetch { status: u16 },

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Could not parse character data: {0}")]
    Parse(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl CharacterError {
    /// Status code reported by the character service, if this is a fetch failure
    pub fn status(&self) -> Option<u16> {
        match self {
            CharacterError::Fetch { status } => Some(*status),
            _ => None,
        }
    }
}

/// Startup configuration errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}
