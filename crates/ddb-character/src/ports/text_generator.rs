//! Text Generator Port
//!
//! Abstract interface for the text-generation collaborator that turns a
//! prompt into a completion. Implementations can be swapped between
//! providers, or replaced with a fake in tests.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::errors::GenerationError;

/// Generation parameters sent with every prompt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionOptions {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
    /// Number of completions to request
    pub n: u32,
    /// Stop sequences
    pub stop: Option<Vec<String>>,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            temperature: 0.7,
            n: 1,
            stop: None,
        }
    }
}

/// Text generation interface
///
/// # Example
///
/// ```rust,ignore
/// use ddb_character::ports::{CompletionOptions, TextGenerator};
///
/// struct EchoGenerator;
///
/// #[async_trait]
/// impl TextGenerator for EchoGenerator {
///     async fn complete(&self, prompt: &str, _options: &CompletionOptions)
///         -> Result<String, GenerationError> {
///         Ok(prompt.to_string())
///     }
///     // ...
/// }
/// ```
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a completion for a single prompt.
    ///
    /// Returns the raw completion text; callers trim it.
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, GenerationError>;

    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Get the model ID being used
    fn model_id(&self) -> &str;
}
