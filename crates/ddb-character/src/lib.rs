//! ddb-character
//!
//! Fetches a character sheet from D&D Beyond, projects it into appearance and
//! personality views, and asks a text-generation service for a description
//! or backstory.
//!
//! # Architecture
//!
//! - **Domain** (`domain/`): the raw record, derived views, prompt
//!   composition and error types. No I/O.
//! - **Ports** (`ports/`): the [`TextGenerator`] interface.
//! - **Services** (`services/`): reqwest clients for the character service
//!   and OpenAI completions.
//! - [`CharacterClient`]: the lazily-fetching client tying them together.
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ddb_character::{CharacterClient, Settings};
//!
//! let settings = Settings::from_env()?;
//! let client = CharacterClient::new(44962573, Arc::new(settings.text_generator()))
//!     .with_api(settings.character_api());
//!
//! println!("{}", client.to_display_string().await?);
//! println!("{}", client.generate_backstory().await?);
//! ```

pub mod client;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export commonly used types
pub use client::CharacterClient;
pub use config::Settings;
pub use domain::{
    AppearanceView, CharacterError, CharacterRecord, ConfigError, GenerationError,
    PersonalityView, UNKNOWN,
};
pub use ports::{CompletionOptions, TextGenerator};
pub use services::{DndBeyondApi, OpenAiCompletions};
