//! Process-wide configuration
//!
//! Read once at startup from the environment (and `.env`, if present).

use crate::domain::ConfigError;
use crate::services::{dndbeyond, openai, DndBeyondApi, OpenAiCompletions};

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
pub const OPENAI_API_BASE: &str = "OPENAI_API_BASE";
pub const CHARACTER_BASE_URL: &str = "DDB_CHARACTER_BASE_URL";

/// Runtime settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_api_base: String,
    pub character_base_url: String,
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// A missing `OPENAI_API_KEY` is fatal.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let openai_api_key = non_empty(OPENAI_API_KEY).ok_or(ConfigError::MissingVar(OPENAI_API_KEY))?;

        Ok(Self {
            openai_api_key,
            openai_model: non_empty(OPENAI_MODEL).unwrap_or_else(|| openai::DEFAULT_MODEL.to_string()),
            openai_api_base: non_empty(OPENAI_API_BASE)
                .unwrap_or_else(|| openai::DEFAULT_API_BASE.to_string()),
            character_base_url: non_empty(CHARACTER_BASE_URL)
                .unwrap_or_else(|| dndbeyond::DEFAULT_BASE_URL.to_string()),
        })
    }

    /// Text generator configured from these settings
    pub fn text_generator(&self) -> OpenAiCompletions {
        OpenAiCompletions::new(&self.openai_api_key)
            .with_model(&self.openai_model)
            .with_api_base(&self.openai_api_base)
    }

    /// Character service client configured from these settings
    pub fn character_api(&self) -> DndBeyondApi {
        DndBeyondApi::with_base_url(&self.character_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::TextGenerator;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Settings::from_lookup(lookup(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required environment variable: OPENAI_API_KEY"
        );
    }

    #[test]
    fn test_blank_api_key_is_missing() {
        assert!(Settings::from_lookup(lookup(&[(OPENAI_API_KEY, "  ")])).is_err());
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[(OPENAI_API_KEY, "sk-test")])).unwrap();
        assert_eq!(settings.openai_api_key, "sk-test");
        assert_eq!(settings.openai_model, openai::DEFAULT_MODEL);
        assert_eq!(settings.openai_api_base, openai::DEFAULT_API_BASE);
        assert_eq!(settings.character_base_url, dndbeyond::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup(&[
            (OPENAI_API_KEY, "sk-test"),
            (OPENAI_MODEL, "davinci-002"),
            (CHARACTER_BASE_URL, "http://localhost:9000/character/"),
        ]))
        .unwrap();

        assert_eq!(settings.text_generator().model_id(), "davinci-002");
        assert_eq!(
            settings.character_api().character_url(7),
            "http://localhost:9000/character/7"
        );
    }
}
