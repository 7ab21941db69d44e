//! D&D Beyond character service

use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::domain::{CharacterError, CharacterRecord};

pub const DEFAULT_BASE_URL: &str = "https://character-service.dndbeyond.com/character/v3/character/";

/// HTTP client for the character service
#[derive(Clone)]
pub struct DndBeyondApi {
    client: Client,
    base_url: String,
}

impl DndBeyondApi {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// The character id is appended directly, so `base_url` should end in `/`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn character_url(&self, character_id: u64) -> String {
        format!("{}{}", self.base_url, character_id)
    }

    /// Download one character record. Only `200 OK` counts as success.
    pub async fn fetch(&self, character_id: u64) -> Result<CharacterRecord, CharacterError> {
        let url = self.character_url(character_id);
        tracing::info!(character_id, "Downloading character data");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| CharacterError::Request(err.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(character_id, status = status.as_u16(), "Character service refused");
            return Err(CharacterError::Fetch {
                status: status.as_u16(),
            });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| CharacterError::Parse(err.to_string()))?;

        CharacterRecord::from_payload(payload)
            .ok_or_else(|| CharacterError::Parse("response has no data object".to_string()))
    }
}

impl Default for DndBeyondApi {
    fn default() -> Self {
        Self::new()
    }
}
