//! Character Client
//!
//! Owns one character id, downloads its record on first use and keeps it for
//! the rest of its lifetime. Views are projected from the cached record;
//! generation methods compose prompts from those views and hand them to a
//! [`TextGenerator`].
//!
//! # Lifecycle
//!
//! ```text
//! Unfetched --(successful fetch)--> Fetched
//!     ^   |
//!     +---+ (failed fetch)
//! ```
//!
//! `Fetched` is terminal: accessors never download again once it is reached.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::prompt;
use crate::domain::{AppearanceView, CharacterError, CharacterRecord, PersonalityView};
use crate::ports::{CompletionOptions, TextGenerator};
use crate::services::DndBeyondApi;

enum RecordState {
    Unfetched,
    Fetched {
        record: Arc<CharacterRecord>,
        name: String,
    },
}

impl RecordState {
    fn store(&mut self, record: CharacterRecord) -> (Arc<CharacterRecord>, String) {
        let name = record.name();
        let record = Arc::new(record);
        *self = RecordState::Fetched {
            record: Arc::clone(&record),
            name: name.clone(),
        };
        (record, name)
    }
}

/// Client for a single D&D Beyond character
pub struct CharacterClient<G: TextGenerator> {
    character_id: u64,
    api: DndBeyondApi,
    generator: Arc<G>,
    options: CompletionOptions,
    // Held across the download so at most one fetch is in flight
    state: Mutex<RecordState>,
}

impl<G: TextGenerator> CharacterClient<G> {
    /// Create a client. Nothing is downloaded until a view is requested.
    pub fn new(character_id: u64, generator: Arc<G>) -> Self {
        Self {
            character_id,
            api: DndBeyondApi::new(),
            generator,
            options: CompletionOptions::default(),
            state: Mutex::new(RecordState::Unfetched),
        }
    }

    /// Use a differently configured character service
    pub fn with_api(mut self, api: DndBeyondApi) -> Self {
        self.api = api;
        self
    }

    /// Override the generation parameters
    pub fn with_options(mut self, options: CompletionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn character_id(&self) -> u64 {
        self.character_id
    }

    pub async fn is_fetched(&self) -> bool {
        matches!(*self.state.lock().await, RecordState::Fetched { .. })
    }

    /// Character name, once the record has been downloaded
    pub async fn name(&self) -> Option<String> {
        match &*self.state.lock().await {
            RecordState::Fetched { name, .. } => Some(name.clone()),
            RecordState::Unfetched => None,
        }
    }

    /// Download the record unconditionally and cache it.
    ///
    /// On failure the client stays unfetched and the next accessor retries.
    pub async fn fetch_record(&self) -> Result<Arc<CharacterRecord>, CharacterError> {
        let mut state = self.state.lock().await;
        let record = self.api.fetch(self.character_id).await?;
        let (record, name) = state.store(record);
        tracing::info!(character_id = self.character_id, name = %name, "Character data cached");
        Ok(record)
    }

    async fn ensure_record(&self) -> Result<(Arc<CharacterRecord>, String), CharacterError> {
        let mut state = self.state.lock().await;
        if let RecordState::Fetched { record, name } = &*state {
            return Ok((Arc::clone(record), name.clone()));
        }

        let record = self.api.fetch(self.character_id).await?;
        let (record, name) = state.store(record);
        tracing::info!(character_id = self.character_id, name = %name, "Character data cached");
        Ok((record, name))
    }

    pub async fn appearance(&self) -> Result<AppearanceView, CharacterError> {
        let (record, _) = self.ensure_record().await?;
        Ok(AppearanceView::from_record(&record))
    }

    pub async fn personality(&self) -> Result<PersonalityView, CharacterError> {
        let (record, _) = self.ensure_record().await?;
        Ok(PersonalityView::from_record(&record))
    }

    /// Backstory written on the character sheet, or `"Unknown"`
    pub async fn backstory(&self) -> Result<String, CharacterError> {
        let (record, _) = self.ensure_record().await?;
        Ok(record.text(&["notes", "backstory"]))
    }

    /// Generate a physical description.
    ///
    /// Both prompt slots carry the appearance view; the personality view is
    /// not consulted here.
    pub async fn generate_description(&self) -> Result<String, CharacterError> {
        let appearance = self.appearance().await?;
        let context = self.appearance().await?;

        let prompt = prompt::description_prompt(&appearance, &context);
        self.generate(&prompt).await
    }

    /// Generate a backstory from identity, personality and any existing backstory
    pub async fn generate_backstory(&self) -> Result<String, CharacterError> {
        let (record, name) = self.ensure_record().await?;
        let appearance = AppearanceView::from_record(&record);
        let personality = PersonalityView::from_record(&record);
        let existing = record.text(&["notes", "backstory"]);

        let prompt = prompt::backstory_prompt(&name, &appearance, &personality, &existing);
        self.generate(&prompt).await
    }

    /// Three lines: name, `"<gender> <race>"`, and class levels
    pub async fn to_display_string(&self) -> Result<String, CharacterError> {
        let appearance = self.appearance().await?;
        let personality = self.personality().await?;
        let name = self.name().await.unwrap_or_default();

        Ok(format!(
            "{}\n{} {}\n{}",
            name, appearance.gender, appearance.race, personality.class_levels
        ))
    }

    async fn generate(&self, prompt: &str) -> Result<String, CharacterError> {
        tracing::debug!(
            character_id = self.character_id,
            provider = self.generator.provider_name(),
            model = self.generator.model_id(),
            prompt_len = prompt.len(),
            "Generating text"
        );

        let text = self.generator.complete(prompt, &self.options).await?;
        Ok(text.trim().to_string())
    }
}
