//! Transcript translation to English.

use super::run_prompt;
use crate::config::Prompts;
use crate::error::{CompanionError, Result};
use crate::llm::TextGenerator;
use crate::video_source::Transcript;
use std::sync::Arc;
use tracing::{info, instrument};

/// Translates transcripts into English with a fidelity-preserving prompt.
pub struct Translator {
    generator: Arc<dyn TextGenerator>,
    prompts: Prompts,
}

impl Translator {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            prompts: Prompts::default(),
        }
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Translate raw text into English.
    #[instrument(skip(self, text), fields(chars = text.len()))]
    pub async fn translate_text(&self, text: &str) -> Result<String> {
        run_prompt(self.generator.as_ref(), &self.prompts, &self.prompts.translate, text)
            .await
            .map_err(|e| CompanionError::Translation(e.to_string()))
    }

    /// Return the transcript in English, translating only when needed.
    pub async fn ensure_english(&self, transcript: Transcript) -> Result<Transcript> {
        if transcript.language.is_english() {
            return Ok(transcript);
        }

        info!(
            "Translating transcript {} from {} to English",
            transcript.video_id, transcript.language
        );
        let english = self.translate_text(&transcript.text).await?;
        Ok(transcript.into_translated(english))
    }
}
