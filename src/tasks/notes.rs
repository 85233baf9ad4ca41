//! Structured note generation.

use super::run_prompt;
use crate::config::Prompts;
use crate::error::{CompanionError, Result};
use crate::llm::TextGenerator;
use std::sync::Arc;
use tracing::instrument;

/// Writes sectioned, bulleted notes restricted to the transcript content.
pub struct NoteTaker {
    generator: Arc<dyn TextGenerator>,
    prompts: Prompts,
}

impl NoteTaker {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            prompts: Prompts::default(),
        }
    }

    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    #[instrument(skip(self, transcript))]
    pub async fn write_notes(&self, transcript: &str) -> Result<String> {
        run_prompt(self.generator.as_ref(), &self.prompts, &self.prompts.notes, transcript)
            .await
            .map_err(|e| CompanionError::Generation(format!("Error generating notes: {}", e)))
    }
}
