//! OpenAI chat completion implementation.

use super::TextGenerator;
use crate::error::{CompanionError, Result};
use crate::openai::OpenAIClient;
use async_openai::types::{
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
    ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Chat-completion based text generator.
pub struct OpenAIGenerator {
    client: OpenAIClient,
    model: String,
    temperature: f32,
}

impl OpenAIGenerator {
    pub fn new(client: OpenAIClient, model: &str, temperature: f32) -> Self {
        Self {
            client,
            model: model.to_string(),
            temperature,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAIGenerator {
    #[instrument(skip(self, system, user), fields(model = %self.model, prompt_chars = user.len()))]
    async fn generate(&self, system: &str, user: &str) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system)
                .build()
                .map_err(|e| CompanionError::Generation(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user)
                .build()
                .map_err(|e| CompanionError::Generation(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .build()
            .map_err(|e| CompanionError::Generation(e.to_string()))?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            CompanionError::OpenAI(format!("Failed to generate response: {}", e))
        })?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.as_ref())
            .ok_or_else(|| CompanionError::Generation("Empty response from LLM".to_string()))?
            .clone();

        debug!("Generated {} characters", content.len());
        Ok(content)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
