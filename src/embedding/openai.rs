//! OpenAI embeddings implementation.

use super::Embedder;
use crate::error::{CompanionError, Result};
use crate::openai::OpenAIClient;
use async_openai::types::{CreateEmbeddingRequestArgs, EmbeddingInput};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Inputs per embeddings request.
const BATCH_SIZE: usize = 100;

/// OpenAI-based embedder.
pub struct OpenAIEmbedder {
    client: OpenAIClient,
    model: String,
    dimensions: usize,
}

impl OpenAIEmbedder {
    /// Create a new embedder on a shared client.
    pub fn new(client: OpenAIClient, model: &str, dimensions: usize) -> Self {
        Self {
            client,
            model: model.to_string(),
            dimensions,
        }
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    #[instrument(skip(self, text))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .into_iter()
            .next()
            .ok_or_else(|| CompanionError::Embedding("Empty embedding response".to_string()))
    }

    #[instrument(skip(self, texts), fields(count = texts.len()))]
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Generating embeddings for {} texts", texts.len());

        let mut all_embeddings = Vec::with_capacity(texts.len());

        for batch in texts.chunks(BATCH_SIZE) {
            let request = CreateEmbeddingRequestArgs::default()
                .model(&self.model)
                .input(EmbeddingInput::StringArray(batch.to_vec()))
                .dimensions(self.dimensions as u32)
                .build()
                .map_err(|e| CompanionError::Embedding(format!("Failed to build request: {}", e)))?;

            let response = self.client.embeddings().create(request).await.map_err(|e| {
                CompanionError::OpenAI(format!("Embedding API error: {}", e))
            })?;

            if response.data.len() != batch.len() {
                return Err(CompanionError::Embedding(format!(
                    "Expected {} embeddings, got {}",
                    batch.len(),
                    response.data.len()
                )));
            }

            // The API may return items out of order
            let mut embeddings: Vec<_> = response.data.into_iter().collect();
            embeddings.sort_by_key(|e| e.index);

            all_embeddings.extend(embeddings.into_iter().map(|e| e.embedding));
        }

        debug!("Generated {} embeddings", all_embeddings.len());
        Ok(all_embeddings)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_openai::config::OpenAIConfig;
    use std::time::Duration;

    fn client() -> OpenAIClient {
        crate::openai::create_client_with_timeout(
            OpenAIConfig::new().with_api_key("test-key"),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[test]
    fn test_embedder_creation() {
        let embedder = OpenAIEmbedder::new(client(), "text-embedding-3-small", 1536);
        assert_eq!(embedder.dimensions(), 1536);

        let embedder = OpenAIEmbedder::new(client(), "text-embedding-3-large", 3072);
        assert_eq!(embedder.dimensions(), 3072);
    }

    #[tokio::test]
    async fn test_empty_batch_makes_no_request() {
        let embedder = OpenAIEmbedder::new(client(), "text-embedding-3-small", 1536);
        let embeddings = embedder.embed_batch(&[]).await.unwrap();
        assert!(embeddings.is_empty());
    }
}
