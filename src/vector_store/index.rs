//! Building a searchable index from transcript chunks.

use super::{Document, MemoryVectorStore, SearchResult, VectorStore};
use crate::chunking::Chunk;
use crate::embedding::Embedder;
use crate::error::{CompanionError, Result};
use std::sync::Arc;
use tracing::{info, instrument};

/// Embeds chunks and loads them into a fresh vector store.
pub struct IndexBuilder {
    embedder: Arc<dyn Embedder>,
}

impl IndexBuilder {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }

    /// Build an index over the chunks.
    ///
    /// Fails as a whole if any embedding cannot be produced.
    #[instrument(skip(self, chunks), fields(chunks = chunks.len()))]
    pub async fn build(&self, chunks: Vec<Chunk>) -> Result<TranscriptIndex> {
        let store: Arc<dyn VectorStore> = Arc::new(MemoryVectorStore::new());

        if chunks.is_empty() {
            return Ok(TranscriptIndex::new(self.embedder.clone(), store));
        }

        let texts: Vec<String> = chunks.iter().map(|c| c.text.clone()).collect();
        let embeddings = self.embedder.embed_batch(&texts).await?;

        if embeddings.len() != chunks.len() {
            return Err(CompanionError::Embedding(format!(
                "Expected {} embeddings, got {}",
                chunks.len(),
                embeddings.len()
            )));
        }

        let expected = self.embedder.dimensions();
        if let Some(bad) = embeddings.iter().find(|e| e.len() != expected) {
            return Err(CompanionError::Embedding(format!(
                "Expected {}-dimensional embeddings, got {}",
                expected,
                bad.len()
            )));
        }

        let documents: Vec<Document> = chunks
            .into_iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| Document::new(chunk, embedding))
            .collect();

        let count = store.upsert_batch(documents).await?;
        info!("Indexed {} chunks", count);

        Ok(TranscriptIndex::new(self.embedder.clone(), store))
    }
}

/// A built vector store queried by text.
#[derive(Clone)]
pub struct TranscriptIndex {
    embedder: Arc<dyn Embedder>,
    store: Arc<dyn VectorStore>,
}

impl TranscriptIndex {
    pub fn new(embedder: Arc<dyn Embedder>, store: Arc<dyn VectorStore>) -> Self {
        Self { embedder, store }
    }

    /// The `k` chunks most similar to the query, best first.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        let query_embedding = self.embedder.embed(query).await?;
        self.store.search(&query_embedding, k).await
    }

    /// Like [`search`](Self::search), dropping results below `min_score`.
    pub async fn search_with_threshold(
        &self,
        query: &str,
        k: usize,
        min_score: f32,
    ) -> Result<Vec<SearchResult>> {
        let query_embedding = self.embedder.embed(query).await?;
        self.store
            .search_with_threshold(&query_embedding, k, min_score)
            .await
    }

    /// Number of indexed chunks.
    pub async fn len(&self) -> Result<usize> {
        self.store.document_count().await
    }

    pub async fn is_empty(&self) -> Result<bool> {
        Ok(self.len().await? == 0)
    }
}
