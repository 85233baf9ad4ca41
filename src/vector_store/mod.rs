//! Vector store abstraction for vidcompanion.
//!
//! Holds chunk embeddings for one transcript and answers nearest-neighbour
//! queries. Documents are only ever addressed by similarity.

mod index;
mod memory;

pub use index::{IndexBuilder, TranscriptIndex};
pub use memory::MemoryVectorStore;

use crate::chunking::Chunk;
use crate::error::Result;
use async_trait::async_trait;

/// A chunk stored together with its embedding.
#[derive(Debug, Clone)]
pub struct Document {
    /// Text content of the chunk.
    pub content: String,
    /// Byte offset of the chunk in the transcript.
    pub start_offset: usize,
    /// Splitting order of the chunk. Informational only.
    pub chunk_order: usize,
    /// Embedding vector.
    pub embedding: Vec<f32>,
}

impl Document {
    /// Create a document from a chunk and its embedding.
    pub fn new(chunk: Chunk, embedding: Vec<f32>) -> Self {
        Self {
            content: chunk.text,
            start_offset: chunk.start_offset,
            chunk_order: chunk.order,
            embedding,
        }
    }
}

/// A search result with score.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The matched document.
    pub document: Document,
    /// Cosine similarity (higher is better).
    pub score: f32,
}

/// Trait for vector store implementations.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Bulk insert documents.
    async fn upsert_batch(&self, docs: Vec<Document>) -> Result<usize>;

    /// Search for the `limit` most similar documents.
    async fn search(&self, query_embedding: &[f32], limit: usize) -> Result<Vec<SearchResult>>;

    /// Search with a minimum similarity threshold.
    async fn search_with_threshold(
        &self,
        query_embedding: &[f32],
        limit: usize,
        min_score: f32,
    ) -> Result<Vec<SearchResult>>;

    /// Get total document count.
    async fn document_count(&self) -> Result<usize>;
}

/// Compute cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}
