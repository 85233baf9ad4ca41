//! RAG (Retrieval-Augmented Generation) for question answering over a transcript.

pub mod context;
mod response;

pub use context::ContextBuilder;
pub use response::{RagEngine, RagResponse};

use crate::vector_store::SearchResult;

/// A retrieved chunk used as answer context.
#[derive(Debug, Clone)]
pub struct ContextChunk {
    /// Text content.
    pub content: String,
    /// Similarity score.
    pub score: f32,
    /// Splitting order of the source chunk.
    pub chunk_order: usize,
}

impl From<SearchResult> for ContextChunk {
    fn from(result: SearchResult) -> Self {
        Self {
            content: result.document.content,
            score: result.score,
            chunk_order: result.document.chunk_order,
        }
    }
}
