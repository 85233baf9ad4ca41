//! Context building for RAG responses.

use super::ContextChunk;
use crate::error::Result;
use crate::vector_store::TranscriptIndex;
use tracing::debug;

/// Retrieves the chunks a question is answered from.
pub struct ContextBuilder {
    index: TranscriptIndex,
    top_k: usize,
    min_score: Option<f32>,
}

impl ContextBuilder {
    /// Create a new context builder.
    pub fn new(index: TranscriptIndex) -> Self {
        Self {
            index,
            top_k: 4,
            min_score: None,
        }
    }

    /// Set the number of chunks retrieved per question.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Set an optional minimum similarity score threshold.
    pub fn with_min_score(mut self, min_score: Option<f32>) -> Self {
        self.min_score = min_score;
        self
    }

    /// Retrieve context for a query, best match first.
    pub async fn build(&self, query: &str) -> Result<Vec<ContextChunk>> {
        let results = match self.min_score {
            Some(min_score) => {
                self.index
                    .search_with_threshold(query, self.top_k, min_score)
                    .await?
            }
            None => self.index.search(query, self.top_k).await?,
        };

        debug!("Retrieved {} context chunks", results.len());

        Ok(results.into_iter().map(ContextChunk::from).collect())
    }
}

/// Join context chunks in rank order with single spaces.
pub fn format_context_for_prompt(chunks: &[ContextChunk]) -> String {
    chunks
        .iter()
        .map(|chunk| chunk.content.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunk(content: &str, score: f32) -> ContextChunk {
        ContextChunk {
            content: content.to_string(),
            score,
            chunk_order: 0,
        }
    }

    #[test]
    fn test_format_context_joins_in_rank_order() {
        let chunks = vec![chunk("best match.", 0.9), chunk("runner up.", 0.5)];
        assert_eq!(format_context_for_prompt(&chunks), "best match. runner up.");
    }

    #[test]
    fn test_format_empty_context() {
        assert_eq!(format_context_for_prompt(&[]), "");
    }
}
