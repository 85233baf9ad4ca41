//! In-memory vector store implementation.

use super::{cosine_similarity, Document, SearchResult, VectorStore};
use crate::error::{CompanionError, Result};
use async_trait::async_trait;
use std::sync::RwLock;

/// In-memory vector store with exhaustive cosine search.
///
/// Documents keep their insertion order, which breaks score ties.
pub struct MemoryVectorStore {
    documents: RwLock<Vec<Document>>,
}

impl MemoryVectorStore {
    /// Create a new in-memory vector store.
    pub fn new() -> Self {
        Self {
            documents: RwLock::new(Vec::new()),
        }
    }
}

impl Default for MemoryVectorStore {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned<T>(_: T) -> CompanionError {
    CompanionError::VectorStore("store lock poisoned".to_string())
}

#[async_trait]
impl VectorStore for MemoryVectorStore {
    async fn upsert_batch(&self, docs: Vec<Document>) -> Result<usize> {
        let count = docs.len();
        let mut store = self.documents.write().map_err(poisoned)?;
        store.extend(docs);
        Ok(count)
    }

    async fn search(&self, query_embedding: &[f32], limit: usize) -> Result<Vec<SearchResult>> {
        self.search_with_threshold(query_embedding, limit, f32::NEG_INFINITY)
            .await
    }

    async fn search_with_threshold(
        &self,
        query_embedding: &[f32],
        limit: usize,
        min_score: f32,
    ) -> Result<Vec<SearchResult>> {
        let docs = self.documents.read().map_err(poisoned)?;

        let mut results: Vec<SearchResult> = docs
            .iter()
            .map(|doc| SearchResult {
                document: doc.clone(),
                score: cosine_similarity(query_embedding, &doc.embedding),
            })
            .filter(|r| r.score >= min_score)
            .collect();

        // Stable sort keeps insertion order among equal scores
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results.truncate(limit);

        Ok(results)
    }

    async fn document_count(&self) -> Result<usize> {
        let docs = self.documents.read().map_err(poisoned)?;
        Ok(docs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::Chunk;

    fn doc(text: &str, order: usize, embedding: Vec<f32>) -> Document {
        Document::new(Chunk::new(text.to_string(), order * 10, order), embedding)
    }

    #[tokio::test]
    async fn test_memory_vector_store() {
        let store = MemoryVectorStore::new();

        store
            .upsert_batch(vec![
                doc("Hello world", 0, vec![1.0, 0.0, 0.0]),
                doc("Goodbye world", 1, vec![0.0, 1.0, 0.0]),
            ])
            .await
            .unwrap();

        assert_eq!(store.document_count().await.unwrap(), 2);

        let results = store.search(&[1.0, 0.0, 0.0], 10).await.unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].document.content, "Hello world");
        assert!(results[0].score > results[1].score);
    }

    #[tokio::test]
    async fn test_threshold_and_limit() {
        let store = MemoryVectorStore::new();
        store
            .upsert_batch(vec![
                doc("a", 0, vec![1.0, 0.0]),
                doc("b", 1, vec![0.9, 0.1]),
                doc("c", 2, vec![0.0, 1.0]),
            ])
            .await
            .unwrap();

        let results = store
            .search_with_threshold(&[1.0, 0.0], 5, 0.5)
            .await
            .unwrap();
        let texts: Vec<&str> = results.iter().map(|r| r.document.content.as_str()).collect();
        assert_eq!(texts, vec!["a", "b"]);

        let results = store.search(&[1.0, 0.0], 1).await.unwrap();
        assert_eq!(results.len(), 1);
    }

    #[tokio::test]
    async fn test_ties_keep_insertion_order() {
        let store = MemoryVectorStore::new();
        store
            .upsert_batch(vec![
                doc("first", 0, vec![0.0, 1.0]),
                doc("second", 1, vec![0.0, 1.0]),
                doc("third", 2, vec![0.0, 1.0]),
            ])
            .await
            .unwrap();

        for _ in 0..3 {
            let results = store.search(&[0.0, 1.0], 3).await.unwrap();
            let texts: Vec<&str> = results.iter().map(|r| r.document.content.as_str()).collect();
            assert_eq!(texts, vec!["first", "second", "third"]);
        }
    }
}
