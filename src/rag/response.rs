//! RAG response generation.

use super::{context::format_context_for_prompt, ContextBuilder, ContextChunk};
use crate::config::{Prompts, FALLBACK_ANSWER};
use crate::error::{CompanionError, Result};
use crate::llm::TextGenerator;
use crate::vector_store::TranscriptIndex;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Answers questions from a transcript index.
pub struct RagEngine {
    generator: Arc<dyn TextGenerator>,
    context_builder: ContextBuilder,
    prompts: Prompts,
}

impl RagEngine {
    /// Create a new RAG engine.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        index: TranscriptIndex,
        top_k: usize,
        min_score: Option<f32>,
    ) -> Self {
        let context_builder = ContextBuilder::new(index)
            .with_top_k(top_k)
            .with_min_score(min_score);

        Self {
            generator,
            context_builder,
            prompts: Prompts::default(),
        }
    }

    /// Set custom prompts (with user-defined variables).
    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Answer one question from the retrieved context.
    #[instrument(skip(self, question), fields(question = %question))]
    pub async fn answer(&self, question: &str) -> Result<RagResponse> {
        let question = question.trim();
        if question.is_empty() {
            return Err(CompanionError::InvalidInput("Question is empty".to_string()));
        }

        info!("Processing question with {}", self.generator.model());

        let context_chunks = self.context_builder.build(question).await?;

        if context_chunks.is_empty() {
            debug!("No context retrieved, answering with fallback");
            return Ok(RagResponse {
                answer: FALLBACK_ANSWER.to_string(),
                sources: Vec::new(),
            });
        }

        let mut vars = HashMap::new();
        vars.insert("question".to_string(), question.to_string());
        vars.insert("context".to_string(), format_context_for_prompt(&context_chunks));
        vars.insert("fallback".to_string(), FALLBACK_ANSWER.to_string());

        let system = self.prompts.render_with_custom(&self.prompts.rag.system, &vars);
        let user = self.prompts.render_with_custom(&self.prompts.rag.user, &vars);

        let answer = self
            .generator
            .generate(&system, &user)
            .await
            .map_err(|e| CompanionError::Rag(e.to_string()))?;

        debug!("Generated response with {} sources", context_chunks.len());

        Ok(RagResponse {
            answer,
            sources: context_chunks,
        })
    }
}

/// A RAG response with answer and sources.
#[derive(Debug, Clone)]
pub struct RagResponse {
    /// The generated answer.
    pub answer: String,
    /// Chunks the answer was generated from, best first.
    pub sources: Vec<ContextChunk>,
}

impl RagResponse {
    /// Whether the answer is the fixed not-found reply.
    pub fn is_fallback(&self) -> bool {
        self.answer.trim() == FALLBACK_ANSWER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunking::Chunk;
    use crate::embedding::Embedder;
    use crate::testing::{KeywordEmbedder, ScriptedGenerator};
    use crate::vector_store::IndexBuilder;

    const VOCAB: &[&str] = &["rust", "ownership", "borrow", "tokio", "async", "pizza"];

    async fn index(texts: &[&str]) -> TranscriptIndex {
        let embedder: Arc<dyn Embedder> = Arc::new(KeywordEmbedder::new(VOCAB));
        let chunks = texts
            .iter()
            .enumerate()
            .map(|(i, t)| Chunk::new(t.to_string(), i * 50, i))
            .collect();
        IndexBuilder::new(embedder).build(chunks).await.unwrap()
    }

    #[tokio::test]
    async fn test_answer_uses_top_chunks_as_context() {
        let generator = Arc::new(ScriptedGenerator::new(&["Ownership moves values."]));
        let index = index(&[
            "rust ownership rules",
            "tokio runs async code",
            "borrow rules in rust",
            "rust rust everywhere",
            "ownership of async rust tasks",
        ])
        .await;

        let engine = RagEngine::new(generator.clone(), index, 4, None);
        let response = engine.answer("what is rust ownership?").await.unwrap();

        assert_eq!(response.answer, "Ownership moves values.");
        assert_eq!(response.sources.len(), 4);
        assert_eq!(response.sources[0].content, "rust ownership rules");

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        let expected_context = response
            .sources
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        assert!(calls[0].user.contains(&format!("Context: {}", expected_context)));
        assert!(calls[0].user.contains("User Question: what is rust ownership?"));
        assert!(calls[0].system.contains(FALLBACK_ANSWER));
    }

    #[tokio::test]
    async fn test_unrelated_question_is_left_to_the_model() {
        let generator = Arc::new(ScriptedGenerator::new(&[FALLBACK_ANSWER]));
        let index = index(&["rust ownership rules", "tokio runs async code"]).await;

        let engine = RagEngine::new(generator.clone(), index, 4, None);
        let response = engine.answer("where is the best pizza?").await.unwrap();

        assert_eq!(response.answer, FALLBACK_ANSWER);
        assert!(response.is_fallback());

        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].system.contains(FALLBACK_ANSWER));
        assert!(calls[0].user.contains("rust ownership rules"));
    }

    #[tokio::test]
    async fn test_weakly_matching_chunk_still_reaches_the_model() {
        let generator = Arc::new(ScriptedGenerator::new(&["Ownership means one owner."]));
        let index = index(&["tokio tokio tokio async async async and ownership means one owner"]).await;

        let engine = RagEngine::new(generator.clone(), index, 4, None);
        let response = engine.answer("what is ownership").await.unwrap();

        assert!(response.sources[0].score < 0.3);
        assert_eq!(response.answer, "Ownership means one owner.");
        assert_eq!(generator.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_threshold_short_circuits_when_configured() {
        let generator = Arc::new(ScriptedGenerator::new(&["should not be used"]));
        let index = index(&["rust ownership rules", "tokio runs async code"]).await;

        let engine = RagEngine::new(generator.clone(), index, 4, Some(0.3));
        let response = engine.answer("where is the best pizza?").await.unwrap();

        assert_eq!(response.answer, FALLBACK_ANSWER);
        assert!(response.sources.is_empty());
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_empty_index_returns_fallback_without_model_call() {
        let generator = Arc::new(ScriptedGenerator::new(&[]));
        let engine = RagEngine::new(generator.clone(), index(&[]).await, 4, None);

        let response = engine.answer("anything?").await.unwrap();
        assert!(response.is_fallback());
        assert!(generator.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_is_reported() {
        let generator = Arc::new(ScriptedGenerator::new(&[]).then_fail("quota exceeded"));
        let index = index(&["rust ownership rules"]).await;

        let engine = RagEngine::new(generator, index, 4, None);
        let err = engine.answer("rust?").await.unwrap_err();

        assert!(matches!(err, CompanionError::Rag(_)));
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected() {
        let generator = Arc::new(ScriptedGenerator::new(&[]));
        let engine = RagEngine::new(generator, index(&["rust"]).await, 4, None);
        assert!(matches!(
            engine.answer("   ").await,
            Err(CompanionError::InvalidInput(_))
        ));
    }
}
