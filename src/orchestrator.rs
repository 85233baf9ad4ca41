//! Pipeline orchestrator for vidcompanion.
//!
//! Coordinates transcript acquisition, translation, note generation and
//! chat-session construction.

use crate::chunking::{ChunkingConfig, RecursiveChunker};
use crate::config::{Prompts, Settings};
use crate::embedding::{Embedder, OpenAIEmbedder};
use crate::error::{CompanionError, Result};
use crate::llm::{OpenAIGenerator, TextGenerator};
use crate::openai::create_client;
use crate::rag::RagEngine;
use crate::session::ChatSession;
use crate::tasks::{parse_bullets, NoteTaker, TopicExtractor, Translator};
use crate::vector_store::IndexBuilder;
use crate::video_source::{
    extract_video_id, Language, Transcript, TranscriptFetcher, YoutubeTranscriptFetcher,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Number of topics the topic prompt asks for.
pub const EXPECTED_TOPIC_COUNT: usize = 5;

/// The main orchestrator for the companion pipeline.
pub struct Orchestrator {
    settings: Settings,
    prompts: Prompts,
    fetcher: Arc<dyn TranscriptFetcher>,
    generator: Arc<dyn TextGenerator>,
    embedder: Arc<dyn Embedder>,
}

impl Orchestrator {
    /// Create an orchestrator backed by YouTube captions and one shared API client.
    pub fn new(settings: Settings) -> Result<Self> {
        let prompts = Prompts::load(
            settings.prompts.custom_dir.as_deref(),
            Some(&settings.prompts.variables),
        )?;

        let client = create_client(&settings.api)?;

        let generator: Arc<dyn TextGenerator> = Arc::new(OpenAIGenerator::new(
            client.clone(),
            &settings.llm.model,
            settings.llm.temperature,
        ));

        let embedder: Arc<dyn Embedder> = Arc::new(OpenAIEmbedder::new(
            client,
            &settings.embedding.model,
            settings.embedding.dimensions as usize,
        ));

        let fetcher: Arc<dyn TranscriptFetcher> = Arc::new(YoutubeTranscriptFetcher::new()?);

        info!(
            "Using {} for generation and {} for embeddings",
            settings.llm.model, settings.embedding.model
        );

        Self::with_components(settings, prompts, fetcher, generator, embedder)
    }

    /// Create an orchestrator with custom components.
    pub fn with_components(
        settings: Settings,
        prompts: Prompts,
        fetcher: Arc<dyn TranscriptFetcher>,
        generator: Arc<dyn TextGenerator>,
        embedder: Arc<dyn Embedder>,
    ) -> Result<Self> {
        settings.validate()?;

        Ok(Self {
            settings,
            prompts,
            fetcher,
            generator,
            embedder,
        })
    }

    /// Fetch a transcript without translating it.
    #[instrument(skip(self))]
    pub async fn fetch_transcript(&self, url: &str, language: Language) -> Result<Transcript> {
        let video_id = extract_video_id(url)?;

        info!("Fetching transcript for {}", video_id);
        let transcript = self.fetcher.fetch(&video_id, language).await?;
        info!(
            "Fetched {} characters from {} caption fragments",
            transcript.char_count(),
            transcript.fragment_count
        );

        let delay = self.settings.transcript.fetch_delay_seconds;
        if delay > 0 {
            info!("Pausing {}s after transcript fetch", delay);
            tokio::time::sleep(Duration::from_secs(delay)).await;
        }

        Ok(transcript)
    }

    /// Fetch a transcript and return it in English.
    pub async fn prepare_transcript(&self, url: &str, language: Language) -> Result<Transcript> {
        let transcript = self.fetch_transcript(url, language).await?;
        self.translator().ensure_english(transcript).await
    }

    /// Translate a fetched transcript to English when needed.
    pub async fn translate(&self, transcript: Transcript) -> Result<Transcript> {
        self.translator().ensure_english(transcript).await
    }

    /// Generate key topics and notes for an English transcript.
    #[instrument(skip(self, transcript), fields(video_id = %transcript.video_id))]
    pub async fn study_notes(&self, transcript: &Transcript) -> Result<StudyNotes> {
        ensure_english(transcript)?;

        let topics = TopicExtractor::new(self.generator.clone())
            .with_prompts(self.prompts.clone())
            .extract(&transcript.text)
            .await?;

        let topic_count = parse_bullets(&topics).len();
        if topic_count != EXPECTED_TOPIC_COUNT {
            warn!(
                "Expected {} topics, model returned {}",
                EXPECTED_TOPIC_COUNT, topic_count
            );
        }

        let notes = NoteTaker::new(self.generator.clone())
            .with_prompts(self.prompts.clone())
            .write_notes(&transcript.text)
            .await?;

        Ok(StudyNotes { topics, notes })
    }

    /// Chunk and index an English transcript, returning a chat session over it.
    #[instrument(skip(self, transcript), fields(video_id = %transcript.video_id))]
    pub async fn start_chat(&self, transcript: &Transcript) -> Result<ChatSession> {
        ensure_english(transcript)?;

        let chunker = RecursiveChunker::new(ChunkingConfig::from(&self.settings.chunking))?;
        let chunks = chunker.chunk(&transcript.text);

        if chunks.is_empty() {
            return Err(CompanionError::InvalidInput(format!(
                "Transcript for {} is empty; nothing to index",
                transcript.video_id
            )));
        }

        info!("Created {} chunks", chunks.len());
        let chunk_count = chunks.len();

        let index = IndexBuilder::new(self.embedder.clone()).build(chunks).await?;

        let engine = RagEngine::new(
            self.generator.clone(),
            index,
            self.settings.rag.top_k,
            self.settings.rag.min_score,
        )
        .with_prompts(self.prompts.clone());

        Ok(ChatSession::new(
            transcript.video_id.clone(),
            engine,
            chunk_count,
        ))
    }

    fn translator(&self) -> Translator {
        Translator::new(self.generator.clone()).with_prompts(self.prompts.clone())
    }
}

fn ensure_english(transcript: &Transcript) -> Result<()> {
    if transcript.language.is_english() {
        Ok(())
    } else {
        Err(CompanionError::InvalidInput(format!(
            "Transcript for {} is in '{}'; translate it to English first",
            transcript.video_id, transcript.language
        )))
    }
}

/// Topics and notes for one video.
#[derive(Debug, Clone, Serialize)]
pub struct StudyNotes {
    /// Bulleted list of key topics.
    pub topics: String,
    /// Sectioned notes.
    pub notes: String,
}
