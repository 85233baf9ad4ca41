//! Deterministic stand-ins for the remote services, used by unit tests.

use crate::embedding::Embedder;
use crate::error::{CompanionError, Result};
use crate::llm::TextGenerator;
use crate::video_source::{CaptionFragment, Language, TranscriptFetcher, VideoId};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Embeds text as keyword counts over a fixed vocabulary.
///
/// Texts sharing no vocabulary word have zero similarity.
pub struct KeywordEmbedder {
    vocabulary: Vec<String>,
    fail: bool,
}

impl KeywordEmbedder {
    pub fn new(vocabulary: &[&str]) -> Self {
        Self {
            vocabulary: vocabulary.iter().map(|w| w.to_lowercase()).collect(),
            fail: false,
        }
    }

    /// An embedder whose every call fails.
    pub fn failing() -> Self {
        Self {
            vocabulary: vec!["unused".to_string()],
            fail: true,
        }
    }

    fn vectorize(&self, text: &str) -> Vec<f32> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .collect();

        self.vocabulary
            .iter()
            .map(|term| words.iter().filter(|w| **w == term.as_str()).count() as f32)
            .collect()
    }
}

#[async_trait]
impl Embedder for KeywordEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let mut embeddings = self.embed_batch(&[text.to_string()]).await?;
        embeddings
            .pop()
            .ok_or_else(|| CompanionError::Embedding("Empty embedding response".to_string()))
    }

    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if self.fail {
            return Err(CompanionError::Embedding("simulated outage".to_string()));
        }
        Ok(texts.iter().map(|t| self.vectorize(t)).collect())
    }

    fn dimensions(&self) -> usize {
        self.vocabulary.len()
    }
}

/// One recorded generation request.
#[derive(Debug, Clone)]
pub struct GenerationCall {
    pub system: String,
    pub user: String,
}

enum Reply {
    Text(String),
    Fail(String),
}

/// Replies from a fixed script and records every request.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<GenerationCall>>,
}

impl ScriptedGenerator {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: Mutex::new(replies.iter().map(|r| Reply::Text(r.to_string())).collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a failing reply after the scripted ones.
    pub fn then_fail(self, message: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Fail(message.to_string()));
        self
    }

    /// Queue a reply after the scripted ones.
    pub fn then_reply(self, reply: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Reply::Text(reply.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<GenerationCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, system: &str, user: &str) -> Result<String> {
        self.calls.lock().unwrap().push(GenerationCall {
            system: system.to_string(),
            user: user.to_string(),
        });

        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::Fail(message)) => Err(CompanionError::OpenAI(message)),
            None => Err(CompanionError::Generation("no scripted reply left".to_string())),
        }
    }

    fn model(&self) -> &str {
        "scripted"
    }
}

/// Serves the same caption fragments for every request.
pub struct StaticFetcher {
    fragments: Vec<CaptionFragment>,
    requests: Mutex<Vec<(VideoId, Language)>>,
}

impl StaticFetcher {
    pub fn new(fragments: &[&str]) -> Self {
        Self {
            fragments: fragments
                .iter()
                .enumerate()
                .map(|(i, text)| CaptionFragment::new(*text, i as f64 * 2.0, 2.0))
                .collect(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<(VideoId, Language)> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranscriptFetcher for StaticFetcher {
    async fn fetch_fragments(&self, video_id: &VideoId, language: Language) -> Result<Vec<CaptionFragment>> {
        self.requests.lock().unwrap().push((video_id.clone(), language));
        Ok(self.fragments.clone())
    }
}
