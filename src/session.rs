//! Chat session state.
//!
//! A session owns the built index (through its [`RagEngine`]) and the
//! append-only message history for one processed video.

use crate::error::Result;
use crate::rag::{RagEngine, RagResponse};
use crate::video_source::VideoId;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

/// One entry of the chat history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// A conversation with one video.
pub struct ChatSession {
    video_id: VideoId,
    engine: RagEngine,
    chunk_count: usize,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(video_id: VideoId, engine: RagEngine, chunk_count: usize) -> Self {
        Self {
            video_id,
            engine,
            chunk_count,
            messages: Vec::new(),
        }
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    /// Number of chunks in the session's index.
    pub fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Messages so far, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Ask a question about the video.
    ///
    /// The question is always recorded; the answer only when one was produced.
    pub async fn ask(&mut self, question: &str) -> Result<RagResponse> {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: question.to_string(),
        });

        match self.engine.answer(question).await {
            Ok(response) => {
                self.messages.push(ChatMessage {
                    role: Role::Assistant,
                    content: response.answer.clone(),
                });
                Ok(response)
            }
            Err(e) => {
                warn!("Chat turn failed: {}", e);
                Err(e)
            }
        }
    }
}
