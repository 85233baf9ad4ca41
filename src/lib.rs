//! vidcompanion - study companion for YouTube videos
//!
//! Fetches a video's captions, translates Hindi captions into English, and
//! then either writes study notes or answers questions about the video with
//! retrieval-augmented generation.
//!
//! # Architecture
//!
//! - `video_source` - URL parsing and caption fetching
//! - `tasks` - Translation, topic extraction and note taking
//! - `chunking` - Recursive character splitting with overlap
//! - `embedding` - Embedding generation
//! - `vector_store` - In-memory similarity index
//! - `rag` - Question answering over the index
//! - `session` - Chat history for one video
//! - `orchestrator` - Pipeline coordination
//!
//! # Example
//!
//! ```rust,no_run
//! use vidcompanion::config::Settings;
//! use vidcompanion::orchestrator::Orchestrator;
//! use vidcompanion::video_source::Language;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let orchestrator = Orchestrator::new(settings)?;
//!
//!     let transcript = orchestrator
//!         .prepare_transcript("https://youtu.be/dQw4w9WgXcQ", Language::English)
//!         .await?;
//!
//!     let mut chat = orchestrator.start_chat(&transcript).await?;
//!     let response = chat.ask("What is this video about?").await?;
//!     println!("{}", response.answer);
//!
//!     Ok(())
//! }
//! ```

pub mod chunking;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod openai;
pub mod orchestrator;
pub mod rag;
pub mod session;
pub mod tasks;
pub mod vector_store;
pub mod video_source;

#[cfg(test)]
mod testing;

pub use error::{CompanionError, Result};
