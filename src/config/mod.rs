//! Configuration module for vidcompanion.
//!
//! Handles loading and managing application settings and prompt templates.

mod prompts;
mod settings;

pub use prompts::{Prompts, TaskPrompts, FALLBACK_ANSWER};
pub use settings::{
    ApiSettings, ChunkingSettings, EmbeddingSettings, GeneralSettings, LlmSettings,
    PromptSettings, RagSettings, Settings, TranscriptSettings,
};
