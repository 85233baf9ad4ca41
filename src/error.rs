//! Error types for vidcompanion.

use thiserror::Error;

/// Library-level error type for vidcompanion operations.
#[derive(Error, Debug)]
pub enum CompanionError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Error fetching transcript: {0}")]
    TranscriptFetch(String),

    #[error("Error translating transcript: {0}")]
    Translation(String),

    #[error("Text generation failed: {0}")]
    Generation(String),

    #[error("Embedding generation failed: {0}")]
    Embedding(String),

    #[error("Chunking error: {0}")]
    Chunking(String),

    #[error("Vector store error: {0}")]
    VectorStore(String),

    #[error("RAG error: {0}")]
    Rag(String),

    #[error("OpenAI API error: {0}")]
    OpenAI(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for vidcompanion operations.
pub type Result<T> = std::result::Result<T, CompanionError>;
