//! Transcript chunking for embedding and retrieval.
//!
//! Splits a transcript into overlapping, size-bounded chunks that prefer
//! natural boundaries.

mod recursive;

pub use recursive::{RecursiveChunker, DEFAULT_SEPARATORS};

use crate::config::ChunkingSettings;
use serde::{Deserialize, Serialize};

/// A contiguous piece of a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Text content of this chunk.
    pub text: String,
    /// Byte offset of the chunk in the transcript text.
    pub start_offset: usize,
    /// Position of this chunk in splitting order.
    pub order: usize,
}

impl Chunk {
    pub fn new(text: String, start_offset: usize, order: usize) -> Self {
        Self {
            text,
            start_offset,
            order,
        }
    }

    /// Byte offset one past the end of the chunk.
    pub fn end_offset(&self) -> usize {
        self.start_offset + self.text.len()
    }

    /// Length in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Configuration for chunking, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkingConfig {
    /// Maximum chunk size.
    pub chunk_size: usize,
    /// Maximum characters shared by consecutive chunks.
    pub chunk_overlap: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 10_000,
            chunk_overlap: 1_000,
        }
    }
}

impl From<&ChunkingSettings> for ChunkingConfig {
    fn from(settings: &ChunkingSettings) -> Self {
        Self {
            chunk_size: settings.chunk_size,
            chunk_overlap: settings.chunk_overlap,
        }
    }
}
