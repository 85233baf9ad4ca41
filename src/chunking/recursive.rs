//! Recursive character splitting with overlap.
//!
//! Text is split on the first separator it contains; pieces that are still
//! too long are split again with the next separators. Adjacent pieces are
//! then merged greedily up to the chunk size, carrying at most
//! `chunk_overlap` characters from the end of one chunk into the next.

use super::{Chunk, ChunkingConfig};
use crate::error::{CompanionError, Result};
use std::collections::VecDeque;
use std::ops::Range;
use tracing::debug;

/// Separators ordered from most to least preferred.
pub const DEFAULT_SEPARATORS: &[&str] = &[
    "\n\n", // Paragraph break
    "\n",   // Line break
    ". ",   // End of sentence
    " ",    // Whitespace
    "",     // Character by character
];

/// Splits transcript text into overlapping chunks.
#[derive(Debug, Clone)]
pub struct RecursiveChunker {
    config: ChunkingConfig,
    separators: Vec<String>,
}

impl RecursiveChunker {
    /// Create a chunker with the default separators.
    pub fn new(config: ChunkingConfig) -> Result<Self> {
        Self::with_separators(
            config,
            DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Create a chunker with custom separators.
    ///
    /// A trailing empty separator is appended when missing so that every
    /// piece can always be brought under the chunk size.
    pub fn with_separators(config: ChunkingConfig, mut separators: Vec<String>) -> Result<Self> {
        if config.chunk_size == 0 {
            return Err(CompanionError::Chunking(
                "Chunk size must be greater than zero".to_string(),
            ));
        }
        if config.chunk_overlap >= config.chunk_size {
            return Err(CompanionError::Chunking(format!(
                "Chunk overlap ({}) must be smaller than chunk size ({})",
                config.chunk_overlap, config.chunk_size
            )));
        }

        if separators.last().map_or(true, |s| !s.is_empty()) {
            separators.push(String::new());
        }

        Ok(Self { config, separators })
    }

    /// Split text into chunks. Empty or whitespace-only text yields no chunks.
    pub fn chunk(&self, text: &str) -> Vec<Chunk> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let mut ranges = Vec::new();
        if char_len(text) <= self.config.chunk_size {
            ranges.push(0..text.len());
        } else {
            let separators: Vec<&str> = self.separators.iter().map(String::as_str).collect();
            self.split_range(text, 0..text.len(), &separators, &mut ranges);
        }

        let chunks: Vec<Chunk> = ranges
            .into_iter()
            .filter_map(|range| trim_range(text, range))
            .enumerate()
            .map(|(order, range)| Chunk::new(text[range.clone()].to_string(), range.start, order))
            .collect();

        debug!(
            chunks = chunks.len(),
            chunk_size = self.config.chunk_size,
            chunk_overlap = self.config.chunk_overlap,
            "Split transcript"
        );

        chunks
    }

    fn split_range(
        &self,
        text: &str,
        range: Range<usize>,
        separators: &[&str],
        out: &mut Vec<Range<usize>>,
    ) {
        let slice = &text[range.clone()];
        let (separator, remaining) = pick_separator(slice, separators);

        let mut pending: Vec<(Range<usize>, usize)> = Vec::new();

        for piece in split_keeping_separator(slice, separator) {
            let piece = (range.start + piece.start)..(range.start + piece.end);
            let len = char_len(&text[piece.clone()]);

            if len <= self.config.chunk_size {
                pending.push((piece, len));
                continue;
            }

            self.merge_pieces(&pending, out);
            pending.clear();

            if remaining.is_empty() {
                out.push(piece);
            } else {
                self.split_range(text, piece, remaining, out);
            }
        }

        self.merge_pieces(&pending, out);
    }

    /// Greedily merge contiguous pieces into chunk ranges.
    fn merge_pieces(&self, pieces: &[(Range<usize>, usize)], out: &mut Vec<Range<usize>>) {
        let mut window: VecDeque<(Range<usize>, usize)> = VecDeque::new();
        let mut window_len = 0;

        for (piece, len) in pieces {
            if window_len + len > self.config.chunk_size && !window.is_empty() {
                out.push(window_span(&window));

                // Keep only the tail that fits in the overlap budget
                while window_len > self.config.chunk_overlap
                    || (window_len + len > self.config.chunk_size && window_len > 0)
                {
                    match window.pop_front() {
                        Some((_, dropped)) => window_len -= dropped,
                        None => break,
                    }
                }
            }

            window.push_back((piece.clone(), *len));
            window_len += len;
        }

        if !window.is_empty() {
            out.push(window_span(&window));
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Choose the first separator present in the text, returning it with the
/// separators left for further splitting.
fn pick_separator<'a, 'b>(text: &str, separators: &'b [&'a str]) -> (&'a str, &'b [&'a str]) {
    for (i, separator) in separators.iter().enumerate() {
        if separator.is_empty() {
            return ("", &[]);
        }
        if text.contains(separator) {
            return (separator, &separators[i + 1..]);
        }
    }
    ("", &[])
}

/// Split into contiguous ranges, each separator staying on the piece before it.
fn split_keeping_separator(text: &str, separator: &str) -> Vec<Range<usize>> {
    if separator.is_empty() {
        return text
            .char_indices()
            .map(|(i, c)| i..i + c.len_utf8())
            .collect();
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, matched) in text.match_indices(separator) {
        let end = idx + matched.len();
        pieces.push(start..end);
        start = end;
    }
    if start < text.len() {
        pieces.push(start..text.len());
    }
    pieces
}

fn window_span(window: &VecDeque<(Range<usize>, usize)>) -> Range<usize> {
    match (window.front(), window.back()) {
        (Some((first, _)), Some((last, _))) => first.start..last.end,
        _ => 0..0,
    }
}

fn trim_range(text: &str, range: Range<usize>) -> Option<Range<usize>> {
    let slice = &text[range.clone()];
    let without_leading = slice.trim_start();
    let start = range.start + (slice.len() - without_leading.len());
    let trimmed = without_leading.trim_end();

    if trimmed.is_empty() {
        None
    } else {
        Some(start..start + trimmed.len())
    }
}
