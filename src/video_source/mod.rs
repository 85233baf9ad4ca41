//! Transcript acquisition.
//!
//! Resolves a video identifier from user input and fetches its captions
//! through a [`TranscriptFetcher`].

mod youtube;

pub use youtube::YoutubeTranscriptFetcher;

use crate::error::{CompanionError, Result};
use async_trait::async_trait;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Matches the 11-character id after `v=` or a path separator.
static URL_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:v=|/)([0-9A-Za-z_-]{11})").expect("video id pattern is valid")
});

static BARE_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z_-]{11}$").expect("bare id pattern is valid"));

/// Caption language offered by the companion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
}

impl Language {
    /// ISO 639-1 code used by the caption API.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
        }
    }

    pub fn is_english(&self) -> bool {
        matches!(self, Language::English)
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "hi" | "hindi" => Ok(Language::Hindi),
            _ => Err(format!("Unsupported language: {} (expected en or hi)", s)),
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Watch URL for this video.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.0)
    }
}

impl std::fmt::Display for VideoId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the video id from a YouTube URL or a bare id.
pub fn extract_video_id(input: &str) -> Result<VideoId> {
    let input = input.trim();

    if BARE_ID_REGEX.is_match(input) {
        return Ok(VideoId(input.to_string()));
    }

    URL_ID_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
        .ok_or_else(|| {
            CompanionError::InvalidUrl(format!(
                "'{}'. Please enter a valid video link.",
                input
            ))
        })
}

/// One caption fragment as returned by the caption API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptionFragment {
    pub text: String,
    pub start_seconds: f64,
    pub duration_seconds: f64,
}

impl CaptionFragment {
    pub fn new(text: impl Into<String>, start_seconds: f64, duration_seconds: f64) -> Self {
        Self {
            text: text.into(),
            start_seconds,
            duration_seconds,
        }
    }
}

/// The full caption text of a video in one language.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transcript {
    pub video_id: VideoId,
    pub language: Language,
    pub text: String,
    /// Number of caption fragments the text was joined from.
    pub fragment_count: usize,
}

impl Transcript {
    /// Join caption fragments with single spaces.
    pub fn from_fragments(video_id: VideoId, language: Language, fragments: &[CaptionFragment]) -> Self {
        let text = fragments
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            video_id,
            language,
            text,
            fragment_count: fragments.len(),
        }
    }

    /// Replace the text with its English translation.
    pub fn into_translated(self, english_text: String) -> Self {
        Self {
            text: english_text,
            language: Language::English,
            ..self
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Length of the text in characters.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Source of caption fragments.
#[async_trait]
pub trait TranscriptFetcher: Send + Sync {
    /// Fetch the ordered caption fragments for a video in one language.
    async fn fetch_fragments(&self, video_id: &VideoId, language: Language) -> Result<Vec<CaptionFragment>>;

    /// Fetch and join the captions into a transcript.
    async fn fetch(&self, video_id: &VideoId, language: Language) -> Result<Transcript> {
        let fragments = self.fetch_fragments(video_id, language).await?;
        Ok(Transcript::from_fragments(video_id.clone(), language, &fragments))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s", "dQw4w9WgXcQ")]
    #[case("https://youtube.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://m.youtube.com/watch?feature=share&v=a-B_c1D2e3F", "a-B_c1D2e3F")]
    #[case("dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    fn test_extract_video_id(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extract_video_id(input).unwrap().as_str(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("not a url")]
    #[case("https://youtu.be/short")]
    #[case("https://www.youtube.com/watch?v=abc")]
    fn test_extract_video_id_rejects(#[case] input: &str) {
        let err = extract_video_id(input).unwrap_err();
        assert!(matches!(err, CompanionError::InvalidUrl(_)));
    }

    #[test]
    fn test_language_parsing() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::English);
        assert_eq!("HI".parse::<Language>().unwrap(), Language::Hindi);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::Hindi.to_string(), "hi");
    }

    #[test]
    fn test_transcript_joins_fragments_with_spaces() {
        let fragments = vec![
            CaptionFragment::new("never gonna", 0.0, 1.5),
            CaptionFragment::new("give you up", 1.5, 2.0),
        ];
        let id = extract_video_id("dQw4w9WgXcQ").unwrap();
        let transcript = Transcript::from_fragments(id, Language::English, &fragments);

        assert_eq!(transcript.text, "never gonna give you up");
        assert_eq!(transcript.fragment_count, 2);
    }

    #[test]
    fn test_translation_keeps_id_and_switches_language() {
        let id = extract_video_id("dQw4w9WgXcQ").unwrap();
        let transcript = Transcript::from_fragments(
            id.clone(),
            Language::Hindi,
            &[CaptionFragment::new("नमस्ते", 0.0, 1.0)],
        );

        let translated = transcript.into_translated("hello".to_string());
        assert_eq!(translated.video_id, id);
        assert_eq!(translated.language, Language::English);
        assert_eq!(translated.text, "hello");
    }
}
