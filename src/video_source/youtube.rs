//! YouTube caption fetcher.

use super::{CaptionFragment, Language, TranscriptFetcher, VideoId};
use crate::error::{CompanionError, Result};
use async_trait::async_trait;
use tracing::{debug, info, instrument};
use yt_transcript_rs::api::YouTubeTranscriptApi;

/// Fetches captions from YouTube's timed-text endpoint.
pub struct YoutubeTranscriptFetcher {
    api: YouTubeTranscriptApi,
}

impl YoutubeTranscriptFetcher {
    /// Create a fetcher without cookies or proxy.
    pub fn new() -> Result<Self> {
        let api = YouTubeTranscriptApi::new(None, None, None).map_err(|e| {
            CompanionError::TranscriptFetch(format!("Failed to initialise caption client: {}", e))
        })?;

        Ok(Self { api })
    }
}

#[async_trait]
impl TranscriptFetcher for YoutubeTranscriptFetcher {
    #[instrument(skip(self))]
    async fn fetch_fragments(&self, video_id: &VideoId, language: Language) -> Result<Vec<CaptionFragment>> {
        debug!("Requesting captions");

        let fetched = self
            .api
            .fetch_transcript(video_id.as_str(), &[language.code()], false)
            .await
            .map_err(|e| CompanionError::TranscriptFetch(e.to_string()))?;

        let fragments: Vec<CaptionFragment> = fetched
            .snippets
            .into_iter()
            .map(|s| CaptionFragment::new(s.text, s.start, s.duration))
            .collect();

        info!("Fetched {} caption fragments", fragments.len());
        Ok(fragments)
    }
}
