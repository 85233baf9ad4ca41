//! Transcript command implementation.

use super::{load_transcript, preflight_or_report};
use crate::cli::preflight::Operation;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::video_source::{extract_video_id, Language, Transcript, TranscriptFetcher, YoutubeTranscriptFetcher};
use anyhow::Result;

/// Run the transcript command.
pub async fn run_transcript(
    url: &str,
    language: Language,
    translate: bool,
    json: bool,
    settings: Settings,
) -> Result<()> {
    preflight_or_report(Operation::Transcript { translate }, &settings)?;

    let transcript = if translate && !language.is_english() {
        let orchestrator = Orchestrator::new(settings)?;
        load_transcript(&orchestrator, url, language, true).await?
    } else {
        if !language.is_english() {
            Output::warning("Printing the untranslated transcript; pass --translate for English.");
        }
        fetch_untranslated(url, language).await?
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
    } else {
        Output::header(&format!("Transcript ({})", transcript.language));
        println!("{}", transcript.text);
    }

    Ok(())
}

/// Fetch captions without building a model provider client.
async fn fetch_untranslated(url: &str, language: Language) -> Result<Transcript> {
    let video_id = extract_video_id(url)?;
    let fetcher = YoutubeTranscriptFetcher::new()?;

    let spinner = Output::spinner(&format!("Fetching {} transcript...", language));
    let result = fetcher.fetch(&video_id, language).await;
    spinner.finish_and_clear();

    match result {
        Ok(t) => Ok(t),
        Err(e) => {
            Output::error(&format!("{}", e));
            Err(e.into())
        }
    }
}
