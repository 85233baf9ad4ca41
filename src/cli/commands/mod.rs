//! CLI command implementations.

mod ask;
mod chat;
mod config;
mod notes;
mod transcript;

pub use ask::run_ask;
pub use chat::run_chat;
pub use config::run_config;
pub use notes::run_notes;
pub use transcript::run_transcript;

use crate::cli::preflight::{self, Operation};
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::session::ChatSession;
use crate::video_source::{Language, Transcript};
use anyhow::Result;

/// Run pre-flight checks, printing the failure before returning it.
fn preflight_or_report(operation: Operation, settings: &Settings) -> Result<()> {
    if let Err(e) = preflight::check(operation, settings) {
        Output::error(&format!("{}", e));
        Output::info(&format!(
            "Config file: {}",
            Settings::default_config_path().display()
        ));
        return Err(e.into());
    }
    Ok(())
}

/// Fetch a transcript with progress output, translating it when asked.
async fn load_transcript(
    orchestrator: &Orchestrator,
    url: &str,
    language: Language,
    translate: bool,
) -> Result<Transcript> {
    let spinner = Output::spinner(&format!("Fetching {} transcript...", language));
    let fetched = orchestrator.fetch_transcript(url, language).await;
    spinner.finish_and_clear();

    let transcript = match fetched {
        Ok(t) => t,
        Err(e) => {
            Output::error(&format!("{}", e));
            return Err(e.into());
        }
    };

    Output::success(&format!(
        "Fetched transcript for {} ({} characters)",
        transcript.video_id,
        transcript.char_count()
    ));

    if !translate || transcript.language.is_english() {
        return Ok(transcript);
    }

    let spinner = Output::spinner("Translating to English...");
    let translated = orchestrator.translate(transcript).await;
    spinner.finish_and_clear();

    match translated {
        Ok(t) => {
            Output::success("Translated transcript to English");
            Ok(t)
        }
        Err(e) => {
            Output::error(&format!("{}", e));
            Err(e.into())
        }
    }
}

/// Fetch, translate, chunk and index a video for question answering.
async fn open_chat(
    orchestrator: &Orchestrator,
    url: &str,
    language: Language,
) -> Result<ChatSession> {
    let transcript = load_transcript(orchestrator, url, language, true).await?;

    let spinner = Output::spinner("Building vector store...");
    let session = orchestrator.start_chat(&transcript).await;
    spinner.finish_and_clear();

    match session {
        Ok(s) => {
            Output::success(&format!("Indexed {} chunks", s.chunk_count()));
            Ok(s)
        }
        Err(e) => {
            Output::error(&format!("{}", e));
            Err(e.into())
        }
    }
}
