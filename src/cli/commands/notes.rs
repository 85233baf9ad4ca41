//! Notes command implementation.

use super::{load_transcript, preflight_or_report};
use crate::cli::preflight::Operation;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::video_source::Language;
use anyhow::Result;

/// Run the notes command.
pub async fn run_notes(url: &str, language: Language, settings: Settings) -> Result<()> {
    preflight_or_report(Operation::Generate, &settings)?;

    let orchestrator = Orchestrator::new(settings)?;
    let transcript = load_transcript(&orchestrator, url, language, true).await?;

    let spinner = Output::spinner("Generating topics and notes...");
    let result = orchestrator.study_notes(&transcript).await;
    spinner.finish_and_clear();

    let notes = match result {
        Ok(n) => n,
        Err(e) => {
            Output::error(&format!("Failed to generate notes: {}", e));
            return Err(e.into());
        }
    };

    Output::header("Key Topics");
    println!("{}", notes.topics.trim());

    Output::header("Notes");
    println!("{}", notes.notes.trim());

    Ok(())
}
