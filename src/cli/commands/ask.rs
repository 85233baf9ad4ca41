//! Ask command implementation.

use super::{open_chat, preflight_or_report};
use crate::cli::preflight::Operation;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::video_source::Language;
use anyhow::Result;

/// Run the ask command.
pub async fn run_ask(url: &str, question: &str, language: Language, settings: Settings) -> Result<()> {
    preflight_or_report(Operation::Generate, &settings)?;

    let orchestrator = Orchestrator::new(settings)?;
    let mut chat = open_chat(&orchestrator, url, language).await?;

    let spinner = Output::spinner("Searching transcript...");

    match chat.ask(question).await {
        Ok(response) => {
            spinner.finish_and_clear();

            println!("\n{}\n", response.answer);

            if !response.sources.is_empty() {
                Output::header("Sources");
                for source in &response.sources {
                    Output::source(source);
                }
            }
        }
        Err(e) => {
            spinner.finish_and_clear();
            Output::error(&format!("Failed to generate answer: {}", e));
            return Err(e.into());
        }
    }

    Ok(())
}
