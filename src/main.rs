//! vidcompanion CLI entry point.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vidcompanion::cli::{commands, Cli, Commands};
use vidcompanion::config::Settings;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&Settings::expand_path(path)))?,
        None => Settings::load()?,
    };

    // Initialize logging
    let log_level = match cli.verbose {
        0 => settings.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("vidcompanion={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let language = cli.language.unwrap_or(settings.transcript.default_language);

    // Execute command
    match &cli.command {
        Commands::Notes { url } => {
            commands::run_notes(url, language, settings).await?;
        }

        Commands::Chat { url } => {
            commands::run_chat(url, language, settings).await?;
        }

        Commands::Ask { url, question } => {
            commands::run_ask(url, question, language, settings).await?;
        }

        Commands::Transcript {
            url,
            translate,
            json,
        } => {
            commands::run_transcript(url, language, *translate, *json, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, cli.config.as_deref(), settings)?;
        }
    }

    Ok(())
}
