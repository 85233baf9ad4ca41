//! Interactive chat command.

use super::{open_chat, preflight_or_report};
use crate::cli::preflight::Operation;
use crate::cli::Output;
use crate::config::Settings;
use crate::orchestrator::Orchestrator;
use crate::session::{ChatSession, Role};
use crate::video_source::Language;
use anyhow::Result;
use console::style;
use std::io::{self, BufRead, Write};

/// Run the interactive chat command.
pub async fn run_chat(url: &str, language: Language, settings: Settings) -> Result<()> {
    preflight_or_report(Operation::Generate, &settings)?;

    let orchestrator = Orchestrator::new(settings)?;
    let mut chat = open_chat(&orchestrator, url, language).await?;

    println!(
        "\n{} {}",
        style("Chatting with").bold().cyan(),
        style(chat.video_id().watch_url()).dim()
    );
    println!(
        "{}\n",
        style("Type your questions, or 'exit' to quit. Use 'history' to show the conversation.").dim()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{} ", style("You:").green().bold());
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let input = input.trim();

        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("exit") || input.eq_ignore_ascii_case("quit") {
            Output::info("Goodbye!");
            break;
        }

        if input.eq_ignore_ascii_case("history") {
            print_history(&chat);
            continue;
        }

        let spinner = Output::spinner("Thinking...");
        let result = chat.ask(input).await;
        spinner.finish_and_clear();

        match result {
            Ok(response) => {
                println!("\n{} {}\n", style("Assistant:").cyan().bold(), response.answer);
            }
            Err(e) => {
                Output::error(&format!("Error: {}", e));
            }
        }
    }

    Ok(())
}

fn print_history(chat: &ChatSession) {
    if chat.messages().is_empty() {
        Output::info("No messages yet.");
        return;
    }

    Output::header("Conversation");
    for message in chat.messages() {
        let label = match message.role {
            Role::User => style("You:").green().bold(),
            Role::Assistant => style("Assistant:").cyan().bold(),
        };
        println!("{} {}", label, message.content);
    }
    println!();
}
