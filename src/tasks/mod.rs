//! Single-call transcript tasks: translation, topic extraction and note taking.
//!
//! Each task renders its prompt pair with the transcript and makes one
//! generation call.

mod notes;
mod topics;
mod translator;

pub use notes::NoteTaker;
pub use topics::{parse_bullets, TopicExtractor};
pub use translator::Translator;

use crate::config::{Prompts, TaskPrompts};
use crate::error::Result;
use crate::llm::TextGenerator;
use std::collections::HashMap;
use tracing::debug;

/// Render a task's prompts for a transcript and run one generation.
async fn run_prompt(
    generator: &dyn TextGenerator,
    prompts: &Prompts,
    task: &TaskPrompts,
    transcript: &str,
) -> Result<String> {
    let mut vars = HashMap::new();
    vars.insert("transcript".to_string(), transcript.to_string());

    let system = prompts.render_with_custom(&task.system, &vars);
    let user = prompts.render_with_custom(&task.user, &vars);

    debug!("Running task prompt with {}", generator.model());
    generator.generate(&system, &user).await
}
