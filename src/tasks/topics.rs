//! Key topic extraction.

use super::run_prompt;
use crate::config::Prompts;
use crate::error::{CompanionError, Result};
use crate::llm::TextGenerator;
use std::sync::Arc;
use tracing::instrument;

/// Extracts the five most important topics of a transcript.
pub struct TopicExtractor {
    generator: Arc<dyn TextGenerator>,
    prompts: Prompts,
}

impl TopicExtractor {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            prompts: Prompts::default(),
        }
    }

    pub fn with_prompts(mut self, prompts: Prompts) -> Self {
        self.prompts = prompts;
        self
    }

    /// Bulleted list of key topics, as returned by the model.
    #[instrument(skip(self, transcript))]
    pub async fn extract(&self, transcript: &str) -> Result<String> {
        run_prompt(self.generator.as_ref(), &self.prompts, &self.prompts.topics, transcript)
            .await
            .map_err(|e| CompanionError::Generation(format!("Error extracting topics: {}", e)))
    }
}

/// Split a bulleted reply into its items.
pub fn parse_bullets(reply: &str) -> Vec<String> {
    reply
        .lines()
        .map(str::trim)
        .filter_map(|line| {
            line.strip_prefix("- ")
                .or_else(|| line.strip_prefix("* "))
                .or_else(|| line.strip_prefix("• "))
        })
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedGenerator;

    #[tokio::test]
    async fn test_extract_sends_transcript_with_topic_rules() {
        let generator = Arc::new(ScriptedGenerator::new(&["- A\n- B\n- C\n- D\n- E"]));
        let extractor = TopicExtractor::new(generator.clone());

        let topics = extractor.extract("a talk about rust").await.unwrap();
        assert_eq!(parse_bullets(&topics).len(), 5);

        let calls = generator.calls();
        assert!(calls[0].system.contains("exactly 5 bullet points"));
        assert!(calls[0].user.ends_with("a talk about rust"));
    }

    #[test]
    fn test_parse_bullets() {
        let reply = "Here are the topics:\n- Ownership\n* Borrowing\n• Lifetimes\n-  \nnot a bullet";
        assert_eq!(parse_bullets(reply), vec!["Ownership", "Borrowing", "Lifetimes"]);
    }
}
