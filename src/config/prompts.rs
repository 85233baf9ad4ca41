//! Prompt templates for vidcompanion.
//!
//! Prompts can be customized by placing TOML files in the custom prompts directory.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Reply the model gives when the retrieved context does not hold the answer.
pub const FALLBACK_ANSWER: &str =
    "I couldn't find the answer in the database. Could you rephrase or ask something else";

/// Collection of all prompt templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Prompts {
    pub translate: TaskPrompts,
    pub topics: TaskPrompts,
    pub notes: TaskPrompts,
    pub rag: TaskPrompts,
    /// Custom variables from config, available in all prompts.
    #[serde(skip)]
    pub variables: HashMap<String, String>,
}

/// A system/user prompt pair for one generation task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskPrompts {
    pub system: String,
    pub user: String,
}

/// Contents of a custom prompt file. Missing fields keep the built-in text.
#[derive(Debug, Deserialize)]
struct TaskPromptsOverride {
    system: Option<String>,
    user: Option<String>,
}

impl TaskPromptsOverride {
    fn apply_to(self, target: &mut TaskPrompts) {
        if let Some(system) = self.system {
            target.system = system;
        }
        if let Some(user) = self.user {
            target.user = user;
        }
    }
}

impl TaskPrompts {
    fn new(system: &str, user: &str) -> Self {
        Self {
            system: system.to_string(),
            user: user.to_string(),
        }
    }

    /// Default translation prompts.
    pub fn translate() -> Self {
        Self::new(
            r#"You are an expert translator with deep cultural and linguistic understanding.

Translate the transcript you are given into English with absolute accuracy:
- Keep the original meaning, tone and context intact
- Make no additions and no omissions
- Preserve the tone and style: formal or informal, emotional or neutral, as in the original
- Adapt idioms, nuances and cultural references while keeping the original intent
- Keep the speakers' voice and perspective; never rewrite into the third person
- Do not summarize or simplify

The translation should read naturally in English while staying as close as possible to the original."#,
            r#"Transcript:
{{transcript}}"#,
        )
    }

    /// Default topic extraction prompts.
    pub fn topics() -> Self {
        Self::new(
            r#"You are an expert assistant that extracts the most important topics from a video transcript.

Rules:
- Respond with exactly 5 bullet points
- Each point must be a key topic, not a subtopic or a small detail
- Keep the wording concise, clear and to the point
- Never phrase a topic as a question or an opinion
- Avoid redundancy; every topic appears once
- Only list topics that are actually discussed in the transcript"#,
            r#"Here is the transcript:
{{transcript}}"#,
        )
    }

    /// Default note taking prompts.
    pub fn notes() -> Self {
        Self::new(
            r#"You are an expert note taker. Go through the video transcript you are given and write well-structured, lucid and concise notes.

Rules:
- Use bullet points grouped into clear sections with headings
- Highlight key takeaways, important details and any action items
- Keep the wording concise, clear and to the point
- If the transcript covers several themes or topics, organize them under subheadings
- Avoid redundancy and never add information that is not present in the transcript"#,
            r#"Here is the transcript:
{{transcript}}"#,
        )
    }

    /// Default RAG answer prompts.
    pub fn rag() -> Self {
        Self::new(
            r#"You are a kind, polite and expert assistant answering questions about a video.

Guidelines:
- Begin the conversation with a warm greeting, but do not repeat the greeting on every answer
- Understand the user's intent even when the question has typos or grammatical errors
- Answer only from the context you are given
- If the answer is not in the context, reply exactly: "{{fallback}}"
- Keep answers clear, concise and to the point"#,
            r#"Context: {{context}}

User Question: {{question}}

Answer:"#,
        )
    }
}

impl Default for Prompts {
    fn default() -> Self {
        Self {
            translate: TaskPrompts::translate(),
            topics: TaskPrompts::topics(),
            notes: TaskPrompts::notes(),
            rag: TaskPrompts::rag(),
            variables: HashMap::new(),
        }
    }
}

impl Prompts {
    /// Load prompts from the default location, with optional custom directory and variables.
    pub fn load(
        custom_dir: Option<&str>,
        custom_variables: Option<&HashMap<String, String>>,
    ) -> crate::error::Result<Self> {
        let mut prompts = Prompts::default();

        if let Some(vars) = custom_variables {
            prompts.variables = vars.clone();
        }

        if let Some(dir) = custom_dir {
            let custom_path = PathBuf::from(shellexpand::tilde(dir).to_string());

            let overrides: [(&str, &mut TaskPrompts); 4] = [
                ("translate.toml", &mut prompts.translate),
                ("topics.toml", &mut prompts.topics),
                ("notes.toml", &mut prompts.notes),
                ("rag.toml", &mut prompts.rag),
            ];

            for (file_name, target) in overrides {
                let path = custom_path.join(file_name);
                if path.exists() {
                    let content = std::fs::read_to_string(&path)?;
                    let custom: TaskPromptsOverride = toml::from_str(&content)?;
                    custom.apply_to(target);
                }
            }
        }

        Ok(prompts)
    }

    /// Render a prompt template with the given variables.
    pub fn render(template: &str, vars: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in vars {
            result = result.replace(&format!("{{{{{}}}}}", key), value);
        }
        result
    }

    /// Render a prompt template with both provided variables and custom config variables.
    /// Provided variables take precedence over custom config variables.
    pub fn render_with_custom(&self, template: &str, vars: &HashMap<String, String>) -> String {
        let mut merged = self.variables.clone();
        for (key, value) in vars {
            merged.insert(key.clone(), value.clone());
        }
        Self::render(template, &merged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prompts() {
        let prompts = Prompts::default();
        assert!(prompts.topics.system.contains("exactly 5"));
        assert!(prompts.notes.system.contains("subheadings"));
        assert!(prompts.rag.user.contains("{{context}}"));
        assert!(prompts.rag.user.contains("{{question}}"));
        assert!(prompts.translate.user.contains("{{transcript}}"));
    }

    #[test]
    fn test_render_template() {
        let template = "Hello {{name}}, you have {{count}} messages.";
        let mut vars = HashMap::new();
        vars.insert("name".to_string(), "Alice".to_string());
        vars.insert("count".to_string(), "5".to_string());

        let result = Prompts::render(template, &vars);
        assert_eq!(result, "Hello Alice, you have 5 messages.");
    }

    #[test]
    fn test_call_variables_override_custom_variables() {
        let mut prompts = Prompts::default();
        prompts.variables.insert("audience".to_string(), "students".to_string());
        prompts.variables.insert("question".to_string(), "ignored".to_string());

        let mut vars = HashMap::new();
        vars.insert("question".to_string(), "What is Rust?".to_string());

        let rendered = prompts.render_with_custom("{{question}} for {{audience}}", &vars);
        assert_eq!(rendered, "What is Rust? for students");
    }

    #[test]
    fn test_load_custom_prompt_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("topics.toml"),
            "system = \"List three topics.\"\nuser = \"{{transcript}}\"\n",
        )
        .unwrap();

        let prompts = Prompts::load(dir.path().to_str(), None).unwrap();
        assert_eq!(prompts.topics.system, "List three topics.");
        assert_eq!(prompts.notes.system, TaskPrompts::notes().system);
    }

    #[test]
    fn test_partial_prompt_file_keeps_builtin_user_template() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("topics.toml"), "system = \"List topics.\"\n").unwrap();

        let prompts = Prompts::load(dir.path().to_str(), None).unwrap();
        assert_eq!(prompts.topics.system, "List topics.");
        assert_eq!(prompts.topics.user, TaskPrompts::topics().user);
        assert!(prompts.topics.user.contains("{{transcript}}"));
    }
}
