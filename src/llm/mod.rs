//! Text generation through a hosted chat model.

mod openai;

pub use openai::OpenAIGenerator;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for single-shot text generation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a reply to one system + user message pair.
    async fn generate(&self, system: &str, user: &str) -> Result<String>;

    /// Name of the model behind this generator.
    fn model(&self) -> &str;
}
