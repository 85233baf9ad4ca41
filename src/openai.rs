//! OpenAI-compatible client construction.
//!
//! One client is built per process and handed to every component that talks
//! to the model provider.

use crate::config::ApiSettings;
use crate::error::{CompanionError, Result};
use async_openai::{config::OpenAIConfig, Client};
use std::time::Duration;

/// Shared client type used by the generator and the embedder.
pub type OpenAIClient = Client<OpenAIConfig>;

/// Default timeout for API requests (5 minutes).
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Create a client from the API settings.
///
/// The key is read from the environment variable named by `api_key_env`, and
/// `api_base` switches to any OpenAI-compatible endpoint.
pub fn create_client(settings: &ApiSettings) -> Result<OpenAIClient> {
    let api_key = std::env::var(&settings.api_key_env).map_err(|_| {
        CompanionError::Config(format!("{} is not set", settings.api_key_env))
    })?;

    let mut config = OpenAIConfig::new().with_api_key(api_key);
    if let Some(base) = settings.api_base.as_deref().filter(|b| !b.is_empty()) {
        config = config.with_api_base(base);
    }

    create_client_with_timeout(config, Duration::from_secs(settings.timeout_seconds))
}

/// Create a client with an explicit config and request timeout.
pub fn create_client_with_timeout(config: OpenAIConfig, timeout: Duration) -> Result<OpenAIClient> {
    let http_client = reqwest::Client::builder().timeout(timeout).build()?;

    Ok(Client::with_config(config).with_http_client(http_client))
}
