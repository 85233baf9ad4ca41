//! Pre-flight checks before expensive operations.
//!
//! Validates that the model provider is configured before starting a
//! pipeline that would otherwise fail after the transcript fetch.

use crate::config::Settings;
use crate::error::{CompanionError, Result};

/// Requirements for different operations.
#[derive(Debug, Clone, Copy)]
pub enum Operation {
    /// Notes, chat and ask call the model provider.
    Generate,
    /// Printing a transcript only needs the model when translating.
    Transcript { translate: bool },
}

/// Run pre-flight checks for the given operation.
///
/// Returns Ok(()) if all checks pass, or an error describing what's missing.
pub fn check(operation: Operation, settings: &Settings) -> Result<()> {
    match operation {
        Operation::Generate | Operation::Transcript { translate: true } => {
            check_api_key(&settings.api.api_key_env)
        }
        Operation::Transcript { translate: false } => Ok(()),
    }
}

/// Check that the configured API key variable is set.
fn check_api_key(var: &str) -> Result<()> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(()),
        Ok(_) => Err(CompanionError::Config(format!(
            "{} is empty. Set it with: export {}='sk-...'",
            var, var
        ))),
        Err(_) => Err(CompanionError::Config(format!(
            "{} not set. Set it with: export {}='sk-...'",
            var, var
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_transcript_has_no_requirements() {
        assert!(check(Operation::Transcript { translate: false }, &Settings::default()).is_ok());
    }

    #[test]
    fn test_missing_key_is_reported_by_name() {
        let mut settings = Settings::default();
        settings.api.api_key_env = "VIDCOMPANION_TEST_UNSET_KEY".to_string();

        let err = check(Operation::Generate, &settings).unwrap_err();
        assert!(err.to_string().contains("VIDCOMPANION_TEST_UNSET_KEY not set"));
    }
}
