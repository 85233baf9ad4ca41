//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run the config command.
pub fn run_config(action: &ConfigAction, config_override: Option<&str>, settings: Settings) -> Result<()> {
    let config_path = match config_override {
        Some(path) => Settings::expand_path(path),
        None => Settings::default_config_path(),
    };

    match action {
        ConfigAction::Show => {
            if !config_path.exists() {
                Output::info(&format!(
                    "No config file at {}; showing defaults",
                    config_path.display()
                ));
            }
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}
