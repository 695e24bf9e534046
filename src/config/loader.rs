//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{SalaryAmount, find_mode_by_id};

use super::types::{DisplayConfig, EngineConfig, InputConfig};

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml    # Input and display settings
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Max input length: {}", loader.input().max_length);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` is missing
    /// - the file contains invalid YAML
    /// - a value is out of range (see [`ConfigLoader::from_config`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = path.display().to_string();

        let content = fs::read_to_string(&path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config: EngineConfig =
            serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Returns a loader holding the built-in defaults.
    pub fn builtin() -> Self {
        Self::default()
    }

    /// Validates `config` and wraps it in a loader.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfig`] if:
    /// - `input.max_length` is outside 1..=14
    /// - `display.group_separator` is not whitespace
    /// - `display.breakdown_modes` names an unknown mode id
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        validate_input(&config.input)?;
        validate_display(&config.display)?;
        Ok(Self { config })
    }

    /// Returns the full configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the input boundary settings.
    pub fn input(&self) -> &InputConfig {
        &self.config.input
    }

    /// Returns the presentation settings.
    pub fn display(&self) -> &DisplayConfig {
        &self.config.display
    }
}

fn validate_input(input: &InputConfig) -> EngineResult<()> {
    if input.max_length == 0 || input.max_length > SalaryAmount::MAX_DIGITS {
        return Err(EngineError::InvalidConfig {
            field: "input.max_length".to_string(),
            message: format!("must be between 1 and {}", SalaryAmount::MAX_DIGITS),
        });
    }
    Ok(())
}

fn validate_display(display: &DisplayConfig) -> EngineResult<()> {
    // Grouped text must strip back to plain digits.
    if !display.group_separator.is_whitespace() {
        return Err(EngineError::InvalidConfig {
            field: "display.group_separator".to_string(),
            message: format!("{:?} is not a whitespace character", display.group_separator),
        });
    }

    for &id in &display.breakdown_modes {
        find_mode_by_id(id).map_err(|_| EngineError::InvalidConfig {
            field: "display.breakdown_modes".to_string(),
            message: format!("unknown salary mode id {}", id),
        })?;
    }
    Ok(())
}
