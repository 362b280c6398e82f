//! Top-level Parley configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ModelConfig, ObservabilityConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PARLEY_*`)
/// 2. Project config (`parley.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ParleyConfig {
    pub model: ModelConfig,
    pub observability: ObservabilityConfig,
}

impl ParleyConfig {
    /// Load configuration for a project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let project_config_path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if project_config_path.exists() {
            Self::from_file(&project_config_path)?
        } else {
            Self::default()
        };

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.model.validate()?;
        if self.observability.log_level.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `PARLEY_MODEL_DELTA`, `PARLEY_MODEL_PENALTY`, etc.
    ///
    /// Numbers that fail to parse are ignored; unknown enum names are errors.
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("PARLEY_MODEL_DELTA") {
            if let Ok(v) = val.parse::<f64>() {
                self.model.delta = v;
            }
        }
        if let Ok(val) = std::env::var("PARLEY_MODEL_MULTA") {
            if let Ok(v) = val.parse::<f64>() {
                self.model.multa = v;
            }
        }
        if let Ok(val) = std::env::var("PARLEY_MODEL_PENALTY") {
            self.model.penalty = val.parse()?;
        }
        if let Ok(val) = std::env::var("PARLEY_MODEL_SEEDING") {
            self.model.seeding = val.parse()?;
        }
        if let Ok(val) = std::env::var("PARLEY_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        Ok(())
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
