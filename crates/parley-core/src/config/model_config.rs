//! Opponent model configuration.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Whether repeated generic values are penalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PenaltyMode {
    /// Stable issues gain `delta`; nothing is ever subtracted.
    #[default]
    Disabled,
    /// A value already present anywhere in the previous offer loses `multa`.
    Enabled,
}

impl PenaltyMode {
    pub fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

impl fmt::Display for PenaltyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disabled => f.write_str("disabled"),
            Self::Enabled => f.write_str("enabled"),
        }
    }
}

impl FromStr for PenaltyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enabled" | "true" | "on" | "1" => Ok(Self::Enabled),
            "disabled" | "false" | "off" | "0" => Ok(Self::Disabled),
            other => Err(ConfigError::ValidationFailed {
                field: "model.penalty".to_string(),
                message: format!("unknown penalty mode '{other}'"),
            }),
        }
    }
}

/// When issue weights get their uniform `1 / issueCount` prior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightSeeding {
    /// Every declared issue is seeded at initialization.
    #[default]
    Uniform,
    /// An issue is seeded the first time an offer mentions it.
    Lazy,
}

impl FromStr for WeightSeeding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "lazy" => Ok(Self::Lazy),
            other => Err(ConfigError::ValidationFailed {
                field: "model.seeding".to_string(),
                message: format!("unknown seeding policy '{other}'"),
            }),
        }
    }
}

/// Tunable constants of the frequency model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Weight increment for an issue whose value did not change. Default: 0.001.
    pub delta: f64,
    /// Weight penalty for a reused value. Only read when `penalty` is enabled. Default: 0.1.
    pub multa: f64,
    pub penalty: PenaltyMode,
    pub seeding: WeightSeeding,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            delta: defaults::DEFAULT_DELTA,
            multa: defaults::DEFAULT_MULTA,
            penalty: PenaltyMode::Disabled,
            seeding: WeightSeeding::Uniform,
        }
    }
}

impl ModelConfig {
    /// Plain frequency model with the given increment.
    pub fn new(delta: f64) -> Self {
        Self {
            delta,
            ..Self::default()
        }
    }

    /// Enable the reused-value penalty.
    pub fn with_penalty(mut self, multa: f64) -> Self {
        self.multa = multa;
        self.penalty = PenaltyMode::Enabled;
        self
    }

    pub fn with_seeding(mut self, seeding: WeightSeeding) -> Self {
        self.seeding = seeding;
        self
    }

    /// Build a config from the host's parameter map.
    ///
    /// `delta` is always required; `multa` is required only when the penalty
    /// is enabled. Unknown keys are ignored.
    pub fn from_parameters(
        parameters: &HashMap<String, f64>,
        penalty: PenaltyMode,
    ) -> Result<Self, ConfigError> {
        let delta = required(parameters, defaults::PARAM_DELTA)?;
        let multa = if penalty.is_enabled() {
            required(parameters, defaults::PARAM_MULTA)?
        } else {
            parameters
                .get(defaults::PARAM_MULTA)
                .copied()
                .unwrap_or(defaults::DEFAULT_MULTA)
        };

        let config = Self {
            delta,
            multa,
            penalty,
            seeding: WeightSeeding::Uniform,
        };
        config.validate()?;
        Ok(config)
    }

    /// Both constants must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("model.delta", self.delta)?;
        if self.penalty.is_enabled() {
            check_positive("model.multa", self.multa)?;
        }
        Ok(())
    }
}

fn required(parameters: &HashMap<String, f64>, name: &str) -> Result<f64, ConfigError> {
    parameters
        .get(name)
        .copied()
        .ok_or_else(|| ConfigError::MissingParameter {
            name: name.to_string(),
        })
}

fn check_positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::ValidationFailed {
            field: field.to_string(),
            message: format!("must be a finite number greater than 0, got {value}"),
        });
    }
    Ok(())
}
