//! Configuration system for Parley.
//! TOML-based, layered resolution: env > project file > defaults.

pub mod defaults;
pub mod model_config;
pub mod observability_config;
pub mod parley_config;

pub use model_config::{ModelConfig, PenaltyMode, WeightSeeding};
pub use observability_config::ObservabilityConfig;
pub use parley_config::ParleyConfig;
