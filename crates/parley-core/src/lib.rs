//! # parley-core
//!
//! Foundation crate for the Parley opponent model.
//! Defines the negotiation domain types, errors, config, the `OpponentModel`
//! trait, parameter metadata, and tracing setup.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::{ModelConfig, ParleyConfig, PenaltyMode, WeightSeeding};
pub use errors::{ConfigError, ModelError, ModelResult, ParleyErrorCode};
pub use models::ParameterSpec;
pub use traits::OpponentModel;
pub use types::{IssueId, IssueValue, Offer};
