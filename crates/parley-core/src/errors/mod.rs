//! Error handling for Parley.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod model_error;

pub use config_error::ConfigError;
pub use error_code::ParleyErrorCode;
pub use model_error::{ModelError, ModelResult};
