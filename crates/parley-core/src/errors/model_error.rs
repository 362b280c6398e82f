//! Opponent model errors.

use super::error_code::{self, ParleyErrorCode};
use super::ConfigError;

/// Errors raised by the opponent model.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// `evaluate` was called before any offer was received; the per-value
    /// estimate `count / rounds` has a zero denominator.
    #[error("No offers observed yet: cannot estimate utility with zero rounds")]
    NoOffersObserved,

    #[error("Domain has no issues")]
    EmptyDomain,

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Model lock poisoned")]
    LockPoisoned,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type ModelResult<T> = Result<T, ModelError>;

impl ParleyErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NoOffersObserved => error_code::NO_OFFERS_OBSERVED,
            Self::EmptyDomain => error_code::EMPTY_DOMAIN,
            Self::InvalidSnapshot(_) => error_code::INVALID_SNAPSHOT,
            Self::LockPoisoned => error_code::LOCK_POISONED,
            Self::Config(e) => e.error_code(),
        }
    }
}
