//! Error display strings and codes.

use parley_core::errors::{ConfigError, ModelError, ParleyErrorCode};

#[test]
fn test_model_error_codes() {
    assert_eq!(
        ModelError::NoOffersObserved.error_code(),
        "NO_OFFERS_OBSERVED"
    );
    assert_eq!(ModelError::EmptyDomain.error_code(), "EMPTY_DOMAIN");
    assert_eq!(ModelError::LockPoisoned.error_code(), "LOCK_POISONED");
    assert_eq!(
        ModelError::InvalidSnapshot("bad".into()).error_code(),
        "INVALID_SNAPSHOT"
    );
}

#[test]
fn test_config_errors_convert_into_model_errors() {
    let err: ModelError = ConfigError::MissingParameter {
        name: "delta".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "MISSING_PARAMETER");
    assert_eq!(
        err.to_string(),
        "Configuration error: Missing required parameter: delta"
    );

    let err: ModelError = ConfigError::FileNotFound {
        path: "/nope".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_no_offers_message_mentions_rounds() {
    let msg = ModelError::NoOffersObserved.to_string();
    assert!(msg.contains("zero rounds"));
}
