//! Stable error codes for host bindings.

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_PARAMETER: &str = "MISSING_PARAMETER";
pub const NO_OFFERS_OBSERVED: &str = "NO_OFFERS_OBSERVED";
pub const EMPTY_DOMAIN: &str = "EMPTY_DOMAIN";
pub const INVALID_SNAPSHOT: &str = "INVALID_SNAPSHOT";
pub const LOCK_POISONED: &str = "LOCK_POISONED";

/// Maps an error to a stable, machine-readable code.
pub trait ParleyErrorCode {
    fn error_code(&self) -> &'static str;
}
