//! Tracing setup: structured logging and event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;

use crate::config::{defaults, ObservabilityConfig};

/// Initialize the tracing subscriber with the default observability config:
/// JSON output at `info`, overridable through `PARLEY_LOG`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    init_tracing_from_config(&ObservabilityConfig::default())
}

/// Initialize JSON tracing with an explicit filter string (for testing or
/// embedding). `PARLEY_LOG` is not consulted.
pub fn init_tracing_with_filter(filter: &str) -> bool {
    install(EnvFilter::new(filter), true)
}

/// Initialize tracing from the observability section of the config.
///
/// `PARLEY_LOG` still wins over the configured level when set. Returns
/// `false` if a global subscriber was already installed.
pub fn init_tracing_from_config(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(defaults::LOG_FILTER_ENV)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    install(filter, config.json)
}

fn install(filter: EnvFilter, json: bool) -> bool {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test owns the global subscriber; every entry point after the first
    // must report that a subscriber already exists.
    #[test]
    fn test_only_first_init_installs_a_subscriber() {
        init_tracing_with_filter("parley_core=debug");

        assert!(!init_tracing());
        assert!(!init_tracing_with_filter("warn"));
        let config = ObservabilityConfig {
            log_level: "debug".to_string(),
            json: false,
        };
        assert!(!init_tracing_from_config(&config));

        // Events are safe to emit once a subscriber is installed.
        events::weights_rescaled(1.5);
        events::evaluation_before_first_offer();
    }
}
