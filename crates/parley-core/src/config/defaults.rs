// Single source of truth for all default values.

// --- Model ---
pub const DEFAULT_DELTA: f64 = 0.001;
pub const DEFAULT_MULTA: f64 = 0.1;

// --- Parameter names, as registered with the host ---
pub const PARAM_DELTA: &str = "delta";
pub const PARAM_MULTA: &str = "multa";

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "parley.toml";

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const LOG_FILTER_ENV: &str = "PARLEY_LOG";
