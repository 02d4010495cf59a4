use std::env;
use std::path::PathBuf;

use tracing::warn;

/// Service configuration, resolved once at startup and passed down
/// explicitly. Nothing in the planning pipeline reads ambient state.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Listen address for the HTTP server
    pub bind_addr: String,
    /// Forecast horizon used when a request does not specify one
    pub default_horizon: u32,
    /// Upper bound on requested horizons
    pub horizon_cap: u32,
    /// Seed for every Monte-Carlo evaluation, fixed for reproducibility
    pub seed: u64,
    /// Optional CSV file of demand history to seed the store from
    pub data_path: Option<PathBuf>,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            bind_addr: "127.0.0.1:3000".to_string(),
            default_horizon: 90,
            horizon_cap: 365,
            seed: 42,
            data_path: None,
            request_timeout_secs: 30,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                warn!(key, %raw, "unparseable value, using default");
                fallback
            }
        },
        Err(_) => fallback,
    }
}

impl ServiceConfig {
    /// Build the configuration from `STOCKPLAN_*` environment variables,
    /// falling back to defaults for anything unset
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();
        ServiceConfig {
            bind_addr: env::var("STOCKPLAN_ADDR").unwrap_or(defaults.bind_addr),
            default_horizon: parse_env("STOCKPLAN_HORIZON", defaults.default_horizon),
            horizon_cap: defaults.horizon_cap,
            seed: parse_env("STOCKPLAN_SEED", defaults.seed),
            data_path: env::var("STOCKPLAN_DATA").ok().map(PathBuf::from),
            request_timeout_secs: parse_env(
                "STOCKPLAN_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }
}
