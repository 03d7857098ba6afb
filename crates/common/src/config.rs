//! Client configuration loaded from environment variables.

use crate::environment::{BinanceEnvironment, ENVIRONMENT_VAR};
use std::time::Duration;
use thiserror::Error;

/// Overrides the environment's REST base URL.
pub const BASE_URL_VAR: &str = "BINANCE_USDM_BASE_URL";
/// Request timeout in whole seconds.
pub const TIMEOUT_VAR: &str = "BINANCE_USDM_TIMEOUT_SECS";
/// Receive window in milliseconds.
pub const RECV_WINDOW_VAR: &str = "BINANCE_USDM_RECV_WINDOW_MS";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Default receive window for signed requests.
pub const DEFAULT_RECV_WINDOW_MS: u64 = 5_000;

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: &'static str, reason: String },
}

/// Connection settings shared by the public and private clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub environment: BinanceEnvironment,
    pub base_url: String,
    pub timeout: Duration,
    pub recv_window_ms: u64,
}

impl ClientConfig {
    /// Defaults for an environment.
    pub fn for_environment(environment: BinanceEnvironment) -> Self {
        Self {
            environment,
            base_url: environment.rest_base_url().to_string(),
            timeout: DEFAULT_TIMEOUT,
            recv_window_ms: DEFAULT_RECV_WINDOW_MS,
        }
    }

    /// Load configuration from the process environment.
    ///
    /// A `.env` file is read first if present. `default_environment` applies
    /// when `BINANCE_USDM_ENVIRONMENT` is unset.
    pub fn from_env(default_environment: BinanceEnvironment) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(default_environment, |var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset and blank variables fall back to defaults.
    pub fn from_lookup<F>(
        default_environment: BinanceEnvironment,
        lookup: F,
    ) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let environment = match read(ENVIRONMENT_VAR) {
            Some(raw) => raw
                .parse::<BinanceEnvironment>()
                .map_err(|e| ConfigError::InvalidValue {
                    var: ENVIRONMENT_VAR,
                    reason: e.to_string(),
                })?,
            None => default_environment,
        };

        let mut config = Self::for_environment(environment);

        if let Some(url) = read(BASE_URL_VAR) {
            config.base_url = url;
        }
        config.base_url = config.base_url.trim_end_matches('/').to_string();

        if let Some(raw) = read(TIMEOUT_VAR) {
            let secs = parse_positive(TIMEOUT_VAR, &raw)?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = read(RECV_WINDOW_VAR) {
            config.recv_window_ms = parse_positive(RECV_WINDOW_VAR, &raw)?;
        }

        Ok(config)
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.parse::<u64>() {
        Ok(0) => Err(ConfigError::InvalidValue {
            var,
            reason: "must be greater than zero".into(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::InvalidValue {
            var,
            reason: format!("'{}' is not a whole number ({})", raw, e),
        }),
    }
}
