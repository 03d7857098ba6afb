//! Shared building blocks for the USD-M futures clients.
//!
//! - [`BinanceEnvironment`]: production or demo REST endpoints
//! - [`ClientConfig`]: base URL, timeout and receive window from env vars
//! - [`QueryParams`]: ordered query parameters, encoded exactly as sent
//! - [`Clock`]: injectable time source for request timestamps
//! - [`init_logging`]: tracing subscriber for the binaries

mod clock;
mod config;
mod environment;
mod logging;
mod params;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{
    ClientConfig, ConfigError, BASE_URL_VAR, DEFAULT_RECV_WINDOW_MS, DEFAULT_TIMEOUT,
    RECV_WINDOW_VAR, TIMEOUT_VAR,
};
pub use environment::{BinanceEnvironment, ParseEnvironmentError, ENVIRONMENT_VAR};
pub use logging::init_logging;
pub use params::QueryParams;
