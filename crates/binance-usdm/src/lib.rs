//! Binance USD-M futures REST clients.
//!
//! - **Public client**: connectivity check, server time, exchange info and
//!   per-symbol trading rules (tick size, step size, minimum quantity)
//! - **Private client**: HMAC-signed read-only account endpoints (account
//!   summary, balances, position risk)
//! - **Error handling**: transport and HTTP failures propagate unchanged;
//!   missing symbols, filters or fields raise descriptive data-shape errors
//!
//! No call is retried. Every call is one independent request.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::ApiCredentials;
//! use binance_usdm::{UsdmPrivateClient, UsdmPublicClient};
//! use common::BinanceEnvironment;
//!
//! let public = UsdmPublicClient::with_environment(BinanceEnvironment::Production)?;
//! public.ping().await?;
//! let rules = public.symbol_rules("BTCUSDT").await?;
//!
//! let credentials = ApiCredentials::from_env()?;
//! let private = UsdmPrivateClient::with_environment(credentials, BinanceEnvironment::Demo)?;
//! let positions = private.position_risk(Some("BTCUSDT")).await?;
//! ```

mod error;
mod private;
mod public;
mod responses;
mod rules;

pub use error::UsdmError;
pub use private::UsdmPrivateClient;
pub use public::UsdmPublicClient;
pub use responses::{ExchangeInfoResponse, ServerTimeResponse, SymbolFilter, SymbolInfo};
pub use rules::SymbolRules;
