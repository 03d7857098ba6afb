//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - Read-only GET requests with a per-request timeout
//! - JSON response deserialization
//! - Header injection for authentication
//! - Any non-2xx status surfaced as `RestError::HttpError`, never retried
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct TimeResponse {
//!     #[serde(rename = "serverTime")]
//!     server_time: i64,
//! }
//!
//! let client = RestClient::with_default_timeout("https://fapi.binance.com")?;
//! let time: TimeResponse = client.get("/fapi/v1/time", None, None).await?;
//! ```

mod client;
mod error;

pub use client::RestClient;
pub use error::RestError;
