//! Authentication and signing for the Binance USD-M futures API.
//!
//! # Features
//!
//! - **Secure Credentials**: API secrets are wrapped in `SecretString` to prevent
//!   accidental logging and ensure memory is zeroed on drop.
//! - **HMAC-SHA256 Signing**: Signs the literal query string that is sent,
//!   in insertion order, with `timestamp` and `recvWindow` attached.
//! - **Environment Loading**: Credentials can be loaded from environment variables
//!   or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{ApiCredentials, RequestSigner};
//! use common::QueryParams;
//!
//! let credentials = ApiCredentials::from_env()?;
//! let signer = RequestSigner::new(&credentials, 5000);
//!
//! let params = QueryParams::new().with("symbol", "BTCUSDT");
//! let signed_query = signer.sign_params(&params, timestamp_ms)?;
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{ApiCredentials, API_KEY_VAR, API_SECRET_VAR};
pub use error::AuthError;
pub use signer::RequestSigner;
