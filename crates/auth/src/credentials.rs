//! Secure API credential management.
//!
//! Uses the `secrecy` crate to prevent accidental logging of secret keys
//! and ensures memory is zeroed on drop.

use crate::error::AuthError;
use secrecy::{ExposeSecret, SecretString};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "BINANCE_USDM_API_KEY";
/// Environment variable holding the API secret.
pub const API_SECRET_VAR: &str = "BINANCE_USDM_API_SECRET";

/// API credentials for signed requests.
///
/// The secret key is wrapped in `SecretString` which:
/// - Prevents accidental Debug/Display printing
/// - Zeros memory on drop via zeroize
#[derive(Clone)]
pub struct ApiCredentials {
    api_key: String,
    secret_key: SecretString,
}

impl ApiCredentials {
    /// Load credentials from environment variables.
    ///
    /// Looks for:
    /// - `BINANCE_USDM_API_KEY` - The API key (sent as a header)
    /// - `BINANCE_USDM_API_SECRET` - The secret key (HMAC key only)
    ///
    /// # Errors
    /// Returns `AuthError::MissingEnvVars` naming every variable that is unset or blank.
    pub fn from_env() -> Result<Self, AuthError> {
        // Load .env file if present (ignores errors if file doesn't exist)
        dotenvy::dotenv().ok();

        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    ///
    /// Both variables are read before failing, so the error lists all gaps.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AuthError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        match (read(API_KEY_VAR), read(API_SECRET_VAR)) {
            (Some(api_key), Some(secret_key)) => Ok(Self::new(api_key, secret_key)),
            (api_key, secret_key) => {
                let missing = [(API_KEY_VAR, api_key), (API_SECRET_VAR, secret_key)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(var, _)| var.to_string())
                    .collect();
                Err(AuthError::MissingEnvVars(missing))
            }
        }
    }

    /// Create credentials from explicit values.
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key: SecretString::from(secret_key),
        }
    }

    /// Get the API key, for the `X-MBX-APIKEY` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// API key reduced to its first four characters, for diagnostics.
    pub fn masked_api_key(&self) -> String {
        let prefix: String = self.api_key.chars().take(4).collect();
        format!("{}****", prefix)
    }

    /// Expose the secret key for signing.
    ///
    /// **WARNING**: Only use this for cryptographic operations.
    /// Never log or display the return value.
    pub(crate) fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiCredentials")
            .field("api_key", &self.masked_api_key())
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}
