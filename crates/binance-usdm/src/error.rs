//! Binance USD-M client error types.

use auth::AuthError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when talking to the USD-M futures REST API.
#[derive(Debug, Error)]
pub enum UsdmError {
    /// REST client error (network, timeout, non-2xx status, bad JSON).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Signing error.
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Exchange info did not list the requested symbol.
    #[error("Symbol not found in exchangeInfo: {symbol}")]
    SymbolNotFound { symbol: String },

    /// A symbol's filter list lacks a required filter type.
    #[error("Missing {filter} filter for symbol: {symbol}")]
    MissingFilter {
        symbol: String,
        filter: &'static str,
    },

    /// A filter lacks a required field.
    #[error("Missing {filter}.{field} for symbol: {symbol}")]
    MissingField {
        symbol: String,
        filter: &'static str,
        field: &'static str,
    },

    /// A numeric field could not be read as a decimal.
    #[error("Invalid decimal in {field}: {value:?}")]
    InvalidDecimal { field: &'static str, value: String },
}

impl UsdmError {
    /// Returns true for errors detected locally in an otherwise successful response.
    pub fn is_data_shape(&self) -> bool {
        matches!(
            self,
            Self::SymbolNotFound { .. }
                | Self::MissingFilter { .. }
                | Self::MissingField { .. }
                | Self::InvalidDecimal { .. }
        )
    }

    /// HTTP status of a non-2xx response, if that is what failed.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Rest(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_symbol_and_filter() {
        let err = UsdmError::MissingFilter {
            symbol: "BTCUSDT".into(),
            filter: "LOT_SIZE",
        };
        assert_eq!(err.to_string(), "Missing LOT_SIZE filter for symbol: BTCUSDT");
        assert!(err.is_data_shape());

        let err = UsdmError::SymbolNotFound {
            symbol: "NOPEUSDT".into(),
        };
        assert!(err.to_string().contains("NOPEUSDT"));
    }

    #[test]
    fn test_http_status() {
        let err = UsdmError::from(RestError::HttpError {
            status: 401,
            message: "{}".into(),
        });
        assert_eq!(err.http_status(), Some(401));
        assert!(!err.is_data_shape());
    }
}
