//! Unauthenticated market-metadata client.

use crate::error::UsdmError;
use crate::responses::{ExchangeInfoResponse, ServerTimeResponse};
use crate::rules::SymbolRules;
use common::{BinanceEnvironment, ClientConfig, QueryParams};
use rest_client::RestClient;
use std::time::Duration;

/// Client for the public USD-M futures endpoints.
pub struct UsdmPublicClient {
    client: RestClient,
}

impl UsdmPublicClient {
    /// Create a client for an explicit base URL.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UsdmError> {
        Ok(Self {
            client: RestClient::new(base_url, timeout)?,
        })
    }

    /// Create a client for an environment with the default timeout.
    pub fn with_environment(environment: BinanceEnvironment) -> Result<Self, UsdmError> {
        Self::from_config(&ClientConfig::for_environment(environment))
    }

    /// Create a client from loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, UsdmError> {
        Self::new(&config.base_url, config.timeout)
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Test connectivity.
    ///
    /// GET /fapi/v1/ping
    pub async fn ping(&self) -> Result<(), UsdmError> {
        self.client.get_empty("/fapi/v1/ping", None, None).await?;
        tracing::debug!("Ping succeeded");
        Ok(())
    }

    /// Current server time in milliseconds.
    ///
    /// GET /fapi/v1/time
    pub async fn server_time_ms(&self) -> Result<i64, UsdmError> {
        let response: ServerTimeResponse = self.client.get("/fapi/v1/time", None, None).await?;
        Ok(response.server_time)
    }

    /// Exchange info restricted to one symbol.
    ///
    /// GET /fapi/v1/exchangeInfo
    pub async fn exchange_info(&self, symbol: &str) -> Result<ExchangeInfoResponse, UsdmError> {
        let query = QueryParams::new().with("symbol", symbol).to_query_string();

        let response: ExchangeInfoResponse = self
            .client
            .get("/fapi/v1/exchangeInfo", Some(&query), None)
            .await?;

        tracing::debug!(
            symbol = %symbol,
            symbols = response.symbols.len(),
            "Exchange info received"
        );

        Ok(response)
    }

    /// Tick size, step size and minimum quantity for a symbol.
    ///
    /// # Errors
    /// Fails on transport or HTTP errors, and with a data-shape error naming
    /// the symbol or filter when the response lacks it.
    pub async fn symbol_rules(&self, symbol: &str) -> Result<SymbolRules, UsdmError> {
        let info = self.exchange_info(symbol).await?;
        SymbolRules::from_exchange_info(symbol, &info)
    }
}

impl std::fmt::Debug for UsdmPublicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsdmPublicClient")
            .field("base_url", &self.client.base_url())
            .finish()
    }
}
