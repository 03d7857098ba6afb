//! Signed, read-only account client.

use crate::error::UsdmError;
use auth::{ApiCredentials, RequestSigner};
use common::{BinanceEnvironment, ClientConfig, Clock, QueryParams, SystemClock};
use rest_client::RestClient;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the API key on signed requests.
const API_KEY_HEADER: &str = "X-MBX-APIKEY";

/// Client for the signed USD-M futures account endpoints.
///
/// Every request is signed with a fresh timestamp from the clock.
pub struct UsdmPrivateClient {
    client: RestClient,
    credentials: ApiCredentials,
    recv_window_ms: u64,
    clock: Arc<dyn Clock>,
}

impl UsdmPrivateClient {
    /// Create a client for an explicit base URL.
    ///
    /// # Arguments
    /// * `base_url` - REST base URL
    /// * `credentials` - API key and secret
    /// * `timeout` - Per-request timeout
    /// * `recv_window_ms` - Default `recvWindow` for signed requests
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        base_url: &str,
        credentials: ApiCredentials,
        timeout: Duration,
        recv_window_ms: u64,
    ) -> Result<Self, UsdmError> {
        Ok(Self {
            client: RestClient::new(base_url, timeout)?,
            credentials,
            recv_window_ms,
            clock: Arc::new(SystemClock),
        })
    }

    /// Create a client for an environment with default timeout and receive window.
    pub fn with_environment(
        credentials: ApiCredentials,
        environment: BinanceEnvironment,
    ) -> Result<Self, UsdmError> {
        Self::from_config(credentials, &ClientConfig::for_environment(environment))
    }

    /// Create a client from loaded configuration.
    pub fn from_config(
        credentials: ApiCredentials,
        config: &ClientConfig,
    ) -> Result<Self, UsdmError> {
        Self::new(
            &config.base_url,
            credentials,
            config.timeout,
            config.recv_window_ms,
        )
    }

    /// Replace the time source used for request timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn recv_window_ms(&self) -> u64 {
        self.recv_window_ms
    }

    /// Account summary.
    ///
    /// GET /fapi/v2/account
    pub async fn account(&self) -> Result<Value, UsdmError> {
        self.signed_get("/fapi/v2/account", &QueryParams::new()).await
    }

    /// Per-asset balances.
    ///
    /// GET /fapi/v2/balance
    pub async fn balances(&self) -> Result<Value, UsdmError> {
        self.signed_get("/fapi/v2/balance", &QueryParams::new()).await
    }

    /// Position risk, optionally for a single symbol.
    ///
    /// GET /fapi/v2/positionRisk
    pub async fn position_risk(&self, symbol: Option<&str>) -> Result<Value, UsdmError> {
        let mut params = QueryParams::new();
        if let Some(symbol) = symbol.filter(|s| !s.is_empty()) {
            params.push("symbol", symbol);
        }

        self.signed_get("/fapi/v2/positionRisk", &params).await
    }

    /// Signed GET returning the decoded JSON body.
    ///
    /// Appends `timestamp`, `recvWindow` and `signature` to `params` and
    /// sends the API key header.
    pub async fn signed_get(
        &self,
        path: &str,
        params: &QueryParams,
    ) -> Result<Value, UsdmError> {
        let signer = RequestSigner::new(&self.credentials, self.recv_window_ms);
        let timestamp = self.clock.now_ms();
        let signed_query = signer.sign_params(params, timestamp)?;

        let headers = [(API_KEY_HEADER, self.credentials.api_key())];

        tracing::debug!(
            path = %path,
            timestamp = timestamp,
            api_key = %self.credentials.masked_api_key(),
            "Signed GET"
        );

        let response: Value = self
            .client
            .get(path, Some(&signed_query), Some(&headers))
            .await?;

        Ok(response)
    }
}

impl std::fmt::Debug for UsdmPrivateClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsdmPrivateClient")
            .field("base_url", &self.client.base_url())
            .field("credentials", &self.credentials)
            .field("recv_window_ms", &self.recv_window_ms)
            .finish()
    }
}
