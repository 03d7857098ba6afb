//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Generic REST client for read-only HTTP requests.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://fapi.binance.com")
    /// * `timeout` - Per-request timeout
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and decode the JSON body.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/fapi/v1/time")
    /// * `query` - Optional query string (without leading '?'), sent verbatim
    /// * `headers` - Optional additional headers
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<T, RestError> {
        let response = self.send_get(path, query, headers).await?;
        self.handle_response(response).await
    }

    /// Make a GET request whose body carries no information.
    pub async fn get_empty(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<(), RestError> {
        let response = self.send_get(path, query, headers).await?;
        self.handle_empty_response(response).await
    }

    async fn send_get(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<Response, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(path = %path, "GET request");

        let mut request = self.client.get(&url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        Ok(request.send().await?)
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }

    /// Handle HTTP response and deserialize JSON body.
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, RestError> {
        let status = response.status();

        if status.is_success() {
            let body = response.text().await?;
            serde_json::from_str(&body).map_err(|e| {
                tracing::warn!(body = %body, error = %e, "Failed to parse response");
                RestError::Parse(e.to_string())
            })
        } else {
            Err(Self::http_error(status, response).await)
        }
    }

    /// Handle HTTP response for endpoints whose body is ignored.
    async fn handle_empty_response(&self, response: Response) -> Result<(), RestError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            Err(Self::http_error(status, response).await)
        }
    }

    async fn http_error(status: reqwest::StatusCode, response: Response) -> RestError {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "Request failed");

        RestError::HttpError {
            status: status.as_u16(),
            message: body,
        }
    }
}

impl std::fmt::Debug for RestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_no_query() {
        let client = RestClient::with_default_timeout("https://fapi.example.com").unwrap();
        assert_eq!(
            client.build_url("/fapi/v1/time", None),
            "https://fapi.example.com/fapi/v1/time"
        );
    }

    #[test]
    fn test_build_url_with_query() {
        let client = RestClient::with_default_timeout("https://fapi.example.com").unwrap();
        assert_eq!(
            client.build_url("/fapi/v1/exchangeInfo", Some("symbol=BTCUSDT")),
            "https://fapi.example.com/fapi/v1/exchangeInfo?symbol=BTCUSDT"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = RestClient::with_default_timeout("https://fapi.example.com/").unwrap();
        assert_eq!(client.base_url(), "https://fapi.example.com");
        assert_eq!(
            client.build_url("/fapi/v1/time", None),
            "https://fapi.example.com/fapi/v1/time"
        );
    }

    #[test]
    fn test_build_url_empty_query() {
        let client = RestClient::with_default_timeout("https://fapi.example.com").unwrap();
        assert_eq!(
            client.build_url("/fapi/v1/time", Some("")),
            "https://fapi.example.com/fapi/v1/time"
        );
    }
}
