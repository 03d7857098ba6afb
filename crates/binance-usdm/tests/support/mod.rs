//! Shared fixtures for the USD-M client tests.

#![allow(dead_code)]

use hmac::{Hmac, Mac};
use sha2::Sha256;
use wiremock::MockServer;

pub const API_KEY: &str = "test-api-key";
pub const API_SECRET: &str = "test-api-secret";
pub const NOW_MS: i64 = 1_700_000_000_000;

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Exchange info body for one symbol with the given filters.
pub fn exchange_info_body(symbol: &str, filters: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "timezone": "UTC",
        "serverTime": NOW_MS,
        "symbols": [{
            "symbol": symbol,
            "status": "TRADING",
            "filters": filters,
        }],
    })
}

/// Reference HMAC-SHA256 hex digest, independent of the crate under test.
pub fn expected_signature(secret: &str, message: &str) -> String {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(message.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
