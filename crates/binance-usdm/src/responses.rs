//! Binance USD-M futures response types.

use serde::Deserialize;
use std::collections::HashMap;

/// Response from GET /fapi/v1/time.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerTimeResponse {
    #[serde(rename = "serverTime")]
    pub server_time: i64,
}

/// Response from GET /fapi/v1/exchangeInfo.
///
/// Only the parts needed for trading rules are decoded.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeInfoResponse {
    #[serde(default)]
    pub symbols: Vec<SymbolInfo>,
}

/// One entry of `exchangeInfo.symbols`.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolInfo {
    /// Empty when the entry has no `symbol` key, so lookups by name miss it.
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub filters: Vec<SymbolFilter>,
}

/// A trading-rule filter, keyed by `filterType`.
///
/// Remaining fields are kept as raw JSON since each filter type has its own.
#[derive(Debug, Clone, Deserialize)]
pub struct SymbolFilter {
    #[serde(rename = "filterType")]
    pub filter_type: String,
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

impl SymbolInfo {
    /// First filter with the given `filterType`.
    pub fn filter(&self, filter_type: &str) -> Option<&SymbolFilter> {
        self.filters.iter().find(|f| f.filter_type == filter_type)
    }
}

impl SymbolFilter {
    /// Field rendered as text; numbers are accepted as well as strings.
    pub fn field(&self, name: &str) -> Option<String> {
        match self.fields.get(name)? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
