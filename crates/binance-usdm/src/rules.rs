//! Symbol trading rules extracted from exchange info.

use crate::error::UsdmError;
use crate::responses::{ExchangeInfoResponse, SymbolInfo};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;

const PRICE_FILTER: &str = "PRICE_FILTER";
const LOT_SIZE: &str = "LOT_SIZE";

/// Price and quantity increments for one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRules {
    pub symbol: String,
    /// Minimum price increment.
    pub tick_size: Decimal,
    /// Minimum quantity increment.
    pub step_size: Decimal,
    /// Minimum order quantity.
    pub min_qty: Decimal,
}

impl SymbolRules {
    /// Extract the rules for `symbol` from an exchange info response.
    ///
    /// # Errors
    /// - `SymbolNotFound` if no entry carries that symbol name
    /// - `MissingFilter` if `PRICE_FILTER` or `LOT_SIZE` is absent
    /// - `MissingField` / `InvalidDecimal` for an absent or malformed value
    pub fn from_exchange_info(
        symbol: &str,
        info: &ExchangeInfoResponse,
    ) -> Result<Self, UsdmError> {
        let entry = info
            .symbols
            .iter()
            .find(|s| s.symbol == symbol)
            .ok_or_else(|| UsdmError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;

        Self::from_symbol_info(entry)
    }

    /// Extract the rules from a single symbol entry.
    pub fn from_symbol_info(entry: &SymbolInfo) -> Result<Self, UsdmError> {
        Ok(Self {
            symbol: entry.symbol.clone(),
            tick_size: decimal_field(entry, PRICE_FILTER, "tickSize")?,
            step_size: decimal_field(entry, LOT_SIZE, "stepSize")?,
            min_qty: decimal_field(entry, LOT_SIZE, "minQty")?,
        })
    }
}

impl fmt::Display for SymbolRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} tick_size={} step_size={} min_qty={}",
            self.symbol, self.tick_size, self.step_size, self.min_qty
        )
    }
}

fn decimal_field(
    entry: &SymbolInfo,
    filter: &'static str,
    field: &'static str,
) -> Result<Decimal, UsdmError> {
    let raw = entry
        .filter(filter)
        .ok_or_else(|| UsdmError::MissingFilter {
            symbol: entry.symbol.clone(),
            filter,
        })?
        .field(field)
        .ok_or_else(|| UsdmError::MissingField {
            symbol: entry.symbol.clone(),
            filter,
            field,
        })?;

    Decimal::from_str(&raw).map_err(|_| UsdmError::InvalidDecimal { field, value: raw })
}
