//! Console rendering of check results.

use binance_usdm::SymbolRules;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Account fields printed by the private check.
pub const ACCOUNT_FIELDS: [&str; 4] = [
    "totalWalletBalance",
    "availableBalance",
    "totalUnrealizedProfit",
    "totalMarginBalance",
];

/// Position fields printed by the private check.
pub const POSITION_FIELDS: [&str; 6] = [
    "symbol",
    "positionAmt",
    "entryPrice",
    "unRealizedProfit",
    "leverage",
    "marginType",
];

/// `key: value` lines for the keys present in a JSON object.
///
/// Strings print without quotes; missing keys are skipped.
pub fn field_lines(value: &Value, keys: &[&str]) -> Vec<String> {
    keys.iter()
        .filter_map(|key| value.get(*key).map(|v| format!("{}: {}", key, plain(v))))
        .collect()
}

/// One line per balance entry whose `balance` is non-zero.
pub fn balance_lines(balances: &Value) -> Vec<String> {
    let Some(entries) = balances.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter(|entry| !is_zero(entry.get("balance")))
        .map(|entry| {
            let field = |name: &str| entry.get(name).map(plain).unwrap_or_default();
            format!(
                "{}: balance={} available={}",
                field("asset"),
                field("balance"),
                field("availableBalance")
            )
        })
        .collect()
}

/// First entry of a position risk list, if any.
pub fn first_position(positions: &Value) -> Option<&Value> {
    positions.as_array().and_then(|list| list.first())
}

/// Lines describing a symbol's trading rules.
pub fn rules_lines(rules: &SymbolRules) -> Vec<String> {
    vec![
        format!("symbol: {}", rules.symbol),
        format!("tick_size: {}", rules.tick_size),
        format!("step_size: {}", rules.step_size),
        format!("min_qty: {}", rules.min_qty),
    ]
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_zero(value: Option<&Value>) -> bool {
    value
        .map(plain)
        .and_then(|s| Decimal::from_str(&s).ok())
        .is_some_and(|d| d.is_zero())
}
