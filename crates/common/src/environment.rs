//! USD-M futures endpoint selection.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the environment.
pub const ENVIRONMENT_VAR: &str = "BINANCE_USDM_ENVIRONMENT";

/// Which USD-M futures deployment the clients talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BinanceEnvironment {
    /// fapi.binance.com, real funds.
    #[default]
    Production,
    /// demo-fapi.binance.com, demo-trading funds.
    Demo,
}

/// Accepted spellings, matched case-insensitively after trimming.
const ALIASES: [(&str, BinanceEnvironment); 6] = [
    ("production", BinanceEnvironment::Production),
    ("prod", BinanceEnvironment::Production),
    ("mainnet", BinanceEnvironment::Production),
    ("demo", BinanceEnvironment::Demo),
    ("testnet", BinanceEnvironment::Demo),
    ("sandbox", BinanceEnvironment::Demo),
];

impl BinanceEnvironment {
    /// REST base URL, without a trailing slash.
    pub fn rest_base_url(self) -> &'static str {
        match self {
            Self::Production => "https://fapi.binance.com",
            Self::Demo => "https://demo-fapi.binance.com",
        }
    }

    /// Canonical lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Production => "production",
            Self::Demo => "demo",
        }
    }
}

impl fmt::Display for BinanceEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinanceEnvironment {
    type Err = ParseEnvironmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(wanted))
            .map(|(_, env)| *env)
            .ok_or_else(|| ParseEnvironmentError(s.to_string()))
    }
}

/// Unrecognised environment name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid environment '{0}', expected 'production' or 'demo'")]
pub struct ParseEnvironmentError(String);
