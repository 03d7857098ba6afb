//! Shared pieces of the check binaries.

pub mod report;

/// Symbol checked when none is given on the command line.
pub const DEFAULT_SYMBOL: &str = "BTCUSDT";

/// Exit status for a failed request or unexpected response.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for missing credentials or invalid configuration.
pub const EXIT_CONFIG: u8 = 2;

/// Symbol from the first command-line argument, upper-cased.
pub fn symbol_from_args() -> String {
    symbol_or_default(std::env::args().nth(1))
}

fn symbol_or_default(arg: Option<String>) -> String {
    arg.map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_or_default() {
        assert_eq!(symbol_or_default(None), "BTCUSDT");
        assert_eq!(symbol_or_default(Some(" ethusdt ".into())), "ETHUSDT");
        assert_eq!(symbol_or_default(Some("".into())), "BTCUSDT");
    }
}
