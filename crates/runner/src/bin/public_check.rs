//! Connectivity and symbol-metadata check against the public endpoints.

use binance_usdm::{UsdmError, UsdmPublicClient};
use common::{BinanceEnvironment, ClientConfig};
use runner::report;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    common::init_logging();

    let symbol = runner::symbol_from_args();

    let config = match ClientConfig::from_env(BinanceEnvironment::Production) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(runner::EXIT_CONFIG);
        }
    };

    info!(
        environment = %config.environment,
        base_url = %config.base_url,
        symbol = %symbol,
        "Starting public check"
    );

    match run(&config, &symbol).await {
        Ok(()) => {
            info!("Public check complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Public check failed");
            eprintln!("Public check failed: {}", e);
            ExitCode::from(runner::EXIT_FAILURE)
        }
    }
}

async fn run(config: &ClientConfig, symbol: &str) -> Result<(), UsdmError> {
    let client = UsdmPublicClient::from_config(config)?;

    println!("Ping...");
    client.ping().await?;
    println!("OK");

    let server_time = client.server_time_ms().await?;
    println!("Server time (ms): {}", server_time);

    let rules = client.symbol_rules(symbol).await?;
    println!("\nSymbol rules:");
    for line in report::rules_lines(&rules) {
        println!("{}", line);
    }

    Ok(())
}
