//! Read-only account check against the signed endpoints.

use auth::ApiCredentials;
use binance_usdm::{UsdmError, UsdmPrivateClient};
use common::{BinanceEnvironment, ClientConfig};
use runner::report;
use std::process::ExitCode;
use tracing::info;

#[tokio::main]
async fn main() -> ExitCode {
    common::init_logging();

    let symbol = runner::symbol_from_args();

    let config = match ClientConfig::from_env(BinanceEnvironment::Demo) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::from(runner::EXIT_CONFIG);
        }
    };

    let credentials = match ApiCredentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!(
                "Create a local .env (not committed) with {} and {} for demo trading.",
                auth::API_KEY_VAR,
                auth::API_SECRET_VAR
            );
            return ExitCode::from(runner::EXIT_CONFIG);
        }
    };

    info!(
        environment = %config.environment,
        base_url = %config.base_url,
        api_key = %credentials.masked_api_key(),
        symbol = %symbol,
        "Starting private check"
    );

    match run(credentials, &config, &symbol).await {
        Ok(()) => {
            info!("Private check complete");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Private check failed");
            eprintln!("Private check failed: {}", e);
            ExitCode::from(runner::EXIT_FAILURE)
        }
    }
}

async fn run(
    credentials: ApiCredentials,
    config: &ClientConfig,
    symbol: &str,
) -> Result<(), UsdmError> {
    let client = UsdmPrivateClient::from_config(credentials, config)?;

    println!("Account V2...");
    let account = client.account().await?;
    for line in report::field_lines(&account, &report::ACCOUNT_FIELDS) {
        println!("{}", line);
    }

    println!("\nBalance V2...");
    let balances = client.balances().await?;
    let lines = report::balance_lines(&balances);
    if lines.is_empty() {
        println!("No non-zero balances.");
    }
    for line in lines {
        println!("{}", line);
    }

    println!("\nPositionRisk V2 ({})...", symbol);
    let positions = client.position_risk(Some(symbol)).await?;
    match report::first_position(&positions) {
        Some(position) => {
            for line in report::field_lines(position, &report::POSITION_FIELDS) {
                println!("{}", line);
            }
        }
        None => println!("No positions returned (OK on a fresh demo account)."),
    }

    Ok(())
}
