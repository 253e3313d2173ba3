//! Swap-and-supply pipeline - Main executable
//!
//! Swaps USDC for LINK through the Uniswap V3 pool on Sepolia, then
//! supplies the LINK to the Aave V3 money market. One fixed happy path;
//! a failed step leaves earlier on-chain effects committed.
use anyhow::Context;
use dotenv::dotenv;
use log::{error, info};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use uniswap_aave_bot::{create_signer_client, pipeline, Config, EvmChainOps};

/// Application entry point
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    // Initialize logging with default level of "info"
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    info!("Starting uniswap-aave-bot v{}", uniswap_aave_bot::VERSION);

    // Load and validate environment variables
    let rpc_url = env::var("RPC_URL").context("RPC_URL must be set in environment variables")?;
    let private_key =
        env::var("PRIVATE_KEY").context("PRIVATE_KEY must be set in environment variables")?;

    // Amount of USDC to swap for LINK, defaulting to 1
    let amount = match env::args().nth(1) {
        Some(raw) => Decimal::from_str(&raw).context("amount must be a decimal number")?,
        None => Decimal::ONE,
    };

    let config = Config::from_env();

    info!("Connecting to Ethereum network...");
    let client = create_signer_client(&rpc_url, &private_key, config.chain_id)
        .context("Failed to create Ethereum client")?;

    let ops = EvmChainOps::new(client, &config)?;

    if let Err(e) = pipeline::run(&ops, amount).await {
        error!("An error occurred: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
