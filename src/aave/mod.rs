//! Aave V3 money-market operations: pool address resolution and deposits.

use anyhow::Result;
use ethers::types::{Address, TransactionReceipt, U256};
use log::info;
use std::sync::Arc;

use crate::error::BotError;
use crate::evm::client::EvmSigner;
use crate::evm::contracts::{AavePool, AavePoolAddressesProvider};
use crate::evm::utils::explorer_tx_url;

/// Gas limit override for `supply`; estimation against the Sepolia pool is
/// unreliable.
pub const SUPPLY_GAS_LIMIT: u64 = 1_000_000;

/// Read the current pool address from the addresses provider.
pub async fn resolve_pool(client: Arc<EvmSigner>, provider_address: Address) -> Result<Address> {
    let provider = AavePoolAddressesProvider::new(provider_address, client);
    let pool_address = provider.get_pool().call().await?;
    info!("Aave pool resolved: {:?}", pool_address);
    Ok(pool_address)
}

/// Deposit tokens into the pool on behalf of the caller and await the
/// confirmation. Referral codes are inactive on Aave V3, so zero is passed.
pub async fn supply(
    client: Arc<EvmSigner>,
    pool_address: Address,
    asset: Address,
    amount: U256,
    on_behalf_of: Address,
) -> Result<TransactionReceipt> {
    let pool = AavePool::new(pool_address, client);

    info!("Depositing {} base units into Aave...", amount);
    let call = pool
        .supply(asset, amount, on_behalf_of, 0)
        .gas(SUPPLY_GAS_LIMIT);
    let pending = call.send().await?;
    info!("Transaction sent: {:?}", *pending);

    let receipt = pending.await?.ok_or(BotError::TransactionDropped)?;
    println!(
        "Deposit confirmed! {}",
        explorer_tx_url(receipt.transaction_hash)
    );

    Ok(receipt)
}
