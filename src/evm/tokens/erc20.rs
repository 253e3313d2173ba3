use anyhow::Result;
use ethers::types::{Address, TransactionReceipt, U256};
use log::info;
use std::sync::Arc;

use crate::error::BotError;
use crate::evm::client::EvmSigner;
use crate::evm::contracts::Erc20;
use crate::evm::utils::explorer_tx_url;

/// Submit one allowance-granting transaction and await one confirmation.
/// No retry, no timeout.
pub async fn approve_token(
    client: Arc<EvmSigner>,
    token: Address,
    spender: Address,
    amount: U256,
) -> Result<TransactionReceipt> {
    let contract = Erc20::new(token, client);

    info!("Sending approval transaction...");
    let call = contract.approve(spender, amount);
    let pending = call.send().await?;
    info!("Transaction sent: {:?}", *pending);

    let receipt = pending.await?.ok_or(BotError::TransactionDropped)?;
    println!(
        "Approval confirmed! {}",
        explorer_tx_url(receipt.transaction_hash)
    );

    Ok(receipt)
}
