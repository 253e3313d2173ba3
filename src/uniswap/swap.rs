use anyhow::Result;
use ethers::types::{Address, TransactionReceipt, U256};
use log::info;
use std::sync::Arc;

use crate::error::BotError;
use crate::evm::client::EvmSigner;
use crate::evm::contracts::{ExactInputSingleParams, SwapRouter};
use crate::evm::tokens::constants::{LINK, USDC};
use crate::evm::utils::explorer_tx_url;

/// Build the exact-input-single parameter record for the fixed USDC->LINK
/// pair. The minimum-output and price-limit guards stay at zero.
pub fn build_swap_params(
    pool_fee: u32,
    recipient: Address,
    amount_in: U256,
) -> ExactInputSingleParams {
    ExactInputSingleParams {
        token_in: USDC.address,
        token_out: LINK.address,
        fee: pool_fee,
        recipient,
        amount_in,
        amount_out_minimum: U256::zero(),
        sqrt_price_limit_x96: U256::zero(),
    }
}

/// Submit the swap transaction and await its confirmation.
pub async fn execute_swap(
    client: Arc<EvmSigner>,
    router_address: Address,
    params: ExactInputSingleParams,
) -> Result<TransactionReceipt> {
    let router = SwapRouter::new(router_address, client);

    info!(
        "Swapping {} {} base units for {}",
        params.amount_in, USDC.symbol, LINK.symbol
    );
    let call = router.exact_input_single(params);
    let pending = call.send().await?;
    info!("Transaction sent: {:?}", *pending);

    let receipt = pending.await?.ok_or(BotError::TransactionDropped)?;
    println!("Receipt: {}", explorer_tx_url(receipt.transaction_hash));

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_use_the_fixed_pair() {
        let params = build_swap_params(3000, Address::repeat_byte(0x11), U256::from(1_000_000u64));
        assert_eq!(params.token_in, USDC.address);
        assert_eq!(params.token_out, LINK.address);
        assert_eq!(params.fee, 3000);
    }

    #[test]
    fn guards_are_disabled() {
        let params = build_swap_params(3000, Address::repeat_byte(0x11), U256::from(1_000_000u64));
        assert_eq!(params.amount_out_minimum, U256::zero());
        assert_eq!(params.sqrt_price_limit_x96, U256::zero());
    }

    #[test]
    fn recipient_and_amount_pass_through() {
        let recipient = Address::repeat_byte(0x22);
        let params = build_swap_params(500, recipient, U256::from(42u64));
        assert_eq!(params.recipient, recipient);
        assert_eq!(params.amount_in, U256::from(42u64));
    }
}
