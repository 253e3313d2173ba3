use anyhow::Result;
use ethers::providers::Middleware;
use ethers::types::Address;
use log::debug;
use std::sync::Arc;

use crate::error::BotError;
use crate::evm::contracts::{UniswapV3Factory, UniswapV3Pool};

/// Metadata of a discovered Uniswap V3 pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolInfo {
    pub address: Address,
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
}

/// Look up the pool for a token pair at a fee tier and read its metadata.
/// The factory returns the zero address when no pool exists. No caching
/// across invocations.
pub async fn fetch_pool_info<M: Middleware + 'static>(
    client: Arc<M>,
    factory_address: Address,
    token_a: Address,
    token_b: Address,
    fee_tier: u32,
) -> Result<PoolInfo> {
    let factory = UniswapV3Factory::new(factory_address, client.clone());

    debug!(
        "Looking up pool for {:?}/{:?} at fee tier {}",
        token_a, token_b, fee_tier
    );
    let pool_address = factory.get_pool(token_a, token_b, fee_tier).call().await?;
    if pool_address == Address::zero() {
        return Err(BotError::PoolNotFound.into());
    }

    let pool = UniswapV3Pool::new(pool_address, client);
    let token0_call = pool.token_0();
    let token1_call = pool.token_1();
    let fee_call = pool.fee();
    let (token0, token1, fee) = tokio::try_join!(
        token0_call.call(),
        token1_call.call(),
        fee_call.call(),
    )?;

    Ok(PoolInfo {
        address: pool_address,
        token0,
        token1,
        fee,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evm::tokens::constants::{LINK, POOL_FEE_TIER, USDC};
    use ethers::providers::Provider;

    #[tokio::test]
    async fn zero_pool_address_is_reported_as_missing() {
        let (provider, mock) = Provider::mocked();
        // getPool eth_call returning the zero address
        mock.push::<String, _>(format!("0x{}", "0".repeat(64)))
            .unwrap();

        let err = fetch_pool_info(
            Arc::new(provider),
            Address::repeat_byte(0x01),
            USDC.address,
            LINK.address,
            POOL_FEE_TIER,
        )
        .await
        .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<BotError>(),
            Some(BotError::PoolNotFound)
        ));
    }
}
