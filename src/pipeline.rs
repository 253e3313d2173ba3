//! The fixed six-step happy path: approve the router, discover the pool,
//! build swap parameters, swap, resolve and approve the Aave pool, supply.
//!
//! Each step suspends until its transaction confirms before the next
//! begins. A failed step stops the run; on-chain effects already committed
//! stay committed.

use anyhow::Result;
use async_trait::async_trait;
use ethers::types::{Address, U256};
use log::{error, info};
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::aave;
use crate::config::Config;
use crate::error::BotError;
use crate::evm::client::EvmSigner;
use crate::evm::contracts::ExactInputSingleParams;
use crate::evm::tokens::constants::{LINK, POOL_FEE_TIER, USDC};
use crate::evm::tokens::erc20::approve_token;
use crate::evm::utils::to_base_units;
use crate::uniswap::pool::{fetch_pool_info, PoolInfo};
use crate::uniswap::swap::{build_swap_params, execute_swap};

/// The on-chain operations the pipeline sequences, behind one seam so the
/// ordering can be exercised without a network.
#[async_trait]
pub trait ChainOps: Send + Sync {
    /// Address that receives the swap output and the Aave position.
    fn recipient(&self) -> Address;

    /// Approve the swap router to spend the input token.
    async fn approve_router(&self, amount: U256) -> Result<()>;

    /// Discover the pool for the fixed pair and read its metadata.
    async fn pool_info(&self) -> Result<PoolInfo>;

    /// Execute the swap with the given parameters.
    async fn swap(&self, params: ExactInputSingleParams) -> Result<()>;

    /// Resolve the current lending pool address.
    async fn resolve_lending_pool(&self) -> Result<Address>;

    /// Approve the lending pool to spend the output token.
    async fn approve_lending_pool(&self, pool: Address, amount: U256) -> Result<()>;

    /// Deposit the output token into the lending pool.
    async fn supply(&self, pool: Address, amount: U256) -> Result<()>;
}

/// ethers-backed implementation against the Sepolia deployments.
pub struct EvmChainOps {
    client: Arc<EvmSigner>,
    factory: Address,
    swap_router: Address,
    aave_provider: Address,
}

impl EvmChainOps {
    pub fn new(client: Arc<EvmSigner>, config: &Config) -> Result<Self> {
        let parse = |name: &str, raw: &str| -> Result<Address> {
            raw.parse()
                .map_err(|e| BotError::EthereumClient(format!("invalid {} address: {}", name, e)).into())
        };

        Ok(Self {
            factory: parse("factory", &config.factory_address)?,
            swap_router: parse("swap router", &config.swap_router_address)?,
            aave_provider: parse("Aave provider", &config.aave_provider_address)?,
            client,
        })
    }
}

#[async_trait]
impl ChainOps for EvmChainOps {
    fn recipient(&self) -> Address {
        use ethers::signers::Signer;
        self.client.signer().address()
    }

    async fn approve_router(&self, amount: U256) -> Result<()> {
        approve_token(self.client.clone(), USDC.address, self.swap_router, amount).await?;
        Ok(())
    }

    async fn pool_info(&self) -> Result<PoolInfo> {
        fetch_pool_info(
            self.client.clone(),
            self.factory,
            USDC.address,
            LINK.address,
            POOL_FEE_TIER,
        )
        .await
    }

    async fn swap(&self, params: ExactInputSingleParams) -> Result<()> {
        execute_swap(self.client.clone(), self.swap_router, params).await?;
        Ok(())
    }

    async fn resolve_lending_pool(&self) -> Result<Address> {
        aave::resolve_pool(self.client.clone(), self.aave_provider).await
    }

    async fn approve_lending_pool(&self, pool: Address, amount: U256) -> Result<()> {
        approve_token(self.client.clone(), LINK.address, pool, amount).await?;
        Ok(())
    }

    async fn supply(&self, pool: Address, amount: U256) -> Result<()> {
        aave::supply(
            self.client.clone(),
            pool,
            LINK.address,
            amount,
            self.recipient(),
        )
        .await?;
        Ok(())
    }
}

/// Run the pipeline for a human-readable amount. The figure is converted
/// with USDC decimals for the approval and swap, and with LINK decimals for
/// the Aave approval and deposit.
pub async fn run<C: ChainOps>(ops: &C, amount: Decimal) -> Result<()> {
    let amount_in = to_base_units(amount, USDC.decimals)?;
    let supply_amount = to_base_units(amount, LINK.decimals)?;

    info!(
        "Swapping {} {} for {} and supplying to Aave",
        amount, USDC.symbol, LINK.symbol
    );

    // Approval failures get the fixed wrapper; everything after propagates
    // unchanged.
    if let Err(e) = ops.approve_router(amount_in).await {
        error!("An error occurred during token approval: {:#}", e);
        return Err(BotError::ApprovalFailed.into());
    }

    let pool = ops.pool_info().await?;
    info!(
        "Pool {:?}: token0 {:?}, token1 {:?}, fee {}",
        pool.address, pool.token0, pool.token1, pool.fee
    );

    let params = build_swap_params(pool.fee, ops.recipient(), amount_in);
    ops.swap(params).await?;

    let lending_pool = ops.resolve_lending_pool().await?;
    ops.approve_lending_pool(lending_pool, supply_amount).await?;
    ops.supply(lending_pool, supply_amount).await?;

    info!("Pipeline complete");
    Ok(())
}
