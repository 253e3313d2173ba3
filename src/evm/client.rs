use anyhow::Result;
use ethers::middleware::SignerMiddleware;
use ethers::providers::{Http, Provider};
use ethers::signers::{LocalWallet, Signer};
use std::sync::Arc;

use crate::error::BotError;

/// HTTP provider wrapped with the signing key. All contract calls go
/// through this middleware so writes are signed transparently.
pub type EvmSigner = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Create a signing client from an RPC endpoint and a hex private key,
/// pinned to the given chain id.
pub fn create_signer_client(
    rpc_url: &str,
    private_key: &str,
    chain_id: u64,
) -> Result<Arc<EvmSigner>> {
    let provider = Provider::<Http>::try_from(rpc_url)
        .map_err(|e| BotError::EthereumClient(format!("invalid RPC URL: {}", e)))?;

    let wallet = private_key
        .parse::<LocalWallet>()
        .map_err(|e| BotError::EthereumClient(format!("invalid private key: {}", e)))?
        .with_chain_id(chain_id);

    Ok(Arc::new(SignerMiddleware::new(provider, wallet)))
}
