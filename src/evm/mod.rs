// Re-export everything from submodules
pub mod client;
pub mod contracts;
pub mod tokens;
pub mod utils;

// Re-export commonly used items
pub use client::{create_signer_client, EvmSigner};
pub use tokens::constants::{LINK, POOL_FEE_TIER, USDC};
pub use utils::{explorer_tx_url, to_base_units};
