pub mod aave;
pub mod config;
pub mod error;
pub mod evm;
pub mod pipeline;
pub mod uniswap;

// Re-export commonly used items
pub use config::Config;
pub use error::BotError;
pub use evm::client::create_signer_client;
pub use evm::tokens::constants::{LINK, POOL_FEE_TIER, USDC};
pub use pipeline::{ChainOps, EvmChainOps};

/// Crate version, surfaced in the startup banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
