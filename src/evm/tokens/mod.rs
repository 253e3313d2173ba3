pub mod constants;
pub mod erc20;

pub use constants::{Token, LINK, POOL_FEE_TIER, USDC};
pub use erc20::approve_token;
