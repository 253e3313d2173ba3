use ethers::types::Address;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

// Known token information (Sepolia deployments)
pub const USDC_ADDRESS: &str = "0x1c7D4B196Cb0C7B01d743Fbc6116a902379C7238";
pub const LINK_ADDRESS: &str = "0x779877A7B0D9E8603169DdbD7836e478b4624789";

// Define token decimals
pub const USDC_DECIMALS: u32 = 6;
pub const LINK_DECIMALS: u32 = 18;

/// Uniswap V3 fee tier used for the USDC/LINK pool, in hundredths of a bip
/// (3000 = 0.3%).
pub const POOL_FEE_TIER: u32 = 3000;

pub const SEPOLIA_CHAIN_ID: u64 = 11155111;

/// An ERC-20 token descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub symbol: String,
    pub name: String,
    pub decimals: u32,
    pub address: Address,
    pub chain_id: u64,
}

lazy_static! {
    /// The input token: Sepolia USDC.
    pub static ref USDC: Token = Token {
        symbol: "USDC".to_string(),
        name: "USD Coin".to_string(),
        decimals: USDC_DECIMALS,
        address: USDC_ADDRESS.parse().expect("hard-coded USDC address is valid"),
        chain_id: SEPOLIA_CHAIN_ID,
    };

    /// The output token: Sepolia LINK.
    pub static ref LINK: Token = Token {
        symbol: "LINK".to_string(),
        name: "Chainlink".to_string(),
        decimals: LINK_DECIMALS,
        address: LINK_ADDRESS.parse().expect("hard-coded LINK address is valid"),
        chain_id: SEPOLIA_CHAIN_ID,
    };
}

/// Get token symbol from contract address
pub fn symbol_from_address(address: Address) -> &'static str {
    if address == USDC.address {
        "USDC"
    } else if address == LINK.address {
        "LINK"
    } else {
        "Unknown"
    }
}
