use crate::evm::tokens::constants::SEPOLIA_CHAIN_ID;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Uniswap V3 factory contract address
    pub factory_address: String,

    /// Uniswap SwapRouter02 contract address
    pub swap_router_address: String,

    /// Aave V3 PoolAddressesProvider contract address
    pub aave_provider_address: String,

    /// Chain id the signer is pinned to
    pub chain_id: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            factory_address: "0x0227628f3F023bb0B980b67D528571c95c6DaC1c".to_string(),
            swap_router_address: "0x3bFA4769FB09eefC5a80d6E87c3B9C650f7Ae48E".to_string(),
            aave_provider_address: "0x012bAC54348C0E635dCAc9D5FB99f06F24136C9A".to_string(),
            chain_id: SEPOLIA_CHAIN_ID,
        }
    }
}

impl Config {
    /// Creates a new configuration from environment variables, falling back
    /// to the Sepolia deployments.
    pub fn from_env() -> Self {
        use std::env;

        let defaults = Self::default();

        Self {
            factory_address: env::var("FACTORY_ADDRESS").unwrap_or(defaults.factory_address),
            swap_router_address: env::var("SWAP_ROUTER_ADDRESS")
                .unwrap_or(defaults.swap_router_address),
            aave_provider_address: env::var("AAVE_PROVIDER_ADDRESS")
                .unwrap_or(defaults.aave_provider_address),
            chain_id: env::var("CHAIN_ID")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.chain_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::types::Address;

    #[test]
    fn default_contract_addresses_are_valid() {
        let config = Config::default();
        assert!(config.factory_address.parse::<Address>().is_ok());
        assert!(config.swap_router_address.parse::<Address>().is_ok());
        assert!(config.aave_provider_address.parse::<Address>().is_ok());
    }

    #[test]
    fn default_chain_is_sepolia() {
        assert_eq!(Config::default().chain_id, 11155111);
    }
}
