use anyhow::Result;
use ethers::types::{TxHash, U256};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::error::BotError;

/// Convert a human-readable token amount to base units for the given
/// decimal precision. Rejects negative amounts and amounts finer than the
/// token can represent.
pub fn to_base_units(amount: Decimal, decimals: u32) -> Result<U256> {
    if amount.is_sign_negative() {
        return Err(BotError::InvalidAmount(format!("{} is negative", amount)).into());
    }

    let scale = Decimal::from(10u64.pow(decimals));
    let scaled = amount
        .checked_mul(scale)
        .ok_or_else(|| BotError::InvalidAmount(format!("{} overflows at scale {}", amount, decimals)))?;

    if scaled.fract() != Decimal::ZERO {
        return Err(BotError::InvalidAmount(format!(
            "{} has more than {} decimal places",
            amount, decimals
        ))
        .into());
    }

    let units = scaled
        .trunc()
        .to_u128()
        .ok_or_else(|| BotError::InvalidAmount(format!("{} does not fit in 128 bits", scaled)))?;

    Ok(U256::from(units))
}

/// Block-explorer link for a confirmed transaction.
pub fn explorer_tx_url(hash: TxHash) -> String {
    format!("https://sepolia.etherscan.io/tx/{:?}", hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_whole_usdc_amounts() {
        let units = to_base_units(Decimal::ONE, 6).unwrap();
        assert_eq!(units, U256::from(1_000_000u64));
    }

    #[test]
    fn converts_fractional_link_amounts() {
        // 2.5 LINK = 2.5 * 10^18 base units
        let units = to_base_units(Decimal::new(25, 1), 18).unwrap();
        assert_eq!(units, U256::from(2_500_000_000_000_000_000u128));
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(to_base_units(Decimal::NEGATIVE_ONE, 6).is_err());
    }

    #[test]
    fn rejects_amounts_below_token_resolution() {
        // 0.0000001 has 7 decimal places, USDC only carries 6
        assert!(to_base_units(Decimal::new(1, 7), 6).is_err());
    }

    #[test]
    fn explorer_link_points_at_sepolia_etherscan() {
        let url = explorer_tx_url(TxHash::zero());
        assert!(url.starts_with("https://sepolia.etherscan.io/tx/0x"));
    }
}
