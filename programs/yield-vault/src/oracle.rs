use anchor_lang::prelude::*;

use crate::{constants::USD_DECIMALS, errors::VaultError};

/// One oracle round as published by the price feed program:
/// a signed fixed-point answer with a feed-declared decimal exponent
/// plus freshness metadata.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug)]
pub struct PriceRound {
    pub round_id: u64,
    pub answer: i64,
    pub started_at: i64,
    pub updated_at: i64,
    pub answered_in_round: u64,
    pub decimals: u8,
}

impl PriceRound {
    /// Deserialize a round from a feed account, skipping the 8-byte
    /// account discriminator.
    pub fn load(account: &AccountInfo) -> Result<Self> {
        let data = account.try_borrow_data()?;
        if data.len() < 8 {
            return Err(error!(VaultError::InvalidPriceFeed));
        }
        Self::deserialize(&mut &data[8..]).map_err(|_| error!(VaultError::InvalidPriceFeed))
    }

    /// The round's answer normalized to 18-decimal USD fixed point.
    /// Rejects non-positive answers; staleness is not validated here.
    pub fn price_usd(&self) -> Result<u128> {
        normalize_price(self.answer, self.decimals)
    }
}

fn pow10(exp: u32) -> Result<u128> {
    10u128
        .checked_pow(exp)
        .ok_or(error!(VaultError::MathOverflow))
}

/// Scale a feed answer from its native decimal exponent to 18 decimals
pub fn normalize_price(answer: i64, feed_decimals: u8) -> Result<u128> {
    require!(answer > 0, VaultError::InvalidOraclePrice);
    let answer = answer as u128;
    let feed_decimals = feed_decimals as u32;

    if feed_decimals <= USD_DECIMALS {
        answer
            .checked_mul(pow10(USD_DECIMALS - feed_decimals)?)
            .ok_or(error!(VaultError::MathOverflow))
    } else {
        Ok(answer / pow10(feed_decimals - USD_DECIMALS)?)
    }
}

/// USD value of the vault's holdings: total_assets normalized by the
/// asset's own decimals, times the 18-decimal unit price.
pub fn total_value_usd(total_assets: u64, asset_decimals: u8, price_usd: u128) -> Result<u128> {
    (total_assets as u128)
        .checked_mul(price_usd)
        .ok_or(error!(VaultError::MathOverflow))?
        .checked_div(pow10(asset_decimals as u32)?)
        .ok_or(error!(VaultError::DivisionByZero))
}

/// USD value of one share. Falls back to the raw unit price when no
/// shares exist (1:1 bootstrap).
pub fn share_price_usd(
    total_value_usd: u128,
    total_shares: u64,
    share_decimals: u8,
    unit_price_usd: u128,
) -> Result<u128> {
    if total_shares == 0 {
        return Ok(unit_price_usd);
    }
    total_value_usd
        .checked_mul(pow10(share_decimals as u32)?)
        .ok_or(error!(VaultError::MathOverflow))?
        .checked_div(total_shares as u128)
        .ok_or(error!(VaultError::DivisionByZero))
}

#[cfg(test)]
mod tests {
    use super::*;

    const E18: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn test_normalize_8_decimal_feed() {
        // $2000 on an 8-decimal feed
        let price = normalize_price(2000_0000_0000, 8).unwrap();
        assert_eq!(price, 2000 * E18);
    }

    #[test]
    fn test_normalize_18_decimal_feed_is_identity() {
        let answer = 1_234_567_890_000_000_000i64;
        assert_eq!(normalize_price(answer, 18).unwrap(), answer as u128);
    }

    #[test]
    fn test_normalize_high_precision_feed_scales_down() {
        // 20-decimal feed: divide by 100
        assert_eq!(normalize_price(500, 20).unwrap(), 5);
    }

    #[test]
    fn test_non_positive_answer_rejected() {
        assert!(normalize_price(0, 8).is_err());
        assert!(normalize_price(-1, 8).is_err());
    }

    #[test]
    fn test_vault_valuation_one_unit_one_share() {
        // 1.0 unit held (9 decimals), 1.0 share outstanding, $2000 unit price
        let price = normalize_price(2000_0000_0000, 8).unwrap();
        let value = total_value_usd(1_000_000_000, 9, price).unwrap();
        assert_eq!(value, 2000 * E18);

        let share_price = share_price_usd(value, 1_000_000_000, 9, price).unwrap();
        assert_eq!(share_price, 2000 * E18);
    }

    #[test]
    fn test_price_update_reflected_without_vault_change() {
        let assets = 1_000_000_000u64;
        let before = total_value_usd(assets, 9, normalize_price(2000_0000_0000, 8).unwrap()).unwrap();
        let after = total_value_usd(assets, 9, normalize_price(3000_0000_0000, 8).unwrap()).unwrap();
        assert_eq!(before, 2000 * E18);
        assert_eq!(after, 3000 * E18);
    }

    #[test]
    fn test_share_price_after_yield() {
        // 2.0 units backing 1.0 share: each share is worth twice the unit price
        let price = normalize_price(1000_0000_0000, 8).unwrap();
        let value = total_value_usd(2_000_000_000, 9, price).unwrap();
        let share_price = share_price_usd(value, 1_000_000_000, 9, price).unwrap();
        assert_eq!(share_price, 2000 * E18);
    }

    #[test]
    fn test_share_price_bootstrap() {
        let price = normalize_price(2000_0000_0000, 8).unwrap();
        assert_eq!(share_price_usd(0, 0, 9, price).unwrap(), price);
    }
}
