// utils/pricing.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// Payment split for one resale. The treasury cut is derived as the residual
/// of the new price over the seller payout, so the three amounts always add
/// up exactly and no base unit is lost to rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaleQuote {
    pub new_price: u64,
    pub seller_payout: u64,
    pub treasury_cut: u64,
}

/// Price the buyer pays: previous price plus the fixed markup, floored
pub fn next_price(price: u64) -> Result<u64> {
    price
        .checked_add(price / PRICE_MARKUP_DIVISOR)
        .ok_or_else(|| MarketError::MathOverflow.into())
}

/// What the previous owner gets back: their price plus the premium, floored
pub fn seller_payout(price: u64) -> Result<u64> {
    price
        .checked_add(price / SELLER_PREMIUM_DIVISOR)
        .ok_or_else(|| MarketError::MathOverflow.into())
}

/// Full split for reselling a tweet last sold at `price`
pub fn quote_resale(price: u64) -> Result<SaleQuote> {
    let new_price = next_price(price)?;
    let payout = seller_payout(price)?;
    // payout <= new_price because the premium divisor is the larger one
    let treasury_cut = new_price
        .checked_sub(payout)
        .ok_or(MarketError::MathOverflow)?;

    Ok(SaleQuote {
        new_price,
        seller_payout: payout,
        treasury_cut,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_resale_of_base_price() {
        let quote = quote_resale(BASE_PRICE).unwrap();
        assert_eq!(quote.new_price, 1_200_000);
        assert_eq!(quote.seller_payout, 1_100_000);
        assert_eq!(quote.treasury_cut, 100_000);
    }

    #[test]
    fn test_split_is_exact() {
        for price in [1, 7, 999, 1_001, BASE_PRICE, 123_456_789, u64::MAX / 2] {
            let quote = quote_resale(price).unwrap();
            assert_eq!(
                quote.seller_payout + quote.treasury_cut,
                quote.new_price,
                "split leaked units at price {}",
                price
            );
        }
    }

    #[test]
    fn test_rounding_floors() {
        // 999 * 1.2 = 1198.8 and 999 * 1.1 = 1098.9, both floored
        let quote = quote_resale(999).unwrap();
        assert_eq!(quote.new_price, 1_198);
        assert_eq!(quote.seller_payout, 1_098);
        assert_eq!(quote.treasury_cut, 100);
    }

    #[test]
    fn test_price_strictly_increases() {
        let mut price = BASE_PRICE;
        for _ in 0..50 {
            let next = next_price(price).unwrap();
            assert!(next > price);
            price = next;
        }
    }

    #[test]
    fn test_tiny_prices_still_split_exactly() {
        // below both divisors the markup floors to zero
        let quote = quote_resale(4).unwrap();
        assert_eq!(quote.new_price, 4);
        assert_eq!(quote.seller_payout, 4);
        assert_eq!(quote.treasury_cut, 0);
    }

    #[test]
    fn test_overflow_fails_closed() {
        assert_eq!(
            next_price(u64::MAX),
            Err(MarketError::MathOverflow.into())
        );
        assert_eq!(
            seller_payout(u64::MAX),
            Err(MarketError::MathOverflow.into())
        );
        assert!(quote_resale(u64::MAX).is_err());
        // the largest price whose 20% markup still fits
        let max_ok = u64::MAX / 6 * 5;
        assert!(quote_resale(max_ok).is_ok());
    }
}
