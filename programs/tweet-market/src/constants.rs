// constants.rs
use anchor_lang::prelude::*;

// ============================================================================
// PRICING
// ============================================================================

/// First sale price of any tweet, in payment-token base units
pub const BASE_PRICE: u64 = 1_000_000;

/// Each resale raises the price by 1/5 of the previous price (20% markup)
pub const PRICE_MARKUP_DIVISOR: u64 = 5;

/// The seller is repaid their price plus 1/10 of it (10% premium)
pub const SELLER_PREMIUM_DIVISOR: u64 = 10;

/// Longest tweet id a listing will store
pub const MAX_TWEET_ID_LEN: usize = 32;

// ============================================================================
// FIXED KEYS
// ============================================================================

/// Mint of the only token accepted as payment
pub const PAYMENT_MINT: Pubkey =
    Pubkey::from_str_const("NUs8YQwGwuiKUenAvw4c7MZGu9yDDomFQrBPFfJgRfu");

/// The only key allowed to burn from the treasury
pub const BURN_AUTHORITY: Pubkey =
    Pubkey::from_str_const("HmLqZp82DU1VuBMywduQnGwyUZ4dWjE85a8kpMdEdzEx");

// ============================================================================
// PDA SEEDS
// ============================================================================

pub const TWEET_SEED: &[u8] = b"tweet";
pub const TREASURY_SEED: &[u8] = b"treasury";
