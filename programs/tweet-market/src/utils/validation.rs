// utils/validation.rs
use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;

/// Validate a tweet id before any account gets touched
pub fn validate_tweet_id(tweet_id: &str) -> Result<()> {
    if tweet_id.is_empty() || tweet_id.len() > MAX_TWEET_ID_LEN {
        return Err(MarketError::InvalidTweetId.into());
    }
    Ok(())
}

/// Checks that must pass before a resale moves any funds: the buyer must not
/// already be the owner, and the payout destination must be a token account
/// actually controlled by the listing's current owner.
pub fn check_resale_parties(
    buyer: Pubkey,
    current_owner: Pubkey,
    seller_token_owner: Pubkey,
) -> Result<()> {
    if buyer == current_owner {
        return Err(MarketError::AlreadyOwner.into());
    }
    if seller_token_owner != current_owner {
        return Err(MarketError::InvalidOwnerAccount.into());
    }
    Ok(())
}
