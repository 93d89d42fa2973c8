// error.rs
use anchor_lang::prelude::*;

#[error_code]
pub enum MarketError {
    #[msg("Not enough tokens to pay for the tweet")]
    InsufficientFunds,

    #[msg("You already own this tweet")]
    AlreadyOwner,

    #[msg("Seller token account does not belong to the current owner")]
    InvalidOwnerAccount,

    #[msg("Token account is not for the payment mint")]
    WrongPaymentMint,

    #[msg("Tweet id is empty or too long")]
    InvalidTweetId,

    #[msg("Math overflow")]
    MathOverflow,

    #[msg("Only the market authority can do this")]
    NotAuthority,

    #[msg("Burning from the treasury failed")]
    BurnFailed,
}
