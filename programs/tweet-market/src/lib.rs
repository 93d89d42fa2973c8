use anchor_lang::prelude::*;

// Import modules
pub mod constants;
pub mod error;
pub mod state;
pub mod instructions;
pub mod utils;

// Re-export for convenience
pub use constants::*;
pub use error::*;
pub use state::*;
pub use instructions::*;
pub use utils::*;

declare_id!("6RqA2ZNyH7wJ9BQq8gtviWdAxUNqQFEDHGmXE8ZKgfLp");

#[program]
pub mod tweet_market {
    use super::*;

    /// Create the treasury token account for the payment mint
    pub fn create_treasury(ctx: Context<CreateTreasury>) -> Result<()> {
        instructions::create_treasury::handler(ctx)
    }

    /// Buy a tweet: a first purchase claims it at the base price, every later
    /// purchase pays a 20% markup split between the seller and the treasury
    pub fn buy_tweet(ctx: Context<BuyTweet>, tweet_id: String) -> Result<()> {
        instructions::buy_tweet::handler(ctx, tweet_id)
    }

    /// Burn tokens accumulated in the treasury (authority only)
    pub fn burn_treasury(ctx: Context<BurnTreasury>, amount: u64) -> Result<()> {
        instructions::burn_treasury::handler(ctx, amount)
    }
}
