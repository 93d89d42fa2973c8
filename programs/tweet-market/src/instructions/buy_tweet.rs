// instructions/buy_tweet.rs
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::error::*;
use crate::state::*;
use crate::utils::*;

/// Buy a tweet. An unclaimed id is sold at the base price, which goes to the
/// treasury in full. An owned id is a forced resale: the buyer pays the old
/// price plus a 20% markup, the previous owner is repaid at a 10% premium and
/// the treasury keeps the remainder. The whole transaction rolls back if any
/// check or transfer fails, so balances and the listing never move partially.
pub fn handler(ctx: Context<BuyTweet>, tweet_id: String) -> Result<()> {
    validate_tweet_id(&tweet_id)?;

    let buyer = ctx.accounts.buyer.key();
    let tweet = &mut ctx.accounts.tweet;

    match tweet.sale_state() {
        Some((current_owner, price)) => {
            // Forced resale. The payout destination comes from the caller and
            // must be the current owner's token account for the payment mint.
            let seller_token_account = ctx
                .accounts
                .seller_token_account
                .as_ref()
                .ok_or(MarketError::InvalidOwnerAccount)?;

            require!(
                seller_token_account.mint == ctx.accounts.payment_mint.key(),
                MarketError::WrongPaymentMint
            );
            check_resale_parties(buyer, current_owner, seller_token_account.owner)?;

            // Overflow in the quote aborts before any transfer
            let quote = quote_resale(price)?;

            token::transfer(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.buyer_token_account.to_account_info(),
                        to: seller_token_account.to_account_info(),
                        authority: ctx.accounts.buyer.to_account_info(),
                    },
                ),
                quote.seller_payout,
            )
            .map_err(|_| MarketError::InsufficientFunds)?;

            token::transfer(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.buyer_token_account.to_account_info(),
                        to: ctx.accounts.treasury.to_account_info(),
                        authority: ctx.accounts.buyer.to_account_info(),
                    },
                ),
                quote.treasury_cut,
            )
            .map_err(|_| MarketError::InsufficientFunds)?;

            tweet.record_sale(buyer, quote.new_price);

            msg!("Tweet {} resold to {}", tweet.tweet_id, buyer);
            msg!("New price: {} units", quote.new_price);
            msg!("Seller payout: {} units", quote.seller_payout);
            msg!("Treasury cut: {} units", quote.treasury_cut);
        }
        None => {
            // First purchase: the listing account was just created, the id is
            // written once here and never changes again.
            tweet.tweet_id = tweet_id;

            token::transfer(
                CpiContext::new(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.buyer_token_account.to_account_info(),
                        to: ctx.accounts.treasury.to_account_info(),
                        authority: ctx.accounts.buyer.to_account_info(),
                    },
                ),
                BASE_PRICE,
            )
            .map_err(|_| MarketError::InsufficientFunds)?;

            tweet.record_sale(buyer, BASE_PRICE);

            msg!("Tweet {} claimed by {}", tweet.tweet_id, buyer);
            msg!("Base price {} units paid to treasury", BASE_PRICE);
        }
    }

    Ok(())
}

#[derive(Accounts)]
#[instruction(tweet_id: String)]
pub struct BuyTweet<'info> {
    #[account(mut)]
    pub buyer: Signer<'info>,

    /// Buyer's token account the payment is debited from
    #[account(
        mut,
        constraint = buyer_token_account.mint == payment_mint.key() @ MarketError::WrongPaymentMint
    )]
    pub buyer_token_account: Box<Account<'info, TokenAccount>>,

    /// Listing for this tweet id, created on first purchase
    #[account(
        init_if_needed,
        payer = buyer,
        space = TweetListing::space(&tweet_id),
        seeds = [TWEET_SEED, payment_mint.key().as_ref(), tweet_id.as_bytes()],
        bump
    )]
    pub tweet: Box<Account<'info, TweetListing>>,

    /// Treasury token account receiving the protocol's share
    #[account(
        mut,
        seeds = [TREASURY_SEED, payment_mint.key().as_ref()],
        bump
    )]
    pub treasury: Box<Account<'info, TokenAccount>>,

    /// Current owner's token account, required once the tweet is owned.
    /// Ownership against the listing is checked in the handler.
    #[account(mut)]
    pub seller_token_account: Option<Box<Account<'info, TokenAccount>>>,

    /// The configured payment mint
    #[account(address = PAYMENT_MINT @ MarketError::WrongPaymentMint)]
    pub payment_mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
