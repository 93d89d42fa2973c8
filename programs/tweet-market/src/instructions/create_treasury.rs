// instructions/create_treasury.rs
use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::*;

/// Create the treasury token account for the payment mint. The account is a
/// PDA that is its own authority, so only this program can ever move its
/// balance. Calling this twice fails on the init constraint before anything
/// is written, so an existing treasury is never reset.
pub fn handler(ctx: Context<CreateTreasury>) -> Result<()> {
    msg!("Treasury created for mint {}", ctx.accounts.payment_mint.key());
    msg!("Treasury address: {}", ctx.accounts.treasury.key());

    Ok(())
}

#[derive(Accounts)]
pub struct CreateTreasury<'info> {
    /// Whoever funds the account creation
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Treasury token account, authority is the PDA itself
    #[account(
        init,
        payer = payer,
        seeds = [TREASURY_SEED, payment_mint.key().as_ref()],
        bump,
        token::mint = payment_mint,
        token::authority = treasury
    )]
    pub treasury: Box<Account<'info, TokenAccount>>,

    /// The configured payment mint
    #[account(address = PAYMENT_MINT @ MarketError::WrongPaymentMint)]
    pub payment_mint: Box<Account<'info, Mint>>,

    pub rent: Sysvar<'info, Rent>,
    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}
