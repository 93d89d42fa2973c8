// instructions/burn_treasury.rs
use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};
use crate::constants::*;
use crate::error::*;

/// Burn tokens out of the treasury. The treasury never pays anyone, so this
/// is the only way its balance goes down.
pub fn handler(ctx: Context<BurnTreasury>, amount: u64) -> Result<()> {
    let mint_key = ctx.accounts.payment_mint.key();

    token::burn(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.payment_mint.to_account_info(),
                from: ctx.accounts.treasury.to_account_info(),
                authority: ctx.accounts.treasury.to_account_info(),
            },
            &[&[
                TREASURY_SEED,
                mint_key.as_ref(),
                &[ctx.bumps.treasury],
            ]],
        ),
        amount,
    )
    .map_err(|_| MarketError::BurnFailed)?;

    msg!("Burned {} units from the treasury", amount);

    Ok(())
}

#[derive(Accounts)]
pub struct BurnTreasury<'info> {
    #[account(mut, address = BURN_AUTHORITY @ MarketError::NotAuthority)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TREASURY_SEED, payment_mint.key().as_ref()],
        bump,
        token::mint = payment_mint,
        token::authority = treasury
    )]
    pub treasury: Box<Account<'info, TokenAccount>>,

    #[account(mut, address = PAYMENT_MINT @ MarketError::WrongPaymentMint)]
    pub payment_mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
}
