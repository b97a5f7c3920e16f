use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::errors::*;
use crate::events::TreasuryWithdrawn;
use crate::state::*;

/// Transfer the full accumulated treasury balance to the administrator.
/// The tracked balance is zeroed strictly before the lamports move, so a
/// re-entered call can never observe a stale nonzero balance. The vault's
/// rent-exempt seed deposit stays behind.
pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    let amount = collection.take_treasury_balance()?;

    let collection_key = collection.key();
    let seeds = &[
        CollectionState::TREASURY_SEED_PREFIX,
        collection_key.as_ref(),
        &[collection.treasury_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.treasury.to_account_info(),
                to: ctx.accounts.authority.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    msg!("Withdrew {} lamports to {}", amount, ctx.accounts.authority.key());

    emit!(TreasuryWithdrawn {
        collection: collection_key,
        authority: ctx.accounts.authority.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The collection administrator receiving the funds
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Collection state PDA
    #[account(
        mut,
        has_one = authority @ GatedNftError::Unauthorized,
        seeds = [
            CollectionState::SEED_PREFIX,
            collection.authority.as_ref(),
            collection.symbol.as_bytes(),
        ],
        bump = collection.bump,
    )]
    pub collection: Account<'info, CollectionState>,

    /// Treasury vault PDA
    /// CHECK: Zero-data lamport vault, derived from the collection state
    #[account(
        mut,
        seeds = [CollectionState::TREASURY_SEED_PREFIX, collection.key().as_ref()],
        bump = collection.treasury_bump,
    )]
    pub treasury: UncheckedAccount<'info>,

    /// System program
    pub system_program: Program<'info, System>,
}
