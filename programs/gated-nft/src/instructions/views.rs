use anchor_lang::prelude::*;

use crate::errors::*;
use crate::state::*;

/// Snapshot of a premint record, returned through program return data.
#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct PremintData {
    pub token_uri: String,
    pub price: u64,
    pub active: bool,
}

pub fn get_premint(ctx: Context<ViewPremint>, _premint_id: u64) -> Result<PremintData> {
    let premint = &ctx.accounts.premint;
    Ok(PremintData {
        token_uri: premint.token_uri.clone(),
        price: premint.price,
        active: premint.active,
    })
}

pub fn get_balance(ctx: Context<ViewCollection>) -> Result<u64> {
    Ok(ctx.accounts.collection.treasury_balance)
}

pub fn total_supply(ctx: Context<ViewCollection>) -> Result<u64> {
    Ok(ctx.accounts.collection.total_minted)
}

pub fn next_token_id(ctx: Context<ViewCollection>) -> Result<u64> {
    Ok(ctx.accounts.collection.next_token_id)
}

#[derive(Accounts)]
pub struct ViewCollection<'info> {
    /// Collection state PDA
    #[account(
        seeds = [
            CollectionState::SEED_PREFIX,
            collection.authority.as_ref(),
            collection.symbol.as_bytes(),
        ],
        bump = collection.bump,
    )]
    pub collection: Account<'info, CollectionState>,
}

#[derive(Accounts)]
#[instruction(premint_id: u64)]
pub struct ViewPremint<'info> {
    /// Collection state PDA
    #[account(
        seeds = [
            CollectionState::SEED_PREFIX,
            collection.authority.as_ref(),
            collection.symbol.as_bytes(),
        ],
        bump = collection.bump,
        constraint = premint_id >= 1 && premint_id <= collection.premint_count
            @ GatedNftError::InvalidPremintId,
    )]
    pub collection: Account<'info, CollectionState>,

    /// Premint record PDA
    #[account(
        seeds = [
            PremintRecord::SEED_PREFIX,
            collection.key().as_ref(),
            premint_id.to_le_bytes().as_ref(),
        ],
        bump = premint.bump,
    )]
    pub premint: Account<'info, PremintRecord>,
}
