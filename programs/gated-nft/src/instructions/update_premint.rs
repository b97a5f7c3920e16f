use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::PremintUpdated;
use crate::state::*;

/// Overwrite an active premint's uri and price in place.
/// A consumed premint is frozen and cannot be updated.
pub fn update_premint(
    ctx: Context<UpdatePremint>,
    premint_id: u64,
    token_uri: String,
    price: u64,
) -> Result<()> {
    require!(token_uri.len() <= MAX_URI_LEN, GatedNftError::UriTooLong);

    let premint = &mut ctx.accounts.premint;
    premint.apply_update(token_uri.clone(), price)?;

    msg!("Premint {} updated, price {} lamports", premint_id, price);

    emit!(PremintUpdated {
        collection: ctx.accounts.collection.key(),
        premint_id,
        token_uri,
        price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(premint_id: u64)]
pub struct UpdatePremint<'info> {
    /// The collection administrator
    pub authority: Signer<'info>,

    /// Collection state PDA
    #[account(
        has_one = authority @ GatedNftError::Unauthorized,
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
        mut,
        seeds = [
            PremintRecord::SEED_PREFIX,
            collection.key().as_ref(),
            premint_id.to_le_bytes().as_ref(),
        ],
        bump = premint.bump,
    )]
    pub premint: Account<'info, PremintRecord>,
}
