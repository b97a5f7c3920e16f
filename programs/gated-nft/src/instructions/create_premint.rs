use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::PremintCreated;
use crate::state::*;

/// Append a new premint allocation with the next sequential id.
/// There is no bound on the number of premints beyond the supply cap,
/// which is enforced at consumption time.
pub fn create_premint(ctx: Context<CreatePremint>, token_uri: String, price: u64) -> Result<()> {
    require!(token_uri.len() <= MAX_URI_LEN, GatedNftError::UriTooLong);

    let collection = &mut ctx.accounts.collection;
    let premint_id = collection.reserve_next_premint_id()?;

    let premint = &mut ctx.accounts.premint;
    premint.id = premint_id;
    premint.token_uri = token_uri.clone();
    premint.price = price;
    premint.active = true;
    premint.bump = ctx.bumps.premint;

    msg!("Premint {} created, price {} lamports", premint_id, price);

    emit!(PremintCreated {
        collection: collection.key(),
        premint_id,
        token_uri,
        price,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct CreatePremint<'info> {
    /// The collection administrator
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

    /// Premint record PDA for the next sequential id
    #[account(
        init,
        payer = authority,
        space = PremintRecord::LEN,
        seeds = [
            PremintRecord::SEED_PREFIX,
            collection.key().as_ref(),
            collection.premint_count.saturating_add(1).to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub premint: Account<'info, PremintRecord>,

    /// System program
    pub system_program: Program<'info, System>,
}
