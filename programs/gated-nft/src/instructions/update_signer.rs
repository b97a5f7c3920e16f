use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::SignerUpdated;
use crate::state::*;

/// Replace the authorized off-chain signer. Authorizations signed by the
/// previous signer stop verifying immediately.
pub fn update_signer(ctx: Context<UpdateSigner>, new_signer: [u8; 20]) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    collection.set_signer(new_signer)?;

    msg!("Signer address updated for collection: {}", collection.key());

    emit!(SignerUpdated {
        collection: collection.key(),
        new_signer,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateSigner<'info> {
    /// The collection administrator
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
}
