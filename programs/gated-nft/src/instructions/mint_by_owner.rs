use anchor_lang::prelude::*;

use crate::errors::*;
use crate::events::NftMinted;
use crate::state::*;

/// Direct administrator mint. No payment, premint or signature involved.
pub fn mint_by_owner(
    ctx: Context<MintByOwner>,
    recipient: Pubkey,
    token_uri: String,
) -> Result<()> {
    TokenRecord::validate_owner(&recipient)?;
    require!(token_uri.len() <= MAX_URI_LEN, GatedNftError::UriTooLong);

    let collection = &mut ctx.accounts.collection;
    let token_id = collection.reserve_next_id()?;

    let token_record = &mut ctx.accounts.token_record;
    token_record.id = token_id;
    token_record.owner = recipient;
    token_record.token_uri = token_uri.clone();
    token_record.bump = ctx.bumps.token_record;

    msg!(
        "Token {} minted to {} ({} of {})",
        token_id,
        recipient,
        collection.total_minted,
        collection.max_supply
    );

    emit!(NftMinted {
        collection: collection.key(),
        recipient,
        token_id,
        token_uri,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey, token_uri: String)]
pub struct MintByOwner<'info> {
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

    /// Token record PDA for the id about to be reserved
    #[account(
        init,
        payer = authority,
        space = TokenRecord::space(token_uri.len()),
        seeds = [
            TokenRecord::SEED_PREFIX,
            collection.key().as_ref(),
            collection.next_token_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub token_record: Account<'info, TokenRecord>,

    /// System program
    pub system_program: Program<'info, System>,
}
