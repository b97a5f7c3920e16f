use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::events::CollectionInitialized;
use crate::state::*;

/// Create the collection state and its treasury vault.
/// The signer address starts unset; gated mints cannot verify until the
/// authority configures one via `update_signer`.
pub fn initialize_collection(
    ctx: Context<InitializeCollection>,
    name: String,
    symbol: String,
    max_supply: u64,
    chain_id: u64,
) -> Result<()> {
    CollectionState::validate_config(&name, &symbol, max_supply)?;

    let collection = &mut ctx.accounts.collection;
    collection.authority = ctx.accounts.authority.key();
    collection.name = name.clone();
    collection.symbol = symbol.clone();
    collection.max_supply = max_supply;
    collection.chain_id = chain_id;
    collection.signer_address = [0u8; 20];
    collection.next_token_id = 1;
    collection.total_minted = 0;
    collection.premint_count = 0;
    collection.treasury_balance = 0;
    collection.bump = ctx.bumps.collection;
    collection.treasury_bump = ctx.bumps.treasury;

    // Seed the vault with its rent-exempt minimum so withdrawals can later
    // drain the full tracked balance without deallocating the account.
    let rent_minimum = Rent::get()?.minimum_balance(0);
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.authority.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        rent_minimum,
    )?;

    msg!(
        "Collection initialized: {} ({}), max supply {}",
        collection.name,
        collection.symbol,
        max_supply
    );

    emit!(CollectionInitialized {
        collection: collection.key(),
        authority: collection.authority,
        name,
        symbol,
        max_supply,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(name: String, symbol: String)]
pub struct InitializeCollection<'info> {
    /// The administrator creating the collection
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Collection state PDA
    #[account(
        init,
        payer = authority,
        space = CollectionState::LEN,
        seeds = [
            CollectionState::SEED_PREFIX,
            authority.key().as_ref(),
            symbol.as_bytes(),
        ],
        bump
    )]
    pub collection: Account<'info, CollectionState>,

    /// Treasury vault PDA holding gated-mint payments
    /// CHECK: Zero-data lamport vault, derived from the collection state
    #[account(
        mut,
        seeds = [CollectionState::TREASURY_SEED_PREFIX, collection.key().as_ref()],
        bump,
    )]
    pub treasury: UncheckedAccount<'info>,

    /// System program
    pub system_program: Program<'info, System>,
}
