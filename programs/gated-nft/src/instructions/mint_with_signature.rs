use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::errors::*;
use crate::events::{NftMinted, PremintConsumed, PremintDeactivated};
use crate::signature::verify_mint_authorization;
use crate::state::*;

/// Consume a pre-approved allocation: verify payment and the off-chain
/// authorization, spend the nonce, reserve the next token id, record
/// ownership, deactivate the premint and credit the treasury. The whole
/// instruction is one atomic unit; any failure rolls back every effect,
/// including the nonce record and the payment.
pub fn mint_with_signature(
    ctx: Context<MintWithSignature>,
    recipient: Pubkey,
    premint_id: u64,
    nonce: u64,
    signature: [u8; 65],
    payment_amount: u64,
) -> Result<()> {
    let collection = &mut ctx.accounts.collection;
    let premint = &mut ctx.accounts.premint;

    require!(premint.active, GatedNftError::PremintNotActive);
    require!(
        payment_amount >= premint.price,
        GatedNftError::InsufficientPayment
    );

    verify_mint_authorization(
        &collection.signer_address,
        &collection.name,
        collection.chain_id,
        &collection.key(),
        &recipient,
        premint_id,
        &premint.token_uri,
        nonce,
        &signature,
    )?;

    ctx.accounts.nonce_record.consume()?;
    ctx.accounts.nonce_record.bump = ctx.bumps.nonce_record;

    let token_id = collection.reserve_next_id()?;

    let token_record = &mut ctx.accounts.token_record;
    token_record.id = token_id;
    token_record.owner = recipient;
    token_record.token_uri = premint.token_uri.clone();
    token_record.bump = ctx.bumps.token_record;

    premint.consume()?;

    // Full attached amount is kept; the price is a floor, not an exact
    // charge, and overpayment stays in the treasury.
    transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.treasury.to_account_info(),
            },
        ),
        payment_amount,
    )?;
    collection.credit_treasury(payment_amount)?;

    msg!(
        "Premint {} consumed by token {} for {}",
        premint_id,
        token_id,
        recipient
    );

    let timestamp = Clock::get()?.unix_timestamp;
    emit!(NftMinted {
        collection: collection.key(),
        recipient,
        token_id,
        token_uri: premint.token_uri.clone(),
        timestamp,
    });
    emit!(PremintConsumed {
        collection: collection.key(),
        recipient,
        premint_id,
        token_id,
        timestamp,
    });
    emit!(PremintDeactivated {
        collection: collection.key(),
        premint_id,
        timestamp,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(recipient: Pubkey, premint_id: u64, nonce: u64)]
pub struct MintWithSignature<'info> {
    /// Whoever submits the mint and pays for it; not required to be the
    /// recipient or the administrator
    #[account(mut)]
    pub payer: Signer<'info>,

    /// Collection state PDA
    #[account(
        mut,
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

    /// Premint record PDA being consumed
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

    /// Nonce record PDA; created on first use of this nonce value
    #[account(
        init_if_needed,
        payer = payer,
        space = NonceRecord::LEN,
        seeds = [
            NonceRecord::SEED_PREFIX,
            collection.key().as_ref(),
            nonce.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub nonce_record: Account<'info, NonceRecord>,

    /// Token record PDA for the id about to be reserved
    #[account(
        init,
        payer = payer,
        space = TokenRecord::space(premint.token_uri.len()),
        seeds = [
            TokenRecord::SEED_PREFIX,
            collection.key().as_ref(),
            collection.next_token_id.to_le_bytes().as_ref(),
        ],
        bump
    )]
    pub token_record: Account<'info, TokenRecord>,

    /// Treasury vault PDA receiving the payment
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
