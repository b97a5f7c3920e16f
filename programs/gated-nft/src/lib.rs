#![allow(unexpected_cfgs, deprecated)]
use anchor_lang::prelude::*;

declare_id!("2Wa2BhQv54NPmM3Qkoo3WuJnG7grjXwrXbgcoT5jaB6E");

pub mod errors;
pub mod events;
pub mod instructions;
pub mod signature;
pub mod state;

use instructions::*;

#[program]
pub mod gated_nft {
    use super::*;

    /// Create the collection state: name, symbol, immutable supply cap and
    /// the network identifier bound into the signing domain.
    pub fn initialize_collection(
        ctx: Context<InitializeCollection>,
        name: String,
        symbol: String,
        max_supply: u64,
        chain_id: u64,
    ) -> Result<()> {
        instructions::initialize_collection::initialize_collection(
            ctx, name, symbol, max_supply, chain_id,
        )
    }

    /// Replace the authorized off-chain signer address.
    ///
    /// # Arguments
    /// * `new_signer` - 20-byte secp256k1 address; must not be zero
    pub fn update_signer(ctx: Context<UpdateSigner>, new_signer: [u8; 20]) -> Result<()> {
        instructions::update_signer::update_signer(ctx, new_signer)
    }

    /// Create a new premint allocation with the next sequential id.
    pub fn create_premint(
        ctx: Context<CreatePremint>,
        token_uri: String,
        price: u64,
    ) -> Result<()> {
        instructions::create_premint::create_premint(ctx, token_uri, price)
    }

    /// Update an active premint's uri and price in place.
    pub fn update_premint(
        ctx: Context<UpdatePremint>,
        premint_id: u64,
        token_uri: String,
        price: u64,
    ) -> Result<()> {
        instructions::update_premint::update_premint(ctx, premint_id, token_uri, price)
    }

    /// Direct administrator mint, bypassing premints and signatures.
    pub fn mint_by_owner(
        ctx: Context<MintByOwner>,
        recipient: Pubkey,
        token_uri: String,
    ) -> Result<()> {
        instructions::mint_by_owner::mint_by_owner(ctx, recipient, token_uri)
    }

    /// Consume a premint with an off-chain signed authorization.
    ///
    /// # Arguments
    /// * `recipient` - owner of the minted token
    /// * `premint_id` - allocation to consume
    /// * `nonce` - single-use authorization identifier
    /// * `signature` - 65-byte `r || s || v` secp256k1 signature
    /// * `payment_amount` - lamports attached; must cover the price
    pub fn mint_with_signature(
        ctx: Context<MintWithSignature>,
        recipient: Pubkey,
        premint_id: u64,
        nonce: u64,
        signature: [u8; 65],
        payment_amount: u64,
    ) -> Result<()> {
        instructions::mint_with_signature::mint_with_signature(
            ctx,
            recipient,
            premint_id,
            nonce,
            signature,
            payment_amount,
        )
    }

    /// Transfer the full accumulated treasury balance to the administrator.
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw::withdraw(ctx)
    }

    /// Read a premint record.
    pub fn get_premint(ctx: Context<ViewPremint>, premint_id: u64) -> Result<PremintData> {
        instructions::views::get_premint(ctx, premint_id)
    }

    /// Read the tracked treasury balance.
    pub fn get_balance(ctx: Context<ViewCollection>) -> Result<u64> {
        instructions::views::get_balance(ctx)
    }

    /// Read the number of tokens issued so far.
    pub fn total_supply(ctx: Context<ViewCollection>) -> Result<u64> {
        instructions::views::total_supply(ctx)
    }

    /// Read the identifier the next mint will receive.
    pub fn next_token_id(ctx: Context<ViewCollection>) -> Result<u64> {
        instructions::views::next_token_id(ctx)
    }
}
