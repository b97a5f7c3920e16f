use anchor_lang::prelude::*;

use crate::errors::GatedNftError;

/// Maximum byte length of the collection name.
pub const MAX_NAME_LEN: usize = 64;

/// Maximum byte length of the collection symbol.
pub const MAX_SYMBOL_LEN: usize = 16;

/// Maximum byte length of a token URI.
pub const MAX_URI_LEN: usize = 200;

/// Collection State - the singleton aggregate behind every operation:
/// access control, signer configuration, supply ledger and treasury
/// bookkeeping.
#[account]
pub struct CollectionState {
    /// The administrator's public key
    pub authority: Pubkey,

    /// Collection name, also bound into the signing domain
    pub name: String,

    /// Collection symbol
    pub symbol: String,

    /// Immutable maximum number of tokens ever issued
    pub max_supply: u64,

    /// Network identifier bound into the signing domain
    pub chain_id: u64,

    /// Authorized off-chain signer (Ethereum-style secp256k1 address).
    /// All zeroes until set; gated mints cannot verify while unset.
    pub signer_address: [u8; 20],

    /// Identifier assigned to the next minted token, starts at 1
    pub next_token_id: u64,

    /// Total number of tokens issued so far
    pub total_minted: u64,

    /// Number of premint records ever created (ids are 1..=premint_count)
    pub premint_count: u64,

    /// Lamports credited by gated mints and not yet withdrawn
    pub treasury_balance: u64,

    /// PDA bump seed
    pub bump: u8,

    /// Treasury vault PDA bump seed
    pub treasury_bump: u8,
}

impl CollectionState {
    /// Size calculation for account allocation
    /// Discriminator (8) + Pubkey (32) + String (4 + 64) + String (4 + 16)
    /// + u64 (8) + u64 (8) + [u8; 20] (20) + u64 (8) + u64 (8) + u64 (8)
    /// + u64 (8) + u8 (1) + u8 (1)
    pub const LEN: usize =
        8 + 32 + (4 + MAX_NAME_LEN) + (4 + MAX_SYMBOL_LEN) + 8 + 8 + 20 + 8 + 8 + 8 + 8 + 1 + 1;

    /// PDA seed prefix for the collection state
    pub const SEED_PREFIX: &'static [u8] = b"collection";

    /// PDA seed prefix for the treasury vault
    pub const TREASURY_SEED_PREFIX: &'static [u8] = b"treasury";

    /// Validate creation-time configuration before any state is written.
    pub fn validate_config(name: &str, symbol: &str, max_supply: u64) -> Result<()> {
        require!(!name.is_empty(), GatedNftError::InvalidCollectionConfig);
        require!(!symbol.is_empty(), GatedNftError::InvalidCollectionConfig);
        require!(name.len() <= MAX_NAME_LEN, GatedNftError::NameTooLong);
        require!(symbol.len() <= MAX_SYMBOL_LEN, GatedNftError::SymbolTooLong);
        require!(max_supply >= 1, GatedNftError::InvalidCollectionConfig);
        Ok(())
    }

    /// Replace the authorized signer. The zero address is rejected, so the
    /// verifier can never be pointed at an unrecoverable target.
    pub fn set_signer(&mut self, new_signer: [u8; 20]) -> Result<()> {
        require!(
            new_signer != [0u8; 20],
            GatedNftError::InvalidSignerAddress
        );
        self.signer_address = new_signer;
        Ok(())
    }

    /// Assign the next sequential premint id, starting at 1.
    pub fn reserve_next_premint_id(&mut self) -> Result<u64> {
        self.premint_count = self
            .premint_count
            .checked_add(1)
            .ok_or(GatedNftError::NumericalOverflow)?;
        Ok(self.premint_count)
    }

    /// Reserve the next token identifier. Fails once the cap is exhausted.
    /// Maintains `next_token_id == total_minted + 1`.
    pub fn reserve_next_id(&mut self) -> Result<u64> {
        require!(
            self.total_minted < self.max_supply,
            GatedNftError::MaxSupplyReached
        );

        let token_id = self.next_token_id;
        self.total_minted = self
            .total_minted
            .checked_add(1)
            .ok_or(GatedNftError::NumericalOverflow)?;
        self.next_token_id = self
            .next_token_id
            .checked_add(1)
            .ok_or(GatedNftError::NumericalOverflow)?;

        Ok(token_id)
    }

    /// Credit the treasury with a received payment.
    pub fn credit_treasury(&mut self, amount: u64) -> Result<()> {
        self.treasury_balance = self
            .treasury_balance
            .checked_add(amount)
            .ok_or(GatedNftError::NumericalOverflow)?;
        Ok(())
    }

    /// Take the full treasury balance, zeroing it before any transfer is
    /// attempted. Fails when nothing has been accumulated.
    pub fn take_treasury_balance(&mut self) -> Result<u64> {
        require!(self.treasury_balance > 0, GatedNftError::NoBalanceToWithdraw);
        let amount = self.treasury_balance;
        self.treasury_balance = 0;
        Ok(amount)
    }
}
