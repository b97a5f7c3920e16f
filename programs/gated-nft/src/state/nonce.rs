use anchor_lang::prelude::*;

use crate::errors::GatedNftError;

/// Nonce Record - marks one single-use authorization identifier as spent.
///
/// Derivation: ["nonce", collection, nonce_le] — the PDA seeds encode the
/// nonce value, so the account itself carries only the spent flag.
///
/// Created lazily with `init_if_needed` on the first gated mint that
/// presents the nonce; `used` starts false on a fresh account. The scope is
/// the whole collection, not a premint or recipient: once consumed, the
/// value can never authorize another mint, whoever it was issued to. If the
/// surrounding mint fails after consumption, the transaction rollback
/// discards the record along with every other effect.
#[account]
#[derive(Default)]
pub struct NonceRecord {
    /// Whether the nonce has authorized a mint
    pub used: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl NonceRecord {
    /// Discriminator (8) + bool (1) + u8 (1)
    pub const LEN: usize = 8 + 1 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"nonce";

    /// Record the nonce as spent. Fails if it already authorized a mint.
    pub fn consume(&mut self) -> Result<()> {
        require!(!self.used, GatedNftError::NonceAlreadyUsed);
        self.used = true;
        Ok(())
    }
}
