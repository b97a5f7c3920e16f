use anchor_lang::prelude::*;

use crate::errors::GatedNftError;

/// Token Record - final ownership entry for one issued token.
/// Written once at mint time; the identifier comes from the supply ledger.
#[account]
pub struct TokenRecord {
    /// Sequential token identifier, assigned starting at 1
    pub id: u64,

    /// Owner the token was minted to
    pub owner: Pubkey,

    /// Metadata URI
    pub token_uri: String,

    /// PDA bump seed
    pub bump: u8,
}

impl TokenRecord {
    /// Base size without the URI payload
    /// Discriminator (8) + u64 (8) + Pubkey (32) + Vec length (4) + u8 (1)
    pub const BASE_LEN: usize = 8 + 8 + 32 + 4 + 1;

    /// Calculate space needed for a given URI length
    pub fn space(uri_len: usize) -> usize {
        Self::BASE_LEN + uri_len
    }

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"token";

    /// Reject the zero pubkey as a mint target.
    pub fn validate_owner(owner: &Pubkey) -> Result<()> {
        require!(
            *owner != Pubkey::default(),
            GatedNftError::InvalidRecipientAddress
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_recipient_is_rejected() {
        let err = TokenRecord::validate_owner(&Pubkey::default()).unwrap_err();
        assert_eq!(err, GatedNftError::InvalidRecipientAddress.into());

        TokenRecord::validate_owner(&Pubkey::new_unique()).unwrap();
    }
}
