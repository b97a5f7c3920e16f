use anchor_lang::prelude::*;

use crate::errors::GatedNftError;
use crate::state::collection::MAX_URI_LEN;

/// Premint Record - a pre-approved, individually priced mint allocation.
/// Consumable by exactly one signature-gated mint.
#[account]
pub struct PremintRecord {
    /// Sequential identifier, assigned starting at 1 and never reused
    pub id: u64,

    /// Metadata URI the minted token will carry
    pub token_uri: String,

    /// Price in lamports; zero-price premints are allowed
    pub price: u64,

    /// True until consumed. A consumed premint is frozen.
    pub active: bool,

    /// PDA bump seed
    pub bump: u8,
}

impl PremintRecord {
    /// Size calculation for account allocation. The URI field is sized at
    /// its maximum so updates can overwrite it in place.
    /// Discriminator (8) + u64 (8) + String (4 + 200) + u64 (8) + bool (1)
    /// + u8 (1)
    pub const LEN: usize = 8 + 8 + (4 + MAX_URI_LEN) + 8 + 1 + 1;

    /// PDA seed prefix
    pub const SEED_PREFIX: &'static [u8] = b"premint";

    /// Overwrite uri and price in place. Rejected once the record has been
    /// consumed or deactivated.
    pub fn apply_update(&mut self, token_uri: String, price: u64) -> Result<()> {
        require!(self.active, GatedNftError::PremintNotActive);
        self.token_uri = token_uri;
        self.price = price;
        Ok(())
    }

    /// Flip `active` to false. Happens exactly once, on the first
    /// successful gated mint against this record.
    pub fn consume(&mut self) -> Result<()> {
        require!(self.active, GatedNftError::PremintNotActive);
        self.active = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn premint(price: u64) -> PremintRecord {
        PremintRecord {
            id: 1,
            token_uri: "ipfs://QmTest123".to_string(),
            price,
            active: true,
            bump: 255,
        }
    }

    #[test]
    fn consume_flips_active_exactly_once() {
        let mut p = premint(100_000_000);
        p.consume().unwrap();
        assert!(!p.active);

        let err = p.consume().unwrap_err();
        assert_eq!(err, GatedNftError::PremintNotActive.into());
    }

    #[test]
    fn update_overwrites_in_place_and_stays_active() {
        let mut p = premint(100_000_000);
        p.apply_update("ipfs://QmNew123".to_string(), 200_000_000)
            .unwrap();
        assert_eq!(p.token_uri, "ipfs://QmNew123");
        assert_eq!(p.price, 200_000_000);
        assert!(p.active);
    }

    #[test]
    fn consumed_premint_is_frozen() {
        let mut p = premint(100_000_000);
        p.consume().unwrap();

        let err = p
            .apply_update("new-uri".to_string(), 100_000_000)
            .unwrap_err();
        assert_eq!(err, GatedNftError::PremintNotActive.into());
        assert_eq!(p.token_uri, "ipfs://QmTest123");
    }

    #[test]
    fn zero_price_is_permitted() {
        let mut p = premint(0);
        assert_eq!(p.price, 0);
        p.consume().unwrap();
    }
}
