use anchor_lang::prelude::*;

#[error_code]
pub enum GatedNftError {
    #[msg("Unauthorized")]
    Unauthorized,

    #[msg("Invalid signer address")]
    InvalidSignerAddress,

    #[msg("Signature does not recover to the authorized signer")]
    InvalidSignature,

    #[msg("Nonce already used")]
    NonceAlreadyUsed,

    #[msg("Invalid premint ID")]
    InvalidPremintId,

    #[msg("Premint is not active")]
    PremintNotActive,

    #[msg("Max supply reached")]
    MaxSupplyReached,

    #[msg("Invalid recipient address")]
    InvalidRecipientAddress,

    #[msg("Insufficient payment")]
    InsufficientPayment,

    #[msg("No balance to withdraw")]
    NoBalanceToWithdraw,

    #[msg("Numerical overflow")]
    NumericalOverflow,

    #[msg("Invalid collection configuration")]
    InvalidCollectionConfig,

    #[msg("Name too long (max 64 bytes)")]
    NameTooLong,

    #[msg("Symbol too long (max 16 bytes)")]
    SymbolTooLong,

    #[msg("Token URI too long (max 200 bytes)")]
    UriTooLong,
}
