use anchor_lang::prelude::*;

#[event]
pub struct CollectionInitialized {
    pub collection: Pubkey,
    pub authority: Pubkey,
    pub name: String,
    pub symbol: String,
    pub max_supply: u64,
    pub timestamp: i64,
}

#[event]
pub struct SignerUpdated {
    pub collection: Pubkey,
    pub new_signer: [u8; 20],
    pub timestamp: i64,
}

#[event]
pub struct PremintCreated {
    pub collection: Pubkey,
    pub premint_id: u64,
    pub token_uri: String,
    pub price: u64,
    pub timestamp: i64,
}

#[event]
pub struct PremintUpdated {
    pub collection: Pubkey,
    pub premint_id: u64,
    pub token_uri: String,
    pub price: u64,
    pub timestamp: i64,
}

#[event]
pub struct NftMinted {
    pub collection: Pubkey,
    pub recipient: Pubkey,
    pub token_id: u64,
    pub token_uri: String,
    pub timestamp: i64,
}

#[event]
pub struct PremintConsumed {
    pub collection: Pubkey,
    pub recipient: Pubkey,
    pub premint_id: u64,
    pub token_id: u64,
    pub timestamp: i64,
}

#[event]
pub struct PremintDeactivated {
    pub collection: Pubkey,
    pub premint_id: u64,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryWithdrawn {
    pub collection: Pubkey,
    pub authority: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
