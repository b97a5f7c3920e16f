pub mod create_premint;
pub mod initialize_collection;
pub mod mint_by_owner;
pub mod mint_with_signature;
pub mod update_premint;
pub mod update_signer;
pub mod views;
pub mod withdraw;

pub use create_premint::*;
pub use initialize_collection::*;
pub use mint_by_owner::*;
pub use mint_with_signature::*;
pub use update_premint::*;
pub use update_signer::*;
pub use views::*;
pub use withdraw::*;
