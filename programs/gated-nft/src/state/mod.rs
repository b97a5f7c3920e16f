pub mod collection;
pub mod nonce;
pub mod premint;
pub mod token_record;

pub use collection::*;
pub use nonce::*;
pub use premint::*;
pub use token_record::*;
