//! Typed, domain-separated mint authorization verification.
//!
//! An off-chain signer authorizes a specific mint by signing a keccak
//! digest over `(recipient, premint_id, token_uri, nonce)`, bound to the
//! collection name, a fixed version string, the network identifier and the
//! collection address. The binding follows the EIP-712 shape, so a
//! signature issued for one deployment cannot be replayed against another.

use anchor_lang::prelude::*;
use solana_keccak_hasher as keccak;
use solana_secp256k1_recover::secp256k1_recover;

use crate::errors::GatedNftError;

/// Fixed version string bound into the signing domain. Changing it
/// invalidates every previously issued authorization.
pub const SIGNING_DOMAIN_VERSION: &str = "1.0.0";

const DOMAIN_TYPE: &[u8] =
    b"Domain(string name,string version,uint64 chainId,bytes32 collection)";

const MINT_TYPE: &[u8] =
    b"Mint(bytes32 recipient,uint64 premintId,string tokenUri,uint64 nonce)";

/// Ethereum-style secp256k1 address: last 20 bytes of the keccak hash of
/// the 64-byte uncompressed public key.
pub type EthAddress = [u8; 20];

fn domain_separator(name: &str, chain_id: u64, collection: &Pubkey) -> [u8; 32] {
    keccak::hashv(&[
        keccak::hash(DOMAIN_TYPE).as_ref(),
        keccak::hash(name.as_bytes()).as_ref(),
        keccak::hash(SIGNING_DOMAIN_VERSION.as_bytes()).as_ref(),
        &chain_id.to_be_bytes(),
        collection.as_ref(),
    ])
    .to_bytes()
}

fn struct_hash(recipient: &Pubkey, premint_id: u64, token_uri: &str, nonce: u64) -> [u8; 32] {
    keccak::hashv(&[
        keccak::hash(MINT_TYPE).as_ref(),
        recipient.as_ref(),
        &premint_id.to_be_bytes(),
        keccak::hash(token_uri.as_bytes()).as_ref(),
        &nonce.to_be_bytes(),
    ])
    .to_bytes()
}

/// The digest the authorized signer is expected to have signed.
pub fn mint_digest(
    name: &str,
    chain_id: u64,
    collection: &Pubkey,
    recipient: &Pubkey,
    premint_id: u64,
    token_uri: &str,
    nonce: u64,
) -> [u8; 32] {
    keccak::hashv(&[
        &b"\x19\x01"[..],
        &domain_separator(name, chain_id, collection),
        &struct_hash(recipient, premint_id, token_uri, nonce),
    ])
    .to_bytes()
}

/// Recover the claimed signer address from a 65-byte `r || s || v`
/// signature over `digest`. Accepts `v` as 0/1 or 27/28.
pub fn recover_signer(digest: &[u8; 32], signature: &[u8; 65]) -> Result<EthAddress> {
    let recovery_id = match signature[64] {
        v @ 0..=1 => v,
        v @ 27..=28 => v - 27,
        _ => return err!(GatedNftError::InvalidSignature),
    };

    let pubkey = secp256k1_recover(digest, recovery_id, &signature[..64])
        .map_err(|_| GatedNftError::InvalidSignature)?;

    let hash = keccak::hash(&pubkey.to_bytes());
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash.to_bytes()[12..]);
    Ok(address)
}

/// Verify a mint authorization against the configured signer. Pure:
/// re-evaluated on every call, never cached.
#[allow(clippy::too_many_arguments)]
pub fn verify_mint_authorization(
    signer_address: &EthAddress,
    name: &str,
    chain_id: u64,
    collection: &Pubkey,
    recipient: &Pubkey,
    premint_id: u64,
    token_uri: &str,
    nonce: u64,
    signature: &[u8; 65],
) -> Result<()> {
    let digest = mint_digest(
        name, chain_id, collection, recipient, premint_id, token_uri, nonce,
    );
    let recovered = recover_signer(&digest, signature)?;
    require!(
        &recovered == signer_address,
        GatedNftError::InvalidSignature
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestSigner {
        secret: libsecp256k1::SecretKey,
        address: EthAddress,
    }

    fn test_signer(seed: u8) -> TestSigner {
        let secret = libsecp256k1::SecretKey::parse(&[seed; 32]).unwrap();
        let public = libsecp256k1::PublicKey::from_secret_key(&secret);
        // Skip the 0x04 SEC1 prefix, hash the raw 64-byte point.
        let hash = keccak::hash(&public.serialize()[1..]);
        let mut address = [0u8; 20];
        address.copy_from_slice(&hash.to_bytes()[12..]);
        TestSigner { secret, address }
    }

    fn sign(digest: &[u8; 32], signer: &TestSigner) -> [u8; 65] {
        let message = libsecp256k1::Message::parse(digest);
        let (sig, recovery_id) = libsecp256k1::sign(&message, &signer.secret);
        let mut out = [0u8; 65];
        out[..64].copy_from_slice(&sig.serialize());
        out[64] = recovery_id.serialize();
        out
    }

    const NAME: &str = "Signature Gated NFT";
    const CHAIN_ID: u64 = 1;

    #[test]
    fn authorized_signature_verifies() {
        let signer = test_signer(7);
        let collection = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let digest = mint_digest(NAME, CHAIN_ID, &collection, &recipient, 1, "ipfs://a", 123);
        let signature = sign(&digest, &signer);

        verify_mint_authorization(
            &signer.address,
            NAME,
            CHAIN_ID,
            &collection,
            &recipient,
            1,
            "ipfs://a",
            123,
            &signature,
        )
        .unwrap();
    }

    #[test]
    fn ethereum_style_v_is_accepted() {
        let signer = test_signer(7);
        let collection = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let digest = mint_digest(NAME, CHAIN_ID, &collection, &recipient, 1, "ipfs://a", 123);
        let mut signature = sign(&digest, &signer);
        signature[64] += 27;

        assert_eq!(recover_signer(&digest, &signature).unwrap(), signer.address);
    }

    #[test]
    fn wrong_signer_is_rejected() {
        let signer = test_signer(7);
        let impostor = test_signer(9);
        let collection = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let digest = mint_digest(NAME, CHAIN_ID, &collection, &recipient, 1, "ipfs://a", 123);
        let signature = sign(&digest, &impostor);

        let err = verify_mint_authorization(
            &signer.address,
            NAME,
            CHAIN_ID,
            &collection,
            &recipient,
            1,
            "ipfs://a",
            123,
            &signature,
        )
        .unwrap_err();
        assert_eq!(err, GatedNftError::InvalidSignature.into());
    }

    #[test]
    fn signature_is_bound_to_request_fields() {
        let signer = test_signer(7);
        let collection = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let digest = mint_digest(NAME, CHAIN_ID, &collection, &recipient, 1, "ipfs://a", 123);
        let signature = sign(&digest, &signer);

        // Same signature presented for a different premint id must fail.
        let err = verify_mint_authorization(
            &signer.address,
            NAME,
            CHAIN_ID,
            &collection,
            &recipient,
            2,
            "ipfs://a",
            123,
            &signature,
        )
        .unwrap_err();
        assert_eq!(err, GatedNftError::InvalidSignature.into());
    }

    #[test]
    fn digest_differs_per_domain_field() {
        let collection = Pubkey::new_unique();
        let other_collection = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let base = mint_digest(NAME, CHAIN_ID, &collection, &recipient, 1, "ipfs://a", 123);
        assert_ne!(
            base,
            mint_digest("Other Name", CHAIN_ID, &collection, &recipient, 1, "ipfs://a", 123)
        );
        assert_ne!(
            base,
            mint_digest(NAME, CHAIN_ID + 1, &collection, &recipient, 1, "ipfs://a", 123)
        );
        assert_ne!(
            base,
            mint_digest(NAME, CHAIN_ID, &other_collection, &recipient, 1, "ipfs://a", 123)
        );
    }

    #[test]
    fn garbage_recovery_id_is_rejected() {
        let signer = test_signer(7);
        let collection = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let digest = mint_digest(NAME, CHAIN_ID, &collection, &recipient, 1, "ipfs://a", 123);
        let mut signature = sign(&digest, &signer);
        signature[64] = 5;

        let err = recover_signer(&digest, &signature).unwrap_err();
        assert_eq!(err, GatedNftError::InvalidSignature.into());
    }

    #[test]
    fn recovered_address_never_matches_unset_signer() {
        let signer = test_signer(7);
        let collection = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();

        let digest = mint_digest(NAME, CHAIN_ID, &collection, &recipient, 1, "ipfs://a", 123);
        let signature = sign(&digest, &signer);

        let err = verify_mint_authorization(
            &[0u8; 20],
            NAME,
            CHAIN_ID,
            &collection,
            &recipient,
            1,
            "ipfs://a",
            123,
            &signature,
        )
        .unwrap_err();
        assert_eq!(err, GatedNftError::InvalidSignature.into());
    }
}
