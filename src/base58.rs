//! Base58 prefix table and Base58Check helpers
//!
//! Each network variant carries its own address/key encoding prefixes.
//! Simple prefixes (addresses, WIF keys) are one byte; extended-key and
//! BIP44 coin-type prefixes are four bytes. A length mismatch is a
//! construction-time defect, not a runtime error.

use crate::crypto::sha256;
use thiserror::Error;

/// Base58 prefix kinds consumed by the external address/key encoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Prefix {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    ExtCoinType,
}

/// Per-network Base58 prefix table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Base58Prefixes {
    pubkey_address: Vec<u8>,
    script_address: Vec<u8>,
    secret_key: Vec<u8>,
    ext_public_key: Vec<u8>,
    ext_secret_key: Vec<u8>,
    ext_coin_type: Vec<u8>,
}

impl Base58Prefixes {
    /// Build a prefix table, checking every entry's length
    pub fn new(
        pubkey_address: u8,
        script_address: u8,
        secret_key: u8,
        ext_public_key: [u8; 4],
        ext_secret_key: [u8; 4],
        ext_coin_type: [u8; 4],
    ) -> Self {
        let table = Self {
            pubkey_address: vec![pubkey_address],
            script_address: vec![script_address],
            secret_key: vec![secret_key],
            ext_public_key: ext_public_key.to_vec(),
            ext_secret_key: ext_secret_key.to_vec(),
            ext_coin_type: ext_coin_type.to_vec(),
        };
        table.check_lengths();
        table
    }

    fn check_lengths(&self) {
        assert_eq!(self.pubkey_address.len(), 1, "pubkey address prefix");
        assert_eq!(self.script_address.len(), 1, "script address prefix");
        assert_eq!(self.secret_key.len(), 1, "secret key prefix");
        assert_eq!(self.ext_public_key.len(), 4, "extended public key prefix");
        assert_eq!(self.ext_secret_key.len(), 4, "extended secret key prefix");
        assert_eq!(self.ext_coin_type.len(), 4, "coin type prefix");
    }

    /// Look up the fixed byte sequence for a prefix kind
    pub fn prefix_for(&self, kind: Base58Prefix) -> &[u8] {
        match kind {
            Base58Prefix::PubkeyAddress => &self.pubkey_address,
            Base58Prefix::ScriptAddress => &self.script_address,
            Base58Prefix::SecretKey => &self.secret_key,
            Base58Prefix::ExtPublicKey => &self.ext_public_key,
            Base58Prefix::ExtSecretKey => &self.ext_secret_key,
            Base58Prefix::ExtCoinType => &self.ext_coin_type,
        }
    }
}

/// Base58Check decode errors
#[derive(Debug, Error)]
pub enum AddressError {
    #[error("invalid base58 encoding")]
    InvalidEncoding,
    #[error("payload too short for a checksum")]
    TooShort,
    #[error("checksum mismatch")]
    BadChecksum,
}

/// Encode prefix bytes plus payload with a 4-byte double-SHA256 checksum
pub fn base58check_encode(prefix: &[u8], payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(prefix.len() + payload.len() + 4);
    data.extend_from_slice(prefix);
    data.extend_from_slice(payload);
    let checksum = sha256(&sha256(&data));
    data.extend_from_slice(&checksum[..4]);
    bs58::encode(data).into_string()
}

/// Decode a Base58Check string, returning prefix-plus-payload bytes
pub fn base58check_decode(encoded: &str) -> Result<Vec<u8>, AddressError> {
    let data = bs58::decode(encoded)
        .into_vec()
        .map_err(|_| AddressError::InvalidEncoding)?;
    if data.len() < 4 {
        return Err(AddressError::TooShort);
    }
    let (body, checksum) = data.split_at(data.len() - 4);
    let expected = sha256(&sha256(body));
    if checksum != &expected[..4] {
        return Err(AddressError::BadChecksum);
    }
    Ok(body.to_vec())
}
