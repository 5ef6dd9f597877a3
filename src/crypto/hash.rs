//! The hash value type and double SHA-256
//!
//! Transactions and Base58Check checksums use the double SHA-256
//! digest; block headers use the quark chained digest.
//! Hashes are stored in internal (little-endian) byte order; hex
//! rendering uses the conventional reversed display order.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte hash in internal byte order
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

impl Hash {
    /// Create a zero hash (used for the genesis previous hash)
    pub const fn zero() -> Self {
        Hash([0u8; 32])
    }

    /// Create hash from internal-order bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Hash(bytes)
    }

    /// Parse a display-order hex string (as printed by explorers)
    pub fn from_hex(hex: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(hex)?;
        if bytes.len() != 32 {
            return Err(hex::FromHexError::InvalidStringLength);
        }
        let mut arr = [0u8; 32];
        // Display order is byte-reversed internal order
        for (i, b) in bytes.iter().rev().enumerate() {
            arr[i] = *b;
        }
        Ok(Hash(arr))
    }

    /// Render as a display-order hex string
    pub fn to_hex(&self) -> String {
        let mut reversed = self.0;
        reversed.reverse();
        hex::encode(reversed)
    }

    /// Get internal-order bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self.to_hex())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Default for Hash {
    fn default() -> Self {
        Self::zero()
    }
}

/// Single SHA-256 digest
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut out = [0u8; 32];
    out.copy_from_slice(&Sha256::digest(data));
    out
}

/// Double SHA-256 digest
pub fn sha256d(data: &[u8]) -> Hash {
    Hash(sha256(&sha256(data)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let data = b"hello world";
        assert_eq!(sha256d(data), sha256d(data));
    }

    #[test]
    fn test_hash_different_inputs() {
        assert_ne!(sha256d(b"hello"), sha256d(b"world"));
    }

    #[test]
    fn test_zero_hash() {
        assert_eq!(Hash::zero().0, [0u8; 32]);
    }

    #[test]
    fn test_hex_roundtrip() {
        let hash = sha256d(b"test");
        let hex = hash.to_hex();
        let recovered = Hash::from_hex(&hex).unwrap();
        assert_eq!(hash, recovered);
    }

    #[test]
    fn test_display_order_is_reversed() {
        let hash = Hash::from_hex(
            "00000000000000000000000000000000000000000000000000000000000000ff",
        )
        .unwrap();
        // Least significant display byte lands first in internal order
        assert_eq!(hash.0[0], 0xff);
        assert_eq!(hash.0[31], 0x00);
    }

    #[test]
    fn test_from_hex_rejects_bad_length() {
        assert!(Hash::from_hex("abcd").is_err());
    }
}
