//! Genesis block construction and validation
//!
//! The genesis block is fully deterministic: one coinbase transaction
//! whose input script embeds a difficulty-era marker, an extra value,
//! and a literal launch-announcement string (opaque bytes, never parsed
//! again), plus one output locked to a fixed public key. Its hash and
//! merkle root are invariants checked against hardcoded constants; a
//! mismatch is a build or tampering defect and aborts the process.

use crate::crypto::{quark, sha256d, Hash};
use serde::{Deserialize, Serialize};

/// OP_CHECKSIG opcode
const OP_CHECKSIG: u8 = 0xac;

/// Compact-bits marker pushed first in the coinbase input script
pub const ERA_MARKER: i64 = 486_604_799;

/// Extra script-number value pushed after the era marker
pub const EXTRA_NONCE: i64 = 4;

/// A transaction output: value plus locking script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    pub value: u64,
    pub script_pubkey: Vec<u8>,
}

/// A transaction input: previous outpoint plus unlocking script
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    pub prev_hash: Hash,
    pub prev_index: u32,
    pub script_sig: Vec<u8>,
    pub sequence: u32,
}

/// The single coinbase transaction of the genesis block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinbaseTransaction {
    pub version: i32,
    pub inputs: Vec<TxIn>,
    pub outputs: Vec<TxOut>,
    pub lock_time: u32,
}

impl CoinbaseTransaction {
    /// Serialize in wire format (little-endian, compact-size lengths)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.version.to_le_bytes());
        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_hash.0);
            bytes.extend_from_slice(&input.prev_index.to_le_bytes());
            write_compact_size(&mut bytes, input.script_sig.len() as u64);
            bytes.extend_from_slice(&input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }
        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.value.to_le_bytes());
            write_compact_size(&mut bytes, output.script_pubkey.len() as u64);
            bytes.extend_from_slice(&output.script_pubkey);
        }
        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Transaction hash (double SHA-256 of the wire serialization)
    pub fn hash(&self) -> Hash {
        sha256d(&self.to_bytes())
    }
}

/// The 80-byte genesis block header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisHeader {
    pub version: i32,
    pub prev_hash: Hash,
    pub merkle_root: Hash,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl GenesisHeader {
    /// Serialize the header for hashing
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(80);
        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.prev_hash.0);
        bytes.extend_from_slice(&self.merkle_root.0);
        bytes.extend_from_slice(&self.time.to_le_bytes());
        bytes.extend_from_slice(&self.bits.to_le_bytes());
        bytes.extend_from_slice(&self.nonce.to_le_bytes());
        bytes
    }

    /// Header hash (quark chained digest)
    pub fn hash(&self) -> Hash {
        quark(&self.to_bytes())
    }
}

/// The genesis block: one header and one coinbase transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisBlock {
    pub header: GenesisHeader,
    pub coinbase: CoinbaseTransaction,
}

impl GenesisBlock {
    /// Block hash
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Merkle root over the single transaction.
    ///
    /// A one-leaf tree degenerates to the leaf itself; no general merkle
    /// algorithm is required here.
    pub fn compute_merkle_root(&self) -> Hash {
        self.coinbase.hash()
    }
}

/// Append a Bitcoin compact-size length prefix
fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

/// Append a minimally-encoded script-number push
fn push_script_num(script: &mut Vec<u8>, value: i64) {
    assert!(value >= 0, "genesis scripts only push non-negative numbers");
    if value == 0 {
        script.push(0x00); // OP_0
        return;
    }
    let mut bytes = Vec::new();
    let mut v = value as u64;
    while v > 0 {
        bytes.push((v & 0xff) as u8);
        v >>= 8;
    }
    // A set sign bit in the top byte needs a padding byte
    if bytes.last().copied().unwrap_or(0) & 0x80 != 0 {
        bytes.push(0x00);
    }
    push_data(script, &bytes);
}

/// Append a direct data push (lengths below OP_PUSHDATA1 only)
fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    assert!(data.len() < 0x4c, "genesis pushes fit a single-byte opcode");
    script.push(data.len() as u8);
    script.extend_from_slice(data);
}

/// Build the coinbase input script: era marker, extra value, and the
/// literal timestamp text as opaque bytes
pub fn coinbase_signature_script(timestamp_text: &str) -> Vec<u8> {
    let mut script = Vec::new();
    push_script_num(&mut script, ERA_MARKER);
    push_script_num(&mut script, EXTRA_NONCE);
    push_data(&mut script, timestamp_text.as_bytes());
    script
}

/// Build a pay-to-pubkey locking script for the genesis payout
pub fn pay_to_pubkey_script(pubkey: &[u8]) -> Vec<u8> {
    let mut script = Vec::new();
    push_data(&mut script, pubkey);
    script.push(OP_CHECKSIG);
    script
}

/// Deterministically construct the genesis block
#[allow(clippy::too_many_arguments)]
pub fn build_genesis(
    timestamp_text: &str,
    payout_script: Vec<u8>,
    time: u32,
    bits: u32,
    nonce: u32,
    version: i32,
    reward: u64,
) -> GenesisBlock {
    let coinbase = CoinbaseTransaction {
        version: 1,
        inputs: vec![TxIn {
            prev_hash: Hash::zero(),
            prev_index: u32::MAX,
            script_sig: coinbase_signature_script(timestamp_text),
            sequence: u32::MAX,
        }],
        outputs: vec![TxOut {
            value: reward,
            script_pubkey: payout_script,
        }],
        lock_time: 0,
    };

    let merkle_root = coinbase.hash();
    let header = GenesisHeader {
        version,
        prev_hash: Hash::zero(),
        merkle_root,
        time,
        bits,
        nonce,
    };

    GenesisBlock { header, coinbase }
}

/// Recompute the genesis hash and merkle root and abort on any mismatch.
///
/// A mismatch means the build is defective or the constants were tampered
/// with; it is never a condition to retry or default around.
pub fn validate_genesis(block: &GenesisBlock, expected_hash: &Hash, expected_merkle: &Hash) {
    let merkle = block.compute_merkle_root();
    if merkle != *expected_merkle {
        panic!(
            "genesis merkle root mismatch: computed {} expected {}",
            merkle, expected_merkle
        );
    }
    if block.header.merkle_root != merkle {
        panic!(
            "genesis header carries stale merkle root {} (computed {})",
            block.header.merkle_root, merkle
        );
    }
    let hash = block.hash();
    if hash != *expected_hash {
        panic!(
            "genesis block hash mismatch: computed {} expected {}",
            hash, expected_hash
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_block() -> GenesisBlock {
        build_genesis(
            "a test chain is born",
            pay_to_pubkey_script(&[0x02; 33]),
            1_600_000_000,
            0x1e0ffff0,
            7,
            1,
            0,
        )
    }

    #[test]
    fn test_genesis_is_deterministic() {
        assert_eq!(sample_block().hash(), sample_block().hash());
    }

    #[test]
    fn test_merkle_root_is_coinbase_hash() {
        let block = sample_block();
        assert_eq!(block.compute_merkle_root(), block.coinbase.hash());
        assert_eq!(block.header.merkle_root, block.coinbase.hash());
    }

    #[test]
    fn test_header_serializes_to_80_bytes() {
        assert_eq!(sample_block().header.to_bytes().len(), 80);
    }

    #[test]
    fn test_signature_script_layout() {
        let script = coinbase_signature_script("hi");
        // 4-byte era marker push, 1-byte extra value push, 2-byte text push
        assert_eq!(script[0], 4);
        assert_eq!(&script[1..5], &(ERA_MARKER as u32).to_le_bytes());
        assert_eq!(script[5], 1);
        assert_eq!(script[6], EXTRA_NONCE as u8);
        assert_eq!(script[7], 2);
        assert_eq!(&script[8..], b"hi");
    }

    #[test]
    fn test_pay_to_pubkey_script_ends_with_checksig() {
        let script = pay_to_pubkey_script(&[0x04; 65]);
        assert_eq!(script[0], 65);
        assert_eq!(*script.last().unwrap(), OP_CHECKSIG);
    }

    #[test]
    fn test_validate_accepts_own_values() {
        let block = sample_block();
        validate_genesis(&block, &block.hash(), &block.compute_merkle_root());
    }

    #[test]
    #[should_panic(expected = "genesis block hash mismatch")]
    fn test_validate_aborts_on_wrong_hash() {
        let block = sample_block();
        let merkle = block.compute_merkle_root();
        validate_genesis(&block, &Hash::zero(), &merkle);
    }

    #[test]
    #[should_panic(expected = "genesis merkle root mismatch")]
    fn test_validate_aborts_on_wrong_merkle() {
        let block = sample_block();
        let hash = block.hash();
        validate_genesis(&block, &hash, &Hash::zero());
    }
}
