//! Quark chained digest for block-header hashing
//!
//! Nine chained 512-bit digest stages over six primitives (BLAKE-512,
//! BMW-512, Groestl-512, Skein-512, JH-512 and the original Keccak-512),
//! where three of the stages pick their primitive from a low bit of the
//! running digest. The final 512-bit state is truncated to 256 bits.
//!
//! Transactions and Base58Check checksums keep double SHA-256; only
//! header hashing goes through this pipeline.

mod blake512;
mod bmw512;
mod groestl512;
mod jh512;
mod keccak512;
mod skein512;

use super::Hash;

/// Branch selector: bit 3 of the first digest byte
fn high_branch(digest: &[u8; 64]) -> bool {
    digest[0] & 0x08 != 0
}

/// Quark digest of `data`, truncated to a 32-byte hash in internal
/// byte order
pub fn quark(data: &[u8]) -> Hash {
    let h = blake512::digest(data);
    let h = bmw512::digest(&h);
    let h = if high_branch(&h) {
        groestl512::digest(&h)
    } else {
        skein512::digest(&h)
    };
    let h = groestl512::digest(&h);
    let h = jh512::digest(&h);
    let h = if high_branch(&h) {
        blake512::digest(&h)
    } else {
        bmw512::digest(&h)
    };
    let h = keccak512::digest(&h);
    let h = skein512::digest(&h);
    let h = if high_branch(&h) {
        keccak512::digest(&h)
    } else {
        jh512::digest(&h)
    };

    let mut out = [0u8; 32];
    out.copy_from_slice(&h[..32]);
    Hash(out)
}
