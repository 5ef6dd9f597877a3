//! TPC Chain Parameter Library
//!
//! The authoritative, per-network set of consensus-critical constants for
//! the TPC blockchain: difficulty limits, block-timing rules, activation
//! heights, checkpoint anchors, zerocoin trusted-setup values, address
//! prefixes, and bootstrap peer hints.
//!
//! Four network variants exist: main, testnet, regtest, and unittest.
//! Testnet is derived from mainnet by an explicit override list, regtest
//! from testnet, and unittest from mainnet, so the exact set of fields
//! that diverge between networks is visible in one place.

pub mod base58;
pub mod checkpoints;
pub mod crypto;
pub mod error;
pub mod genesis;
pub mod params;
pub mod seeds;
pub mod zerocoin;

/// Monetary and scheduling constants - HARD-CODED, NEVER CONFIGURABLE
pub mod constants {
    /// Base units per coin (8 decimal places)
    pub const COIN: u64 = 100_000_000;

    /// One hundredth of a coin
    pub const CENT: u64 = COIN / 100;

    /// Smallest zerocoin mint fee unit (one cent)
    pub const ZCENT: u64 = CENT;

    /// Sentinel height for activations that are not yet scheduled.
    ///
    /// Comparisons of the form `height >= activation` never trigger for
    /// an unscheduled activation.
    pub const HEIGHT_UNSCHEDULED: i64 = i64::MAX;
}
