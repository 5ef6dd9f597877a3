//! Hardcoded checkpoint anchors
//!
//! A checkpoint is a (height, hash) pair treated as unforgeable chain
//! history: external chain-selection logic rejects alternate histories
//! that would rewrite a checkpointed height, and uses the summary
//! scalars to estimate remaining synchronization work. This module
//! holds reference data only and performs no validation of its own.
//!
//! A good checkpoint block is surrounded by blocks with reasonable
//! timestamps and contains no strange transactions.

use crate::crypto::Hash;
use crate::params::{variants, Network};
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Checkpoint table plus summary statistics for one network
#[derive(Debug, Clone)]
pub struct CheckpointData {
    /// Height to block hash, strictly increasing heights
    pub checkpoints: BTreeMap<i64, Hash>,
    /// Unix timestamp of the last checkpoint block
    pub last_checkpoint_time: u64,
    /// Total transactions between genesis and the last checkpoint
    pub total_transactions: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: u64,
}

impl CheckpointData {
    /// Build a table from (height, display-hex hash) entries.
    ///
    /// Entries must arrive in strictly increasing height order; anything
    /// else is a defect in the compiled-in table.
    fn new(
        entries: &[(i64, &str)],
        last_checkpoint_time: u64,
        total_transactions: u64,
        transactions_per_day: u64,
    ) -> Self {
        let mut checkpoints = BTreeMap::new();
        let mut previous_height: Option<i64> = None;
        for (height, hash) in entries {
            if let Some(prev) = previous_height {
                assert!(
                    *height > prev,
                    "checkpoint heights must be strictly increasing ({} after {})",
                    height,
                    prev
                );
            }
            previous_height = Some(*height);
            let hash = Hash::from_hex(hash).expect("checkpoint hash constant");
            checkpoints.insert(*height, hash);
        }
        Self {
            checkpoints,
            last_checkpoint_time,
            total_transactions,
            transactions_per_day,
        }
    }

    /// Hash anchored at a height, if one exists
    pub fn hash_at(&self, height: i64) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    /// Highest checkpointed height
    pub fn last_height(&self) -> Option<i64> {
        self.checkpoints.keys().next_back().copied()
    }
}

static MAIN_DATA: OnceLock<CheckpointData> = OnceLock::new();
static TESTNET_DATA: OnceLock<CheckpointData> = OnceLock::new();
static REGTEST_DATA: OnceLock<CheckpointData> = OnceLock::new();

/// Checkpoint reference data for a network. Unittest shares mainnet's
/// table.
pub fn checkpoints(network: Network) -> &'static CheckpointData {
    match network {
        Network::Main | Network::UnitTest => MAIN_DATA.get_or_init(|| {
            CheckpointData::new(&[(0, variants::GENESIS_HASH)], 1_577_044_800, 0, 3000)
        }),
        Network::Testnet => TESTNET_DATA.get_or_init(|| {
            CheckpointData::new(&[(0, variants::GENESIS_HASH)], 1_577_044_800, 0, 250)
        }),
        Network::Regtest => REGTEST_DATA.get_or_init(|| {
            CheckpointData::new(&[(0, variants::GENESIS_HASH)], 1_577_044_800, 0, 100)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::params_for;

    #[test]
    fn test_height_zero_anchors_genesis() {
        for network in Network::ALL {
            let data = checkpoints(network);
            let genesis_hash = params_for(network).genesis_hash;
            assert_eq!(data.hash_at(0), Some(&genesis_hash));
        }
    }

    #[test]
    fn test_heights_strictly_increasing() {
        for network in Network::ALL {
            let data = checkpoints(network);
            let heights: Vec<i64> = data.checkpoints.keys().copied().collect();
            assert!(heights.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_summary_scalars_per_network() {
        assert_eq!(checkpoints(Network::Main).transactions_per_day, 3000);
        assert_eq!(checkpoints(Network::Testnet).transactions_per_day, 250);
        assert_eq!(checkpoints(Network::Regtest).transactions_per_day, 100);
        assert_eq!(checkpoints(Network::UnitTest).transactions_per_day, 3000);
        for network in Network::ALL {
            let data = checkpoints(network);
            assert_eq!(data.last_checkpoint_time, 1_577_044_800);
            assert_eq!(data.total_transactions, 0);
        }
    }

    #[test]
    fn test_unit_test_shares_main_table() {
        assert!(std::ptr::eq(
            checkpoints(Network::Main),
            checkpoints(Network::UnitTest)
        ));
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_out_of_order_table_is_a_defect() {
        CheckpointData::new(
            &[(5, variants::GENESIS_HASH), (3, variants::GENESIS_HASH)],
            0,
            0,
            0,
        );
    }

    #[test]
    fn test_last_height() {
        assert_eq!(checkpoints(Network::Main).last_height(), Some(0));
    }
}
