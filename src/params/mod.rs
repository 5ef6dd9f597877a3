//! Per-network consensus parameter sets
//!
//! `ChainParams` is the read-only value type holding every
//! consensus-critical constant for one network variant. Instances are
//! built once through the override chain in [`variants`] and selected
//! process-wide through [`registry`].

#[cfg(any(test, feature = "test-utils"))]
mod modifiable;
mod registry;
pub(crate) mod variants;

#[cfg(any(test, feature = "test-utils"))]
pub use modifiable::ModifiableParams;
pub use registry::{active_params, params_for, select_network, select_network_by_name};

use crate::base58::Base58Prefixes;
use crate::crypto::Hash;
use crate::error::ChainParamsError;
use crate::genesis::GenesisBlock;
use crate::seeds::SeedSpec;
use crate::zerocoin::{zerocoin_params, ZerocoinParams};

/// Network variant identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Main,
    Testnet,
    Regtest,
    UnitTest,
}

impl Network {
    /// All known variants
    pub const ALL: [Network; 4] = [
        Network::Main,
        Network::Testnet,
        Network::Regtest,
        Network::UnitTest,
    ];

    /// Canonical display name
    pub fn name(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Testnet => "test",
            Network::Regtest => "regtest",
            Network::UnitTest => "unittest",
        }
    }

    /// Parse a canonical name
    pub fn from_name(name: &str) -> Result<Network, ChainParamsError> {
        match name {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Testnet),
            "regtest" => Ok(Network::Regtest),
            "unittest" => Ok(Network::UnitTest),
            other => Err(ChainParamsError::UnknownNetwork(other.to_string())),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The consensus-critical constants of one network variant.
///
/// Read-only after construction. Tests that need to vary fields go
/// through `ModifiableParams` (behind the `test-utils` feature) rather
/// than mutating an instance.
#[derive(Debug, Clone)]
pub struct ChainParams {
    pub network: Network,
    /// 4-byte network message marker: rarely-used upper-ASCII bytes,
    /// invalid as UTF-8, distinctive at any alignment
    pub message_start: [u8; 4],
    /// Hex-encoded alert-system public key
    pub alert_pubkey: &'static str,
    pub default_port: u16,
    /// Proof-of-work target ceiling, big-endian 256-bit
    pub pow_limit: [u8; 32],
    pub subsidy_halving_interval: i64,
    pub max_reorganization_depth: u32,
    /// Blocks (of the last `to_check`) that must signal before enforcing
    pub enforce_block_upgrade_majority: u32,
    /// Blocks that must signal before rejecting outdated peers
    pub reject_block_outdated_majority: u32,
    /// Window size for upgrade-majority counting
    pub to_check_block_upgrade_majority: u32,
    pub miner_threads: u32,
    /// Difficulty retarget timespan, seconds
    pub target_timespan: u64,
    /// Target block spacing, seconds
    pub target_spacing: u64,
    /// Coinbase maturity, blocks
    pub maturity: u32,
    pub masternode_count_drift: u32,
    /// Maximum total supply, base units
    pub max_money_out: u64,

    // Height or time based activations
    pub last_pow_block: i64,
    /// Block-time rule change height; only testnet ever schedules it
    pub bt_change_block: i64,
    pub modifier_update_block: i64,
    pub zerocoin_start_height: i64,
    pub accumulator_start_height: i64,
    pub zerocoin_start_time: u64,
    pub block_enforce_serial_range: i64,
    /// `HEIGHT_UNSCHEDULED` until a recalculation is scheduled
    pub block_recalculate_accumulators: i64,
    /// `HEIGHT_UNSCHEDULED` until bad serials ever emerge
    pub block_first_fraudulent: i64,
    /// `HEIGHT_UNSCHEDULED` until an accumulator checkpoint goes bad
    pub block_last_good_checkpoint: i64,

    pub stake_min_confirmations: u32,
    pub stake_min_amount: u64,
    pub masternode_payments_start: u64,
    pub pool_max_transactions: u32,
    /// Hex-encoded spork authority public key
    pub spork_key: &'static str,
    pub obfuscation_pool_dummy_address: &'static str,
    pub budget_fee_confirmations: u32,

    // Zerocoin
    /// Decimal trusted modulus for accumulator parameter derivation
    pub zerocoin_modulus: &'static str,
    pub zerocoin_max_spends_per_transaction: u32,
    pub zerocoin_min_mint_fee: u64,
    pub zerocoin_mint_required_confirmations: u32,
    pub zerocoin_required_accumulation: u32,
    pub zerocoin_default_security_level: u32,
    /// Block headers must carry this version once zerocoin is active
    pub zerocoin_header_version: u32,

    // Policy flags
    pub require_rpc_password: bool,
    pub mining_requires_peers: bool,
    pub allow_min_difficulty_blocks: bool,
    pub default_consistency_checks: bool,
    pub require_standard: bool,
    pub mine_blocks_on_demand: bool,
    pub skip_proof_of_work_check: bool,
    pub testnet_to_be_deprecated_field_rpc: bool,
    pub headers_first_syncing_active: bool,

    // Peer bootstrap
    pub dns_seeds: Vec<&'static str>,
    pub fixed_seeds: &'static [SeedSpec],

    pub base58_prefixes: Base58Prefixes,

    /// The validated genesis block for this variant
    pub genesis: GenesisBlock,
    pub genesis_hash: Hash,
}

impl ChainParams {
    /// Canonical name of this variant
    pub fn network_name(&self) -> &'static str {
        self.network.name()
    }

    /// Derived zerocoin accumulator parameters for this variant.
    ///
    /// Panics if the variant carries no trusted modulus; that is a
    /// programming error, not a configuration error.
    pub fn zerocoin_params(&self) -> Result<&'static ZerocoinParams, ChainParamsError> {
        assert!(
            !self.zerocoin_modulus.is_empty(),
            "network {} has no zerocoin trusted modulus",
            self.network
        );
        zerocoin_params(self.zerocoin_modulus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_names_roundtrip() {
        for network in Network::ALL {
            assert_eq!(Network::from_name(network.name()).unwrap(), network);
        }
    }

    #[test]
    fn test_unknown_network_name_is_rejected() {
        assert!(matches!(
            Network::from_name("mainnet"),
            Err(ChainParamsError::UnknownNetwork(_))
        ));
    }

    #[test]
    fn test_every_variant_resolves() {
        for network in Network::ALL {
            let params = params_for(network);
            assert_eq!(params.network, network);
            // Genesis validation already ran during resolution
            assert_eq!(params.genesis.hash(), params.genesis_hash);
        }
    }

    #[test]
    fn test_message_starts_are_distinct() {
        let mut markers: Vec<[u8; 4]> = Network::ALL
            .iter()
            .map(|n| params_for(*n).message_start)
            .collect();
        markers.sort();
        markers.dedup();
        // Unittest shares mainnet's marker by construction
        assert_eq!(markers.len(), 3);
    }

    #[test]
    fn test_ports_are_distinct() {
        let mut ports: Vec<u16> = Network::ALL
            .iter()
            .map(|n| params_for(*n).default_port)
            .collect();
        ports.sort();
        ports.dedup();
        assert_eq!(ports.len(), 4);
    }
}
