//! Variant construction through the override chain
//!
//! Mainnet is the canonical default set. Testnet is mainnet plus an
//! explicit override list, regtest is testnet plus overrides, and
//! unittest is mainnet plus overrides. Every field a variant diverges
//! on is therefore visible as an assignment in exactly one place.

use super::{ChainParams, Network};
use crate::base58::Base58Prefixes;
use crate::constants::{COIN, HEIGHT_UNSCHEDULED, ZCENT};
use crate::crypto::Hash;
use crate::genesis::{build_genesis, pay_to_pubkey_script, validate_genesis, GenesisBlock};
use crate::seeds::MAINNET_FIXED_SEEDS;

/// Expected genesis block hash, identical across variants: the quark
/// digest of the recorded header fields
pub const GENESIS_HASH: &str =
    "57cf7618f8fb5411244c4ccceec99421e233e2c4d0abac8473050b436b0afc5a";

/// Expected genesis merkle root
pub const GENESIS_MERKLE_ROOT: &str =
    "36425cffbad7d3117dac63e254e9cb5cc2a6342e48c414e694f1f5bcf154a776";

/// Launch announcement embedded in the coinbase input script
const GENESIS_TIMESTAMP_TEXT: &str = "December 22 2019 - TPC CRYO Launch";

/// UTC Sunday 22 December 2019 20:00:00
const GENESIS_TIME: u32 = 1_577_044_800;
const GENESIS_BITS: u32 = 0x1E0F_FFF0;
const GENESIS_NONCE: u32 = 1_368_171;
const GENESIS_VERSION: i32 = 1;

/// Public key the zero-value genesis output is locked to
const GENESIS_PAYOUT_PUBKEY: &str =
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb6\
     49f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

const ALERT_PUBKEY: &str =
    "04935571b8bb3780c9c995146380713fcc487636240b09d9198059fcea177c920b\
     c5b16e0247b5aa75703febdf0959ad6d8d6bbc621640ffb40b4c79a373974b20";

const MAIN_SPORK_KEY: &str =
    "04eef854f7585aff3ca75f67e587a272649b27bcc2ddfc84f74f53321959a98de1\
     04bb6fe1cf06035078aca811a82da7b8a2386883f715965abd7f121791b49e5a";

const TEST_SPORK_KEY: &str =
    "041f844152b871ebd012d40cc5777218da54fab5e89c2236ff0e88e6f6783d474d\
     c6779b47cba883495bcc7ce99b273503031fffca5bca026a509ab635e3959738";

const OBFUSCATION_POOL_DUMMY_ADDRESS: &str = "TSvAutvPPoJSXkkhFbM81NJwrH5WWwN859";

/// The trusted zerocoin modulus: a large composite of unknown
/// factorization underlying accumulator security
const ZEROCOIN_MODULUS: &str = concat!(
    "31629371982883654747876637397977794903229047353658840926060123331980132797095193443400483581955155",
    "9140326217928527729421120143947632766307118699382872851428016259864502927433364349120863346768110353968977154492",
    "4529916275361138080563068024877581070714668896757923763202421476956797848068247425087970545553584192099508855393",
    "2517732108666167108010176497978305278075734300480511464917311796709554446862604905505722840193080357517097751624",
    "5962345574625638911099444052688081364332608166414911619220798571364171342788070783015395049932464398621838539210",
    "24875541895683682393230943067733828588974967606248865806878122888210000",
);

/// `~uint256(0) >> shift`: all-ones 256-bit value with the top `shift`
/// bits cleared, big-endian
fn pow_limit_shifted(shift: usize) -> [u8; 32] {
    let mut limit = [0xffu8; 32];
    for byte in limit.iter_mut().take(shift / 8) {
        *byte = 0;
    }
    if shift % 8 != 0 {
        limit[shift / 8] = 0xff >> (shift % 8);
    }
    limit
}

/// Build and validate the genesis block shared by all variants
fn validated_genesis() -> (GenesisBlock, Hash) {
    let payout_pubkey =
        hex::decode(GENESIS_PAYOUT_PUBKEY).expect("genesis payout pubkey is valid hex");
    let genesis = build_genesis(
        GENESIS_TIMESTAMP_TEXT,
        pay_to_pubkey_script(&payout_pubkey),
        GENESIS_TIME,
        GENESIS_BITS,
        GENESIS_NONCE,
        GENESIS_VERSION,
        0, // the launch output carries no value
    );
    let expected_hash = Hash::from_hex(GENESIS_HASH).expect("genesis hash constant");
    let expected_merkle =
        Hash::from_hex(GENESIS_MERKLE_ROOT).expect("genesis merkle constant");
    validate_genesis(&genesis, &expected_hash, &expected_merkle);
    (genesis, expected_hash)
}

/// Canonical defaults: the main network
pub fn mainnet() -> ChainParams {
    let (genesis, genesis_hash) = validated_genesis();
    ChainParams {
        network: Network::Main,
        message_start: [0x01, 0xaa, 0xba, 0xab],
        alert_pubkey: ALERT_PUBKEY,
        default_port: 16521,
        // Starting difficulty is 1 / 2^12
        pow_limit: pow_limit_shifted(20),
        subsidy_halving_interval: 4_000_000,
        max_reorganization_depth: 100,
        enforce_block_upgrade_majority: 750,
        reject_block_outdated_majority: 950,
        to_check_block_upgrade_majority: 1000,
        miner_threads: 0,
        target_timespan: 2 * 60,
        target_spacing: 2 * 60,
        maturity: 60,
        masternode_count_drift: 20,
        max_money_out: 21_000_000 * COIN,

        last_pow_block: 200,
        bt_change_block: HEIGHT_UNSCHEDULED,
        modifier_update_block: 1,
        zerocoin_start_height: 101,
        accumulator_start_height: 50,
        zerocoin_start_time: 1_529_726_034,
        block_enforce_serial_range: 1,
        block_recalculate_accumulators: HEIGHT_UNSCHEDULED,
        block_first_fraudulent: HEIGHT_UNSCHEDULED,
        block_last_good_checkpoint: HEIGHT_UNSCHEDULED,

        stake_min_confirmations: 720,
        stake_min_amount: 50 * COIN,
        masternode_payments_start: 1_516_371_317,
        pool_max_transactions: 3,
        spork_key: MAIN_SPORK_KEY,
        obfuscation_pool_dummy_address: OBFUSCATION_POOL_DUMMY_ADDRESS,
        budget_fee_confirmations: 6,

        zerocoin_modulus: ZEROCOIN_MODULUS,
        zerocoin_max_spends_per_transaction: 7, // about 20kb each
        zerocoin_min_mint_fee: ZCENT,
        zerocoin_mint_required_confirmations: 20,
        zerocoin_required_accumulation: 1,
        zerocoin_default_security_level: 100,
        zerocoin_header_version: 4,

        require_rpc_password: true,
        mining_requires_peers: true,
        allow_min_difficulty_blocks: false,
        default_consistency_checks: false,
        require_standard: true,
        mine_blocks_on_demand: false,
        skip_proof_of_work_check: false,
        testnet_to_be_deprecated_field_rpc: false,
        headers_first_syncing_active: false,

        dns_seeds: vec![
            "167.86.104.232",
            "164.68.110.103",
            "164.68.111.75",
            "116.203.156.64",
            "159.69.190.7",
            "95.216.164.118",
            "116.202.26.146",
            "164.68.106.143",
        ],
        fixed_seeds: MAINNET_FIXED_SEEDS,

        base58_prefixes: Base58Prefixes::new(
            65,
            23,
            223,
            [0x02, 0x02, 0x2a, 0x3a],
            [0x00, 0x20, 0x22, 0x02],
            // BIP44 coin type, from the SLIP-0044 registry
            [0x80, 0x00, 0x1e, 0xf1],
        ),

        genesis,
        genesis_hash,
    }
}

/// Testnet: mainnet plus these overrides
pub fn testnet() -> ChainParams {
    let mut p = mainnet();
    p.network = Network::Testnet;
    p.message_start = [0xfa, 0xfb, 0xfc, 0xfd];
    p.default_port = 11313;
    p.enforce_block_upgrade_majority = 51;
    p.reject_block_outdated_majority = 75;
    p.to_check_block_upgrade_majority = 100;
    p.maturity = 15;
    p.masternode_count_drift = 4;
    p.bt_change_block = 1000;
    p.modifier_update_block = 51_197;
    p.zerocoin_start_height = 50;
    p.zerocoin_start_time = 1_529_726_039;

    p.dns_seeds = vec!["testnet.tpc.io"];
    p.fixed_seeds = &[];

    p.allow_min_difficulty_blocks = true;
    p.require_standard = false;
    p.testnet_to_be_deprecated_field_rpc = true;

    p.pool_max_transactions = 2;
    p.spork_key = TEST_SPORK_KEY;
    p.masternode_payments_start = 1_420_837_558;
    // Very short: testnet only has an 8-block finalization window
    p.budget_fee_confirmations = 3;

    p.stake_min_confirmations = 30;
    p.stake_min_amount = 1000 * COIN;

    p.base58_prefixes = Base58Prefixes::new(
        110,
        115,
        214,
        [0x3a, 0x2a, 0x12, 0x11],
        [0x3a, 0x41, 0x11, 0x1a],
        // Testnet coin type is 1, every coin's testnet default
        [0x80, 0x00, 0x00, 0x01],
    );
    p
}

/// Regtest: testnet plus these overrides
pub fn regtest() -> ChainParams {
    let mut p = testnet();
    p.network = Network::Regtest;
    p.message_start = [0xf1, 0xf2, 0xf3, 0xf4];
    p.default_port = 36210;
    p.subsidy_halving_interval = 150;
    p.enforce_block_upgrade_majority = 750;
    p.reject_block_outdated_majority = 950;
    p.to_check_block_upgrade_majority = 1000;
    p.miner_threads = 1;
    p.target_timespan = 24 * 60 * 60;
    p.target_spacing = 2 * 60;
    p.pow_limit = pow_limit_shifted(1);

    p.dns_seeds = vec![];
    p.fixed_seeds = &[];

    p.require_rpc_password = false;
    p.mining_requires_peers = false;
    p.allow_min_difficulty_blocks = true;
    p.default_consistency_checks = true;
    p.require_standard = false;
    p.mine_blocks_on_demand = true;
    p.testnet_to_be_deprecated_field_rpc = false;
    p
}

/// Unittest: mainnet plus these overrides (and the external
/// `ModifiableParams` mutator wrapper)
pub fn unit_test() -> ChainParams {
    let mut p = mainnet();
    p.network = Network::UnitTest;
    p.default_port = 51478;

    p.dns_seeds = vec![];
    p.fixed_seeds = &[];

    p.require_rpc_password = false;
    p.mining_requires_peers = false;
    p.default_consistency_checks = true;
    p.allow_min_difficulty_blocks = false;
    p.mine_blocks_on_demand = true;
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow_limit_shift_20() {
        let limit = pow_limit_shifted(20);
        assert_eq!(&limit[..3], &[0x00, 0x00, 0x0f]);
        assert!(limit[3..].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_pow_limit_shift_1() {
        let limit = pow_limit_shifted(1);
        assert_eq!(limit[0], 0x7f);
        assert!(limit[1..].iter().all(|&b| b == 0xff));
    }

    #[test]
    fn test_genesis_constants_hold() {
        let (genesis, hash) = validated_genesis();
        assert_eq!(hash.to_hex(), GENESIS_HASH);
        assert_eq!(genesis.compute_merkle_root().to_hex(), GENESIS_MERKLE_ROOT);
        assert_eq!(genesis.coinbase.outputs[0].value, 0);
    }

    #[test]
    fn test_override_chain_regtest_inherits_testnet() {
        let test = testnet();
        let reg = regtest();
        // Overridden relative to testnet
        assert_ne!(reg.pow_limit, test.pow_limit);
        assert_ne!(reg.target_timespan, test.target_timespan);
        assert_ne!(reg.subsidy_halving_interval, test.subsidy_halving_interval);
        // Inherited from testnet, not mainnet
        assert_eq!(reg.maturity, test.maturity);
        assert_eq!(reg.stake_min_amount, test.stake_min_amount);
        assert_eq!(reg.base58_prefixes, test.base58_prefixes);
        assert_eq!(reg.spork_key, test.spork_key);
    }

    #[test]
    fn test_unit_test_inherits_mainnet() {
        let main = mainnet();
        let unit = unit_test();
        assert_eq!(unit.message_start, main.message_start);
        assert_eq!(unit.maturity, main.maturity);
        assert_eq!(unit.base58_prefixes, main.base58_prefixes);
        assert!(unit.fixed_seeds.is_empty());
        assert!(unit.mine_blocks_on_demand);
    }

    #[test]
    fn test_effective_policy_flags_per_variant() {
        // Enumerated effective values after the full override chain
        let main = mainnet();
        assert!(main.require_rpc_password && main.mining_requires_peers);
        assert!(!main.allow_min_difficulty_blocks && !main.mine_blocks_on_demand);

        let test = testnet();
        assert!(test.require_rpc_password && test.mining_requires_peers);
        assert!(test.allow_min_difficulty_blocks);
        assert!(!test.require_standard && test.testnet_to_be_deprecated_field_rpc);

        let reg = regtest();
        assert!(!reg.require_rpc_password && !reg.mining_requires_peers);
        assert!(reg.allow_min_difficulty_blocks && reg.default_consistency_checks);
        assert!(reg.mine_blocks_on_demand && !reg.testnet_to_be_deprecated_field_rpc);
        assert!(!reg.skip_proof_of_work_check);

        let unit = unit_test();
        assert!(!unit.require_rpc_password && !unit.mining_requires_peers);
        assert!(!unit.allow_min_difficulty_blocks && unit.default_consistency_checks);
        assert!(unit.mine_blocks_on_demand);
        // Inherited untouched from mainnet
        assert!(unit.require_standard);
        assert!(!unit.testnet_to_be_deprecated_field_rpc);
    }
}
