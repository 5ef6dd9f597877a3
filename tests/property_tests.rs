//! Property-based tests for the chain parameter registry
//!
//! These verify invariants hold under random inputs: seed conversion,
//! Base58Check round-trips, and genesis construction determinism.

use proptest::prelude::*;
use tpc_chainparams::base58::{base58check_decode, base58check_encode};
use tpc_chainparams::genesis::{build_genesis, pay_to_pubkey_script};
use tpc_chainparams::seeds::{convert_fixed_seeds, SeedSpec, ONE_WEEK};

fn arbitrary_seed_table() -> impl Strategy<Value = Vec<SeedSpec>> {
    prop::collection::vec(
        (any::<[u8; 16]>(), any::<u16>()).prop_map(|(addr, port)| SeedSpec { addr, port }),
        0..32,
    )
}

proptest! {
    // ========================================================================
    // SEED CONVERSION
    // ========================================================================

    /// Output length always equals input length
    #[test]
    fn prop_seed_conversion_preserves_length(table in arbitrary_seed_table()) {
        let seeds = convert_fixed_seeds(&table);
        prop_assert_eq!(seeds.len(), table.len());
    }

    /// Ports survive conversion and timestamps land one to two weeks back
    #[test]
    fn prop_seed_conversion_ports_and_timestamps(table in arbitrary_seed_table()) {
        let before = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let seeds = convert_fixed_seeds(&table);
        for (spec, seed) in table.iter().zip(&seeds) {
            prop_assert_eq!(seed.addr.port(), spec.port);
            prop_assert!(seed.last_seen >= before - 2 * ONE_WEEK);
            prop_assert!(seed.last_seen <= before - ONE_WEEK + 5);
        }
    }

    // ========================================================================
    // BASE58CHECK
    // ========================================================================

    /// Encode then decode recovers prefix plus payload
    #[test]
    fn prop_base58check_roundtrip(
        prefix in any::<u8>(),
        payload in prop::collection::vec(any::<u8>(), 0..64)
    ) {
        let encoded = base58check_encode(&[prefix], &payload);
        let decoded = base58check_decode(&encoded).unwrap();
        prop_assert_eq!(decoded[0], prefix);
        prop_assert_eq!(&decoded[1..], payload.as_slice());
    }

    // ========================================================================
    // GENESIS CONSTRUCTION
    // ========================================================================

    /// Building twice from the same inputs yields identical blocks
    #[test]
    fn prop_genesis_is_deterministic(
        text in "[ -~]{1,60}",
        time in any::<u32>(),
        bits in any::<u32>(),
        nonce in any::<u32>(),
        version in 1i32..8,
        reward in 0u64..21_000_000_00000000u64,
        pubkey in any::<[u8; 33]>()
    ) {
        let build = || build_genesis(
            &text,
            pay_to_pubkey_script(&pubkey),
            time,
            bits,
            nonce,
            version,
            reward,
        );
        let a = build();
        let b = build();
        prop_assert_eq!(a.hash(), b.hash());
        prop_assert_eq!(a.compute_merkle_root(), b.compute_merkle_root());
        prop_assert_eq!(a.header.merkle_root, a.coinbase.hash());
        prop_assert_eq!(a.header.to_bytes().len(), 80);
    }

    /// The embedded announcement text is carried verbatim in the script
    #[test]
    fn prop_genesis_embeds_timestamp_text(text in "[ -~]{1,60}") {
        let block = build_genesis(
            &text,
            pay_to_pubkey_script(&[0x02; 33]),
            0,
            0,
            0,
            1,
            0,
        );
        let script = &block.coinbase.inputs[0].script_sig;
        let bytes = text.as_bytes();
        prop_assert!(script.windows(bytes.len()).any(|w| w == bytes));
    }
}
