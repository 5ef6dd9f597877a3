//! Zerocoin accumulator parameter derivation
//!
//! Accumulator group parameters are derived deterministically from the
//! trusted modulus, a large composite whose factorization is unknown.
//! Derivation runs lazily on first use and the result is cached for the
//! process lifetime: every caller observes the same fully-constructed
//! instance, even under concurrent first use.

use crate::crypto::sha256;
use crate::error::ChainParamsError;
use num_bigint::BigUint;
use std::sync::OnceLock;

static PARAMS: OnceLock<ZerocoinParams> = OnceLock::new();

/// Derived accumulator parameters, immutable for the process lifetime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZerocoinParams {
    /// The trusted modulus N
    pub accumulator_modulus: BigUint,
    /// Bit length of N
    pub modulus_bits: u64,
    /// Quadratic-residue base the accumulator starts from
    pub accumulator_base: BigUint,
    /// Smallest accumulable coin value
    pub min_coin_value: BigUint,
    /// Largest accumulable coin value (N / 4)
    pub max_coin_value: BigUint,
}

/// Parse the trusted modulus and return the process-wide derived
/// parameters, deriving them on first call.
///
/// A malformed modulus string always fails with a configuration error;
/// no default is ever substituted.
pub fn zerocoin_params(modulus: &str) -> Result<&'static ZerocoinParams, ChainParamsError> {
    let n = parse_modulus(modulus)?;
    Ok(PARAMS.get_or_init(|| derive(n)))
}

fn parse_modulus(modulus: &str) -> Result<BigUint, ChainParamsError> {
    if modulus.is_empty() {
        return Err(ChainParamsError::InvalidModulus("empty string".into()));
    }
    BigUint::parse_bytes(modulus.as_bytes(), 10)
        .filter(|n| n.bits() >= 2)
        .ok_or_else(|| ChainParamsError::InvalidModulus(abbreviate(modulus)))
}

fn derive(n: BigUint) -> ZerocoinParams {
    let accumulator_base = derive_quadratic_residue(b"tpc-accumulator-base", &n);
    let min_coin_value = BigUint::from(2u32);
    let max_coin_value = &n >> 2;
    ZerocoinParams {
        modulus_bits: n.bits(),
        accumulator_base,
        min_coin_value,
        max_coin_value,
        accumulator_modulus: n,
    }
}

/// Derive a quadratic residue mod N from a domain-separated hash chain.
///
/// Hash blocks are concatenated until the candidate covers N's bit
/// length, reduced mod N, then squared. Candidates reducing to 0 or 1
/// are skipped by bumping the chain counter.
fn derive_quadratic_residue(domain: &[u8], n: &BigUint) -> BigUint {
    let n_bytes = n.to_bytes_be();
    let one = BigUint::from(1u32);
    for counter in 0u32.. {
        let mut material = Vec::new();
        let mut block: u32 = 0;
        while (material.len() as u64) * 8 < n.bits() {
            let mut input = Vec::with_capacity(domain.len() + 8 + n_bytes.len());
            input.extend_from_slice(domain);
            input.extend_from_slice(&counter.to_be_bytes());
            input.extend_from_slice(&block.to_be_bytes());
            input.extend_from_slice(&n_bytes);
            material.extend_from_slice(&sha256(&input));
            block += 1;
        }
        let candidate = BigUint::from_bytes_be(&material) % n;
        if candidate > one {
            return candidate.modpow(&BigUint::from(2u32), n);
        }
    }
    unreachable!("hash chain always yields a usable candidate")
}

fn abbreviate(s: &str) -> String {
    if s.len() <= 32 {
        s.to_string()
    } else {
        format!("{}...{}", &s[..16], &s[s.len() - 8..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{params_for, Network};
    use std::thread;

    fn mainnet_modulus() -> &'static str {
        params_for(Network::Main).zerocoin_modulus
    }

    #[test]
    fn test_malformed_modulus_is_rejected() {
        assert!(matches!(
            zerocoin_params(""),
            Err(ChainParamsError::InvalidModulus(_))
        ));
        assert!(matches!(
            zerocoin_params("not a number"),
            Err(ChainParamsError::InvalidModulus(_))
        ));
        assert!(matches!(
            zerocoin_params("12345x678"),
            Err(ChainParamsError::InvalidModulus(_))
        ));
    }

    #[test]
    fn test_same_instance_on_repeat_calls() {
        let a = zerocoin_params(mainnet_modulus()).unwrap();
        let b = zerocoin_params(mainnet_modulus()).unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_concurrent_first_use_yields_one_instance() {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                thread::spawn(|| {
                    zerocoin_params(mainnet_modulus()).unwrap() as *const ZerocoinParams
                        as usize
                })
            })
            .collect();
        let pointers: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_derived_values_are_consistent() {
        let params = zerocoin_params(mainnet_modulus()).unwrap();
        assert!(params.modulus_bits > 1024);
        assert!(params.accumulator_base > BigUint::from(1u32));
        assert!(params.accumulator_base < params.accumulator_modulus);
        assert_eq!(
            params.max_coin_value,
            &params.accumulator_modulus >> 2
        );
    }

    #[test]
    fn test_malformed_modulus_still_rejected_after_cache() {
        zerocoin_params(mainnet_modulus()).unwrap();
        assert!(zerocoin_params("").is_err());
    }
}
