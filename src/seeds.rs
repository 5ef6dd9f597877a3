//! Bootstrap seed addresses
//!
//! A compiled table of known hosts gives a fresh node its first peers.
//! Each converted address is stamped with a synthetic last-seen time of
//! one to two weeks ago, so addresses learned from live gossip (with
//! newer timestamps) win over these hints during peer selection.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv6Addr, SocketAddr};
use std::time::{SystemTime, UNIX_EPOCH};

/// One week in seconds
pub const ONE_WEEK: u64 = 7 * 24 * 60 * 60;

/// A compiled seed host: 16-byte IPv6 (or IPv4-mapped) address plus port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedSpec {
    pub addr: [u8; 16],
    pub port: u16,
}

impl SeedSpec {
    /// Shorthand for an IPv4 host in the IPv4-mapped IPv6 range
    pub const fn ipv4(a: u8, b: u8, c: u8, d: u8, port: u16) -> Self {
        SeedSpec {
            addr: [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d],
            port,
        }
    }
}

/// A usable peer hint with a synthetic last-seen timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedAddress {
    pub addr: SocketAddr,
    /// Unix timestamp; always one to two weeks in the past
    pub last_seen: u64,
}

/// Compiled mainnet seed hosts
pub const MAINNET_FIXED_SEEDS: &[SeedSpec] = &[
    SeedSpec::ipv4(167, 86, 104, 232, 16521),
    SeedSpec::ipv4(164, 68, 110, 103, 16521),
    SeedSpec::ipv4(164, 68, 111, 75, 16521),
    SeedSpec::ipv4(116, 203, 156, 64, 16521),
    SeedSpec::ipv4(159, 69, 190, 7, 16521),
    SeedSpec::ipv4(95, 216, 164, 118, 16521),
    SeedSpec::ipv4(116, 202, 26, 146, 16521),
    SeedSpec::ipv4(164, 68, 106, 143, 16521),
];

/// Convert a compiled host table into timestamped peer-address hints.
///
/// One output per input. Timestamps are drawn uniformly from one to two
/// weeks before the current time; a node only needs to reach one or two
/// of these before live gossip supplies fresher addresses. Safe to call
/// repeatedly, no side effects on other components.
pub fn convert_fixed_seeds(table: &[SeedSpec]) -> Vec<SeedAddress> {
    let now = unix_time();
    let mut rng = rand::thread_rng();
    table
        .iter()
        .map(|spec| SeedAddress {
            addr: socket_addr(spec),
            last_seen: now - ONE_WEEK - rng.gen_range(0..ONE_WEEK),
        })
        .collect()
}

fn socket_addr(spec: &SeedSpec) -> SocketAddr {
    let v6 = Ipv6Addr::from(spec.addr);
    let ip = match v6.to_ipv4_mapped() {
        Some(v4) => IpAddr::V4(v4),
        None => IpAddr::V6(v6),
    };
    SocketAddr::new(ip, spec.port)
}

fn unix_time() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before the Unix epoch")
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_length_matches_input() {
        assert_eq!(
            convert_fixed_seeds(MAINNET_FIXED_SEEDS).len(),
            MAINNET_FIXED_SEEDS.len()
        );
        assert!(convert_fixed_seeds(&[]).is_empty());
    }

    #[test]
    fn test_timestamps_one_to_two_weeks_old() {
        let before = unix_time();
        let seeds = convert_fixed_seeds(MAINNET_FIXED_SEEDS);
        let after = unix_time();
        for seed in &seeds {
            assert!(seed.last_seen >= before - 2 * ONE_WEEK);
            assert!(seed.last_seen <= after - ONE_WEEK);
        }
    }

    #[test]
    fn test_ipv4_mapped_addresses_become_v4_sockets() {
        let seeds = convert_fixed_seeds(MAINNET_FIXED_SEEDS);
        assert_eq!(seeds[0].addr.to_string(), "167.86.104.232:16521");
        assert!(seeds.iter().all(|s| s.addr.is_ipv4()));
    }

    #[test]
    fn test_ports_preserved() {
        let spec = SeedSpec::ipv4(10, 0, 0, 1, 4242);
        let seeds = convert_fixed_seeds(&[spec]);
        assert_eq!(seeds[0].addr.port(), 4242);
    }
}
