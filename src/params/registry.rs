//! Process-wide network selection
//!
//! Each variant's parameter set is resolved once into a `'static`
//! instance; genesis validation runs during that first resolution and
//! aborts on mismatch. The active selection is process-scoped state
//! with a single-assignment-then-read-only lifecycle: the embedder
//! selects once at bring-up, dependent subsystems only read. Consumers
//! that can take a `&ChainParams` argument should prefer that over the
//! ambient lookup.

use super::{variants, ChainParams, Network};
use crate::error::ChainParamsError;
use std::sync::{OnceLock, RwLock};

static MAINNET: OnceLock<ChainParams> = OnceLock::new();
static TESTNET: OnceLock<ChainParams> = OnceLock::new();
static REGTEST: OnceLock<ChainParams> = OnceLock::new();
static UNIT_TEST: OnceLock<ChainParams> = OnceLock::new();

static ACTIVE: RwLock<Option<Network>> = RwLock::new(None);

/// Resolve a variant's parameter set without changing the active
/// selection
pub fn params_for(network: Network) -> &'static ChainParams {
    match network {
        Network::Main => MAINNET.get_or_init(variants::mainnet),
        Network::Testnet => TESTNET.get_or_init(variants::testnet),
        Network::Regtest => REGTEST.get_or_init(variants::regtest),
        Network::UnitTest => UNIT_TEST.get_or_init(variants::unit_test),
    }
}

/// Set the process-wide active parameter set
pub fn select_network(network: Network) -> &'static ChainParams {
    // Resolve first so a genesis integrity failure aborts before the
    // selection changes
    let params = params_for(network);
    *ACTIVE.write().unwrap() = Some(network);
    params
}

/// Select by canonical name. An unknown name fails with a configuration
/// error and leaves any previous selection untouched.
pub fn select_network_by_name(name: &str) -> Result<&'static ChainParams, ChainParamsError> {
    let network = Network::from_name(name)?;
    Ok(select_network(network))
}

/// The active parameter set.
///
/// Panics if no network was ever selected; that is a bring-up ordering
/// bug in the embedder, not a runtime condition.
pub fn active_params() -> &'static ChainParams {
    let selected = *ACTIVE.read().unwrap();
    match selected {
        Some(network) => params_for(network),
        None => panic!("chain parameters requested before select_network"),
    }
}
