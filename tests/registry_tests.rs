//! Network selection lifecycle
//!
//! The active selection is process-wide state, so the whole lifecycle
//! runs in a single test: unselected lookup panics, selection sticks,
//! and a failed selection leaves the previous choice untouched.

use tpc_chainparams::error::ChainParamsError;
use tpc_chainparams::params::{
    active_params, params_for, select_network, select_network_by_name, Network,
};

#[test]
fn selection_lifecycle() {
    // Reading before any selection is a bring-up ordering bug
    let unselected = std::panic::catch_unwind(|| {
        let _ = active_params();
    });
    assert!(unselected.is_err());

    let main = select_network(Network::Main);
    assert_eq!(active_params().network, Network::Main);
    assert!(std::ptr::eq(active_params(), main));

    // Unknown name: configuration error, previous selection untouched
    let err = select_network_by_name("florin").unwrap_err();
    assert!(matches!(err, ChainParamsError::UnknownNetwork(name) if name == "florin"));
    assert_eq!(active_params().network, Network::Main);

    // Direct lookup never changes the selection
    let regtest = params_for(Network::Regtest);
    assert_eq!(regtest.network, Network::Regtest);
    assert_eq!(active_params().network, Network::Main);

    // Re-selection by name works for every canonical name
    for name in ["test", "regtest", "unittest", "main"] {
        let params = select_network_by_name(name).unwrap();
        assert_eq!(active_params().network, params.network);
        assert_eq!(params.network_name(), name);
    }
}
