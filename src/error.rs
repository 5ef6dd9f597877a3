//! Configuration errors surfaced to the embedding process.
//!
//! Only data errors live here. Precondition violations (querying the
//! active parameters before a network was selected, asking for zerocoin
//! parameters on a variant without a modulus) are programming errors and
//! panic instead. A genesis hash mismatch is an integrity violation and
//! aborts the process.

use thiserror::Error;

/// Errors reported during chain-parameter selection and derivation
#[derive(Debug, Error)]
pub enum ChainParamsError {
    #[error("unknown network: {0}")]
    UnknownNetwork(String),
    #[error("malformed zerocoin trusted modulus: {0}")]
    InvalidModulus(String),
}
