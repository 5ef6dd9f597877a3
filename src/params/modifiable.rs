//! Test-only parameter mutation
//!
//! Production parameter sets are immutable. Unit tests that need to
//! vary consensus constants take a `ModifiableParams`: a private clone
//! of the unittest variant with published setters for exactly the
//! fields tests are allowed to touch. The wrapper is single-threaded
//! and never feeds back into the process-wide registry. Downstream
//! test code opts in through the `test-utils` cargo feature.

use super::{params_for, ChainParams, Network};

/// A mutable clone of the unittest parameter set
#[derive(Debug, Clone)]
pub struct ModifiableParams {
    params: ChainParams,
}

impl ModifiableParams {
    /// Clone the unittest variant as a starting point
    pub fn new() -> Self {
        Self {
            params: params_for(Network::UnitTest).clone(),
        }
    }

    /// The current parameter values, to thread into the code under test
    pub fn params(&self) -> &ChainParams {
        &self.params
    }

    pub fn set_subsidy_halving_interval(&mut self, interval: i64) {
        self.params.subsidy_halving_interval = interval;
    }

    pub fn set_enforce_block_upgrade_majority(&mut self, majority: u32) {
        self.params.enforce_block_upgrade_majority = majority;
    }

    pub fn set_reject_block_outdated_majority(&mut self, majority: u32) {
        self.params.reject_block_outdated_majority = majority;
    }

    pub fn set_to_check_block_upgrade_majority(&mut self, window: u32) {
        self.params.to_check_block_upgrade_majority = window;
    }

    pub fn set_default_consistency_checks(&mut self, enabled: bool) {
        self.params.default_consistency_checks = enabled;
    }

    pub fn set_allow_min_difficulty_blocks(&mut self, allowed: bool) {
        self.params.allow_min_difficulty_blocks = allowed;
    }

    pub fn set_skip_proof_of_work_check(&mut self, skip: bool) {
        self.params.skip_proof_of_work_check = skip;
    }
}

impl Default for ModifiableParams {
    fn default() -> Self {
        Self::new()
    }
}
