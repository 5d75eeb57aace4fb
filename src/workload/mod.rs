// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Deterministic workloads.
//!
//! A workload is a flat, ordered log of [`Operation`](crate::Operation)s, one JSON
//! object per line, ending in exactly one `compute_root`. The same
//! [`WorkloadConfig`] (seed included) always yields the same bytes.

pub mod distribution;
pub mod generator;
pub mod validate;

pub use distribution::Distribution;
pub use generator::Generator;
pub use validate::validate;

/// Generation parameters. Every field is required; the generator applies no
/// defaults of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkloadConfig {
    pub num_accounts: usize,
    pub num_contracts: usize,
    pub min_slots: usize,
    pub max_slots: usize,
    pub distribution: Distribution,
    pub seed: u64,
    /// Average contract code size in bytes.
    pub code_size: usize,
}

impl WorkloadConfig {
    pub fn check(&self) -> crate::error::Result<()> {
        if self.min_slots > self.max_slots {
            return Err(crate::WorkloadError::InvalidConfig(format!(
                "min_slots ({}) exceeds max_slots ({})",
                self.min_slots, self.max_slots
            )));
        }
        Ok(())
    }
}

/// Counts describing a workload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub total_operations: usize,
    /// Plain accounts; contract accounts are counted in `contracts_created`.
    pub accounts_created: usize,
    pub contracts_created: usize,
    pub storage_slots: usize,
}
