// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Harness results.

use crate::error::DecodeError;
use serde::{Deserialize, Serialize};

/// One client's reported outcome.
///
/// Everything except `db_size_bytes` is reported by the harness on stdout.
/// `db_size_bytes` is measured by the runner after the harness exits.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchResult {
    pub client: String,
    /// Compared by exact string equality only.
    pub state_root: String,
    pub accounts_created: u64,
    pub contracts_created: u64,
    pub storage_slots: u64,
    pub elapsed_ms: u64,
    pub trie_time_ms: u64,
    pub db_write_time_ms: u64,
    pub peak_memory_bytes: u64,
    pub db_size_bytes: u64,
}

impl BenchResult {
    /// Decodes a harness's stdout as exactly one JSON result object.
    ///
    /// An empty or missing `client` field is filled with `client`.
    pub fn from_harness_output(client: &str, stdout: &[u8]) -> Result<Self, DecodeError> {
        let mut result: BenchResult = serde_json::from_slice(stdout)?;
        if result.client.is_empty() {
            result.client = client.to_string();
        }
        Ok(result)
    }
}

/// Per-client outcome when the run is allowed to continue past failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunOutcome {
    // Tried first when decoding: `BenchResult` accepts any object.
    Failed { client: String, error: String },
    Completed(BenchResult),
}

impl RunOutcome {
    pub fn client(&self) -> &str {
        match self {
            RunOutcome::Completed(r) => &r.client,
            RunOutcome::Failed { client, .. } => client,
        }
    }

    pub fn completed(&self) -> Option<&BenchResult> {
        match self {
            RunOutcome::Completed(r) => Some(r),
            RunOutcome::Failed { .. } => None,
        }
    }
}

impl From<BenchResult> for RunOutcome {
    fn from(r: BenchResult) -> Self {
        RunOutcome::Completed(r)
    }
}
