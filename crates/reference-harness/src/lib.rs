// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! A minimal harness speaking the statebench protocol.
//!
//! Reads operations from stdin, keeps accounts in an ordered in-memory map,
//! commits them with BLAKE3 on `compute_root`, persists the state into the
//! database directory and reports one result line. It is the protocol's
//! executable reference and the starting point for new client harnesses.

pub mod commit;
pub mod memory;
pub mod state;

use statebench::{BenchResult, Operation};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

pub use state::{Account, Counters, State};

/// Reported in the result's `client` field.
pub const CLIENT: &str = "reference";

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: {op} on unknown account {address}")]
    UnknownAccount {
        line: usize,
        op: &'static str,
        address: String,
    },

    #[error("end of input without compute_root")]
    MissingComputeRoot,

    #[error("read input: {0}")]
    Read(#[source] std::io::Error),

    #[error("persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, HarnessError>;

/// Applies `input` up to `compute_root` and produces the result line.
///
/// `started` marks process start; elapsed time runs from there to the
/// moment the result is assembled.
pub fn run<R: BufRead>(input: R, db_dir: &Path, started: Instant) -> Result<BenchResult> {
    let mut state = State::default();

    for (idx, line) in input.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(HarnessError::Read)?;
        let op: Operation = serde_json::from_str(&line).map_err(|source| HarnessError::Parse {
            line: line_no,
            source,
        })?;

        if op == Operation::ComputeRoot {
            return finish(&state, db_dir, started);
        }

        state.apply(op).map_err(|e| e.at_line(line_no))?;
    }

    Err(HarnessError::MissingComputeRoot)
}

fn finish(state: &State, db_dir: &Path, started: Instant) -> Result<BenchResult> {
    let trie_start = Instant::now();
    let root = commit::state_root(state);
    let trie_time = trie_start.elapsed();

    let write_start = Instant::now();
    let path = db_dir.join(state::STATE_FILE);
    state
        .persist(&path)
        .map_err(|source| HarnessError::Persist { path, source })?;
    let db_write_time = write_start.elapsed();

    let peak_memory_bytes = memory::peak_rss_bytes();
    let counters = state.counters();

    Ok(BenchResult {
        client: CLIENT.to_string(),
        state_root: root,
        accounts_created: counters.accounts,
        contracts_created: counters.contracts,
        storage_slots: counters.slots,
        elapsed_ms: started.elapsed().as_millis() as u64,
        trie_time_ms: trie_time.as_millis() as u64,
        db_write_time_ms: db_write_time.as_millis() as u64,
        peak_memory_bytes,
        db_size_bytes: 0,
    })
}
