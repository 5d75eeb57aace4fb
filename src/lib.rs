// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! statebench: deterministic state workloads and cross-client comparison.
//!
//! The crate holds everything that is independent of how a harness process is
//! launched: the operation model and its wire format, the seeded workload
//! generator, structural validation of workload files, the harness `BenchResult`
//! and the report engine that compares results across clients.

pub mod error;
pub mod types;
pub mod operation;
pub mod workload;
pub mod result;
pub mod report;

pub use error::{DecodeError, ReportError, WorkloadError};
pub use operation::Operation;
pub use result::{BenchResult, RunOutcome};
pub use workload::{Distribution, Generator, Summary, WorkloadConfig};

#[cfg(test)]
pub mod tests;
