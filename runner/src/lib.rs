// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Harness execution for statebench.
//!
//! Spawns one client harness at a time, feeds it the workload on stdin,
//! measures its database directory and collects the results for the report.

pub mod config;
pub mod errors;
pub mod process;
pub mod client;
pub mod build;
pub mod runner;
pub mod orchestrator;
pub mod telemetry;

pub use client::{ClientKind, Invocation};
pub use config::{FailurePolicy, RunConfig, DEFAULT_TIMEOUT};
pub use errors::{Result, RunnerError};
pub use orchestrator::{BenchContext, BenchOutcome, Orchestrator, WorkloadSource};
pub use process::{LaunchError, LaunchSpec, ProcessLauncher, ProcessOutput, TokioLauncher};
pub use runner::{HarnessRunner, RunSpec};
