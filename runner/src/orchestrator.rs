// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! End-to-end benchmark run.
//!
//! 1. materialize the workload (generate into a temp file, or validate a
//!    supplied one),
//! 2. resolve every client's harness, building where needed,
//! 3. run the harnesses one after another against the same workload,
//! 4. hand the outcomes back for reporting.
//!
//! Harnesses never overlap, so their timing and memory numbers do not
//! interfere with each other.

use crate::build::resolve_invocation;
use crate::config::{FailurePolicy, RunConfig};
use crate::errors::{Result, RunnerError};
use crate::process::ProcessLauncher;
use crate::runner::{client_db_dir, HarnessRunner, RunSpec};
use statebench::workload::{self, Generator, Summary, WorkloadConfig};
use statebench::RunOutcome;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::Instrument;

#[derive(Clone, Debug)]
pub enum WorkloadSource {
    Generate(WorkloadConfig),
    /// An existing JSONL file; checked before any harness sees it.
    File(PathBuf),
}

#[derive(Clone, Debug)]
pub struct BenchContext {
    pub config: RunConfig,
    pub workload: WorkloadSource,
}

#[derive(Clone, Debug)]
pub struct BenchOutcome {
    /// One entry per client, in configured order.
    pub outcomes: Vec<RunOutcome>,
    pub summary: Summary,
}

/// Materialized workload. Holds the temp file open for as long as the
/// harnesses need it; dropping removes it.
enum Workload {
    Temp(NamedTempFile),
    File(PathBuf),
}

impl Workload {
    fn path(&self) -> &Path {
        match self {
            Workload::Temp(file) => file.path(),
            Workload::File(path) => path,
        }
    }
}

pub struct Orchestrator<L> {
    launcher: L,
}

impl<L: ProcessLauncher + Sync> Orchestrator<L> {
    pub fn new(launcher: L) -> Self {
        Self { launcher }
    }

    pub async fn run(&self, ctx: &BenchContext) -> Result<BenchOutcome> {
        let mut config = ctx.config.clone();
        if config.clients.is_empty() {
            return Err(RunnerError::NoClients);
        }
        for name in &config.clients {
            client_db_dir(&config.db_root, name)?;
        }
        config.harnesses_dir = std::path::absolute(&config.harnesses_dir).map_err(|e| {
            RunnerError::io(
                format!("resolve harnesses dir {}", config.harnesses_dir.display()),
                e,
            )
        })?;

        let (workload, summary) = materialize(&ctx.workload)?;
        tracing::info!(
            path = %workload.path().display(),
            operations = summary.total_operations,
            accounts = summary.accounts_created,
            contracts = summary.contracts_created,
            slots = summary.storage_slots,
            "workload ready"
        );

        let mut runners = Vec::with_capacity(config.clients.len());
        for name in &config.clients {
            let invocation = resolve_invocation(&self.launcher, &config, name).await?;
            runners.push(HarnessRunner::new(name.clone(), invocation, &self.launcher));
        }

        std::fs::create_dir_all(&config.db_root).map_err(|e| {
            RunnerError::io(format!("create db root {}", config.db_root.display()), e)
        })?;

        let spec = RunSpec {
            workload: workload.path().to_path_buf(),
            db_root: config.db_root.clone(),
            timeout: config.timeout,
        };

        let mut outcomes = Vec::with_capacity(runners.len());
        for runner in &runners {
            let span = tracing::info_span!("harness", client = runner.name());
            match runner.run(&spec).instrument(span).await {
                Ok(result) => outcomes.push(RunOutcome::Completed(result)),
                Err(e) => match config.failure_policy {
                    FailurePolicy::Abort => return Err(e),
                    FailurePolicy::Continue => {
                        tracing::error!(client = runner.name(), error = %e, "harness failed, continuing");
                        outcomes.push(RunOutcome::Failed {
                            client: runner.name().to_string(),
                            error: e.to_string(),
                        });
                    }
                },
            }
        }

        Ok(BenchOutcome { outcomes, summary })
    }
}

fn materialize(source: &WorkloadSource) -> Result<(Workload, Summary)> {
    match source {
        WorkloadSource::Generate(cfg) => {
            let mut file = tempfile::Builder::new()
                .prefix("statebench-workload-")
                .suffix(".jsonl")
                .tempfile()
                .map_err(|e| RunnerError::io("create workload file", e))?;
            let summary = Generator::new(cfg.clone())?.generate(BufWriter::new(file.as_file_mut()))?;
            Ok((Workload::Temp(file), summary))
        }
        WorkloadSource::File(path) => {
            let file = std::fs::File::open(path)
                .map_err(|e| RunnerError::io(format!("open workload {}", path.display()), e))?;
            let summary = workload::validate(std::io::BufReader::new(file))?;
            Ok((Workload::File(path.clone()), summary))
        }
    }
}
