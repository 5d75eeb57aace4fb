// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! One harness run: fresh database directory, workload on stdin, one JSON
//! result on stdout.

use crate::client::Invocation;
use crate::errors::{Result, RunnerError};
use crate::process::{LaunchError, LaunchSpec, ProcessLauncher};
use statebench::BenchResult;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

/// Inputs shared by every harness in a run.
#[derive(Clone, Debug)]
pub struct RunSpec {
    pub workload: PathBuf,
    /// The harness writes into `<db_root>/<name>`.
    pub db_root: PathBuf,
    pub timeout: Option<Duration>,
}

pub struct HarnessRunner<L> {
    name: String,
    invocation: Invocation,
    launcher: L,
}

impl<L: ProcessLauncher> HarnessRunner<L> {
    pub fn new(name: impl Into<String>, invocation: Invocation, launcher: L) -> Self {
        Self {
            name: name.into(),
            invocation,
            launcher,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub async fn run(&self, spec: &RunSpec) -> Result<BenchResult> {
        let db_dir = client_db_dir(&spec.db_root, &self.name)?;
        debug_assert!(db_dir.starts_with(&spec.db_root));
        reset_dir(&db_dir)?;

        let mut args = self.invocation.args.clone();
        args.push(OsString::from("--db"));
        args.push(db_dir.clone().into_os_string());

        let launch = LaunchSpec {
            program: self.invocation.program.clone(),
            args,
            env: self.invocation.env.clone(),
            cwd: None,
            stdin: Some(spec.workload.clone()),
            timeout: spec.timeout,
        };

        tracing::info!(
            binary = %launch.program.display(),
            db_dir = %db_dir.display(),
            "starting harness"
        );

        let started = Instant::now();
        let output = self.launcher.launch(&launch).await.map_err(|e| match e {
            LaunchError::TimedOut(timeout) => RunnerError::Timeout {
                client: self.name.clone(),
                timeout,
            },
            source => RunnerError::Launch {
                client: self.name.clone(),
                source,
            },
        })?;

        if !output.success() {
            return Err(RunnerError::HarnessFailed {
                client: self.name.clone(),
                status: output.status(),
                stderr: output.stderr_lossy(),
            });
        }

        tracing::info!(wall_time_ms = started.elapsed().as_millis() as u64, "harness finished");

        let mut result = BenchResult::from_harness_output(&self.name, &output.stdout).map_err(
            |source| RunnerError::Decode {
                client: self.name.clone(),
                source,
                stdout: output.stdout_lossy(),
            },
        )?;

        result.db_size_bytes = match dir_size(&db_dir) {
            Ok(size) => size,
            Err(e) => {
                tracing::warn!(error = %e, "failed to measure db size");
                0
            }
        };

        Ok(result)
    }
}

/// `<db_root>/<name>`. The name must be one plain path component, so the
/// directory can never land outside `db_root`.
pub fn client_db_dir(db_root: &Path, name: &str) -> Result<PathBuf> {
    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) => Ok(db_root.join(part)),
        _ => Err(RunnerError::InvalidClientName(name.to_string())),
    }
}

fn reset_dir(dir: &Path) -> Result<()> {
    match std::fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(RunnerError::io(format!("clean db dir {}", dir.display()), e)),
    }
    std::fs::create_dir_all(dir)
        .map_err(|e| RunnerError::io(format!("create db dir {}", dir.display()), e))
}

/// Total size of the regular files under `dir`. Symlinks are not followed.
pub fn dir_size(dir: &Path) -> std::io::Result<u64> {
    let mut total = 0;
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            total += dir_size(&entry.path())?;
        } else if file_type.is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
