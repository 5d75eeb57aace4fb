// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! External process capability.
//!
//! Everything the runner needs from the OS is behind [`ProcessLauncher`]:
//! spawn with arguments and environment, stdin from a file, bounded wait,
//! captured stdout/stderr and the exit status. Tests substitute canned
//! launchers to exercise the harness protocol without real binaries.

use std::ffi::OsString;
use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// One process to start.
#[derive(Clone, Debug, Default)]
pub struct LaunchSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    /// Added to the inherited environment.
    pub env: Vec<(String, String)>,
    pub cwd: Option<PathBuf>,
    /// File redirected to stdin; stdin is empty when unset.
    pub stdin: Option<PathBuf>,
    /// The process is killed once this elapses.
    pub timeout: Option<Duration>,
}

/// Captured result of a process that ran to completion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; `None` when terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn status(&self) -> String {
        match self.code {
            Some(code) => format!("exit status: {code}"),
            None => "terminated by signal".to_string(),
        }
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("spawn {}: {source}", program.display())]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("open stdin {}: {source}", path.display())]
    Stdin {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("wait for process: {0}")]
    Wait(#[source] std::io::Error),

    #[error("timed out after {0:?}")]
    TimedOut(Duration),
}

pub trait ProcessLauncher {
    fn launch(
        &self,
        spec: &LaunchSpec,
    ) -> impl Future<Output = Result<ProcessOutput, LaunchError>> + Send;
}

impl<T: ProcessLauncher + Sync + ?Sized> ProcessLauncher for &T {
    fn launch(
        &self,
        spec: &LaunchSpec,
    ) -> impl Future<Output = Result<ProcessOutput, LaunchError>> + Send {
        (**self).launch(spec)
    }
}

/// Real child processes via `tokio::process`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioLauncher;

impl ProcessLauncher for TokioLauncher {
    async fn launch(&self, spec: &LaunchSpec) -> Result<ProcessOutput, LaunchError> {
        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args)
            .envs(spec.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            // a timed-out wait drops the child, which must not outlive it
            .kill_on_drop(true);

        if let Some(dir) = &spec.cwd {
            cmd.current_dir(dir);
        }

        match &spec.stdin {
            Some(path) => {
                let file = std::fs::File::open(path).map_err(|source| LaunchError::Stdin {
                    path: path.clone(),
                    source,
                })?;
                cmd.stdin(Stdio::from(file));
            }
            None => {
                cmd.stdin(Stdio::null());
            }
        }

        let child = cmd.spawn().map_err(|source| LaunchError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

        let wait = child.wait_with_output();
        let output = match spec.timeout {
            Some(limit) => tokio::time::timeout(limit, wait)
                .await
                .map_err(|_| LaunchError::TimedOut(limit))?,
            None => wait.await,
        }
        .map_err(LaunchError::Wait)?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
