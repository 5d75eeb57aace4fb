// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::process::LaunchError;
use statebench::{DecodeError, WorkloadError};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("at least one client must be specified")]
    NoClients,

    #[error("invalid client name {0:?}: must be a single path component")]
    InvalidClientName(String),

    #[error("unknown client {0:?}")]
    UnknownClient(String),

    #[error("build {client}: {reason}")]
    Build { client: String, reason: String },

    #[error("build {client}: binary not found at {}", path.display())]
    MissingBinary { client: String, path: PathBuf },

    #[error("workload: {0}")]
    Workload(#[from] WorkloadError),

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("harness {client}: {source}")]
    Launch {
        client: String,
        #[source]
        source: LaunchError,
    },

    #[error("harness {client} timed out after {}s", timeout.as_secs())]
    Timeout { client: String, timeout: Duration },

    #[error("harness {client} failed: {status}\nstderr: {stderr}")]
    HarnessFailed {
        client: String,
        status: String,
        stderr: String,
    },

    #[error("parse {client} output: {source}\nstdout: {stdout}")]
    Decode {
        client: String,
        #[source]
        source: DecodeError,
        stdout: String,
    },
}

impl RunnerError {
    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        RunnerError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RunnerError>;
