// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkloadError {
    #[error("Invalid workload config: {0}")]
    InvalidConfig(String),

    #[error("Encode {op}: {source}")]
    Encode {
        op: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("no results to report")]
    Empty,

    #[error("JSON encode failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
#[error("decode harness output: {0}")]
pub struct DecodeError(#[from] pub serde_json::Error);

/// Error returned when a hex field cannot be decoded.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HexError {
    #[error("missing 0x prefix")]
    MissingPrefix,
    #[error("invalid hex: {0}")]
    Invalid(#[from] hex::FromHexError),
    #[error("expected at most {max} bytes, found {found}")]
    TooLong { max: usize, found: usize },
    #[error("expected exactly {expected} bytes, found {found}")]
    WrongLength { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, WorkloadError>;
