//! Structural checks for workload files.
//!
//! Generated workloads satisfy these by construction; hand-written or external
//! files are checked before any harness sees them.

use super::Summary;
use crate::error::{Result, WorkloadError};
use crate::operation::Operation;
use crate::types::Address;
use std::collections::HashMap;
use std::io::BufRead;

/// Reads a workload and verifies that:
/// - every line is one well-formed operation,
/// - `compute_root` appears exactly once, on the last line,
/// - `set_code` and `set_storage` only reference addresses created earlier,
/// - no address is created twice.
///
/// Returns the summary recomputed from the stream.
pub fn validate<R: BufRead>(reader: R) -> Result<Summary> {
    let mut summary = Summary::default();
    // address -> received code
    let mut created: HashMap<Address, bool> = HashMap::new();
    let mut terminated_at: Option<usize> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line?;

        if let Some(root_line) = terminated_at {
            return Err(malformed(
                line_no,
                format!("operation after compute_root on line {root_line}"),
            ));
        }

        let op: Operation = serde_json::from_str(&line)
            .map_err(|e| malformed(line_no, format!("invalid operation: {e}")))?;
        summary.total_operations += 1;

        match op {
            Operation::CreateAccount { address, .. } => {
                if created.insert(address, false).is_some() {
                    return Err(malformed(line_no, format!("account {address} created twice")));
                }
            }
            Operation::SetCode { address, .. } => match created.get_mut(&address) {
                Some(has_code) => *has_code = true,
                None => return Err(unknown_account(line_no, "set_code", &address)),
            },
            Operation::SetStorage { address, .. } => {
                if !created.contains_key(&address) {
                    return Err(unknown_account(line_no, "set_storage", &address));
                }
                summary.storage_slots += 1;
            }
            Operation::ComputeRoot => terminated_at = Some(line_no),
        }
    }

    if terminated_at.is_none() {
        return Err(malformed(
            summary.total_operations + 1,
            "end of input without compute_root".to_string(),
        ));
    }

    let contracts = created.values().filter(|has_code| **has_code).count();
    summary.contracts_created = contracts;
    summary.accounts_created = created.len() - contracts;

    Ok(summary)
}

fn malformed(line: usize, reason: String) -> WorkloadError {
    WorkloadError::Malformed { line, reason }
}

fn unknown_account(line: usize, op: &str, address: &Address) -> WorkloadError {
    malformed(line, format!("{op} references unknown account {address}"))
}
