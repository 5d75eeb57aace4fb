// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Workload operations.
//!
//! One operation is one JSON object on one line, tagged by its `op` field:
//!
//! ```text
//! {"op":"create_account","address":"0x..","balance":"0x..","nonce":7}
//! {"op":"set_code","address":"0x..","code":"0x.."}
//! {"op":"set_storage","address":"0x..","slot":"0x..","value":"0x.."}
//! {"op":"compute_root"}
//! ```

use crate::types::{Address, Bytes, Word};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    CreateAccount {
        address: Address,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        balance: Option<Word>,
        #[serde(default, skip_serializing_if = "is_zero")]
        nonce: u64,
    },
    SetCode {
        address: Address,
        code: Bytes,
    },
    SetStorage {
        address: Address,
        slot: Word,
        value: Word,
    },
    ComputeRoot,
}

fn is_zero(n: &u64) -> bool {
    *n == 0
}

impl Operation {
    /// The wire name carried in the `op` field.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::CreateAccount { .. } => "create_account",
            Operation::SetCode { .. } => "set_code",
            Operation::SetStorage { .. } => "set_storage",
            Operation::ComputeRoot => "compute_root",
        }
    }

    /// The account this operation touches, if any.
    pub fn address(&self) -> Option<&Address> {
        match self {
            Operation::CreateAccount { address, .. }
            | Operation::SetCode { address, .. }
            | Operation::SetStorage { address, .. } => Some(address),
            Operation::ComputeRoot => None,
        }
    }

    /// Balance with the protocol default applied.
    pub fn balance_or_default(&self) -> Word {
        match self {
            Operation::CreateAccount { balance, .. } => balance.unwrap_or(Word::ZERO),
            _ => Word::ZERO,
        }
    }
}
