//! In-memory world state.

use crate::HarnessError;
use serde::Serialize;
use statebench::types::{Address, Bytes, Word};
use statebench::Operation;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Name of the persisted state inside the database directory.
pub const STATE_FILE: &str = "state.json";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Account {
    pub balance: Word,
    pub nonce: u64,
    pub code: Bytes,
    /// Zero values are never stored.
    pub storage: BTreeMap<Word, Word>,
}

/// Operations applied so far, by kind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    pub accounts: u64,
    pub contracts: u64,
    pub slots: u64,
}

#[derive(Debug, Default)]
pub struct State {
    accounts: BTreeMap<Address, Account>,
    counters: Counters,
}

/// `set_code` or `set_storage` against an address never created.
#[derive(Debug, PartialEq, Eq)]
pub struct UnknownAccount {
    pub op: &'static str,
    pub address: Address,
}

impl UnknownAccount {
    pub fn at_line(self, line: usize) -> HarnessError {
        HarnessError::UnknownAccount {
            line,
            op: self.op,
            address: self.address.to_string(),
        }
    }
}

impl State {
    pub fn accounts(&self) -> &BTreeMap<Address, Account> {
        &self.accounts
    }

    pub fn account(&self, address: &Address) -> Option<&Account> {
        self.accounts.get(address)
    }

    pub fn counters(&self) -> Counters {
        self.counters
    }

    /// Applies one mutation. `compute_root` is a no-op here; the driver
    /// handles it.
    ///
    /// Creating an existing address replaces it with a fresh account.
    pub fn apply(&mut self, op: Operation) -> Result<(), UnknownAccount> {
        let name = op.name();
        match op {
            Operation::CreateAccount { address, balance, nonce } => {
                self.accounts.insert(
                    address,
                    Account {
                        balance: balance.unwrap_or(Word::ZERO),
                        nonce,
                        ..Default::default()
                    },
                );
                self.counters.accounts += 1;
            }
            Operation::SetCode { address, code } => {
                let account = self.existing(name, address)?;
                account.code = code;
                self.counters.contracts += 1;
            }
            Operation::SetStorage { address, slot, value } => {
                let account = self.existing(name, address)?;
                if value.is_zero() {
                    account.storage.remove(&slot);
                } else {
                    account.storage.insert(slot, value);
                }
                self.counters.slots += 1;
            }
            Operation::ComputeRoot => {}
        }
        Ok(())
    }

    fn existing(&mut self, op: &'static str, address: Address) -> Result<&mut Account, UnknownAccount> {
        self.accounts
            .get_mut(&address)
            .ok_or(UnknownAccount { op, address })
    }

    /// Writes every account as JSON to `path` and syncs it to disk.
    pub fn persist(&self, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, &self.accounts)?;
        writer.flush()?;
        let file = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }
}
