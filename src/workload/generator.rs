// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Seeded workload generator.
//!
//! The RNG is seeded once in [`Generator::new`] and consumed in a fixed order:
//!
//! 1. per plain account: address, balance, nonce;
//! 2. one slot count per contract, drawn from the configured distribution;
//! 3. per contract: address, balance, nonce, code, then `(slot, value)` pairs.
//!
//! Changing that order changes every byte after the first affected draw.

use super::{Summary, WorkloadConfig};
use crate::error::{Result, WorkloadError};
use crate::operation::Operation;
use crate::types::{Address, Bytes, Word};
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaChaRng;
use std::io::Write;

const WEI_PER_ETH: u128 = 1_000_000_000_000_000_000;

/// Nonces are drawn from `[0, MAX_NONCE)`.
const MAX_NONCE: u64 = 100;

pub struct Generator {
    cfg: WorkloadConfig,
    rng: ChaChaRng,
}

impl Generator {
    pub fn new(cfg: WorkloadConfig) -> Result<Self> {
        cfg.check()?;
        let rng = ChaChaRng::seed_from_u64(cfg.seed);
        Ok(Self { cfg, rng })
    }

    pub fn config(&self) -> &WorkloadConfig {
        &self.cfg
    }

    /// Writes the workload to `w` as JSON lines and returns its summary.
    ///
    /// Stops at the first write or encode failure. Whatever already reached
    /// `w` at that point is not a valid workload.
    pub fn generate<W: Write>(&mut self, mut w: W) -> Result<Summary> {
        let mut summary = Summary::default();

        for _ in 0..self.cfg.num_accounts {
            let op = Operation::CreateAccount {
                address: self.random_address(),
                balance: Some(self.random_balance(1, 100)),
                nonce: self.rng.gen_range(0..MAX_NONCE),
            };
            write_op(&mut w, &op)?;
            summary.accounts_created += 1;
            summary.total_operations += 1;
        }

        let slot_counts = self.cfg.distribution.sample(
            &mut self.rng,
            self.cfg.num_contracts,
            self.cfg.min_slots,
            self.cfg.max_slots,
        );

        for num_slots in slot_counts {
            let address = self.random_address();
            let create = Operation::CreateAccount {
                address,
                balance: Some(self.random_balance(0, 100)),
                nonce: self.rng.gen_range(0..MAX_NONCE),
            };
            let code = self.random_code();

            write_op(&mut w, &create)?;
            summary.total_operations += 1;

            write_op(&mut w, &Operation::SetCode { address, code })?;
            summary.total_operations += 1;

            for _ in 0..num_slots {
                let op = Operation::SetStorage {
                    address,
                    slot: self.random_word(),
                    value: self.random_non_zero_word(),
                };
                write_op(&mut w, &op)?;
                summary.total_operations += 1;
                summary.storage_slots += 1;
            }

            summary.contracts_created += 1;
        }

        write_op(&mut w, &Operation::ComputeRoot)?;
        summary.total_operations += 1;

        w.flush()?;
        Ok(summary)
    }

    fn random_address(&mut self) -> Address {
        let mut buf = [0u8; 20];
        self.rng.fill_bytes(&mut buf);
        Address(buf)
    }

    fn random_word(&mut self) -> Word {
        let mut buf = [0u8; 32];
        self.rng.fill_bytes(&mut buf);
        Word(buf)
    }

    /// All-zero draws become `0x00..01`; a zero value would read as an unset slot.
    fn random_non_zero_word(&mut self) -> Word {
        let mut word = self.random_word();
        if word.is_zero() {
            word.0[31] = 1;
        }
        word
    }

    /// Whole-ETH balance drawn from `[min_eth, max_eth]`, in wei.
    fn random_balance(&mut self, min_eth: u64, max_eth: u64) -> Word {
        let eth = self.rng.gen_range(min_eth..=max_eth);
        Word::from_u128(eth as u128 * WEI_PER_ETH)
    }

    /// Code length is drawn from `[code_size, 2 * code_size)`.
    fn random_code(&mut self) -> Bytes {
        let base = self.cfg.code_size;
        let size = if base == 0 {
            0
        } else {
            base + self.rng.gen_range(0..base as u64) as usize
        };
        let mut buf = vec![0u8; size];
        self.rng.fill_bytes(&mut buf);
        Bytes(buf)
    }
}

fn write_op<W: Write>(w: &mut W, op: &Operation) -> Result<()> {
    serde_json::to_writer(&mut *w, op).map_err(|source| WorkloadError::Encode {
        op: op.name(),
        source,
    })?;
    w.write_all(b"\n")?;
    Ok(())
}
