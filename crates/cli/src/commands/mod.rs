pub mod generate;
pub mod report;
pub mod run;
pub mod validate;

use clap::Args;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use statebench::workload::{Distribution, Summary, WorkloadConfig};
use std::time::{SystemTime, UNIX_EPOCH};

/// Workload generation flags shared by `run` and `generate`.
#[derive(Args, Clone, Debug)]
pub struct WorkloadArgs {
    /// Number of EOA accounts to create
    #[arg(long, default_value_t = 1000)]
    pub accounts: usize,

    /// Number of contracts to create
    #[arg(long, default_value_t = 100)]
    pub contracts: usize,

    /// Minimum storage slots per contract
    #[arg(long, default_value_t = 1)]
    pub min_slots: usize,

    /// Maximum storage slots per contract
    #[arg(long, default_value_t = 10000)]
    pub max_slots: usize,

    /// Storage slot distribution: power-law, uniform, exponential
    #[arg(long, default_value = "power-law")]
    pub distribution: String,

    /// Random seed (0 = use current time)
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Average contract code size in bytes
    #[arg(long, default_value_t = 1024)]
    pub code_size: usize,
}

impl WorkloadArgs {
    pub fn to_config(&self) -> WorkloadConfig {
        if self.distribution.parse::<Distribution>().is_err() {
            tracing::warn!(
                distribution = %self.distribution,
                "unknown distribution, falling back to uniform"
            );
        }

        let seed = if self.seed == 0 { time_seed() } else { self.seed };
        tracing::info!(seed, "workload seed");

        WorkloadConfig {
            num_accounts: self.accounts,
            num_contracts: self.contracts,
            min_slots: self.min_slots,
            max_slots: self.max_slots,
            distribution: Distribution::from_selector(&self.distribution),
            seed,
            code_size: self.code_size,
        }
    }
}

fn time_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
        .max(1)
}

pub(crate) fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Operations", "Accounts", "Contracts", "Storage Slots"]);
    table.add_row(vec![
        summary.total_operations.to_string(),
        summary.accounts_created.to_string(),
        summary.contracts_created.to_string(),
        summary.storage_slots.to_string(),
    ]);
    table
}
