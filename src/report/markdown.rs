//! Markdown rendering.

use super::format::{format_bytes, format_ms, format_speedup};
use super::{Report, RootAgreement};
use crate::error::ReportError;
use crate::result::RunOutcome;
use comfy_table::presets::ASCII_MARKDOWN;
use comfy_table::Table;
use std::io::Write;

const FAILED: &str = "failed";

pub fn write<W: Write>(report: &Report, mut w: W) -> Result<(), ReportError> {
    writeln!(w, "## Benchmark Results")?;
    writeln!(w)?;

    write_agreement(report, &mut w)?;
    writeln!(w)?;

    writeln!(w, "{}", performance_table(report))?;
    writeln!(w)?;
    writeln!(w, "{}", counts_table(report))?;

    if !report.is_complete() {
        writeln!(w)?;
        writeln!(w, "### Failed")?;
        writeln!(w)?;
        for (client, error) in report.failures() {
            // first line only; full stderr goes to the log
            let headline = error.lines().next().unwrap_or_default();
            writeln!(w, "  - {client}: {headline}")?;
        }
    }

    Ok(())
}

fn write_agreement<W: Write>(report: &Report, w: &mut W) -> Result<(), ReportError> {
    let agreement = report.agreement();

    if !report.is_complete() {
        let failed = report.failures().count();
        let total = report.outcomes().len();
        let status = if failed == total {
            "no clients completed"
        } else if agreement.is_match() {
            "completed clients match"
        } else {
            "completed clients disagree"
        };
        writeln!(
            w,
            "State roots: **INCOMPLETE** ({failed} of {total} clients failed; {status})"
        )?;
    } else if agreement.is_match() {
        writeln!(w, "State roots: **all match**")?;
    } else {
        writeln!(w, "State roots: **MISMATCH**")?;
    }

    if let RootAgreement::Mismatch(roots) = agreement {
        for (client, root) in roots {
            writeln!(w, "  - {client}: {root}")?;
        }
    }

    Ok(())
}

fn performance_table(report: &Report) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_MARKDOWN).set_header(vec![
        "Client",
        "Elapsed",
        "Trie Time",
        "DB Write",
        "Peak Mem",
        "DB Size",
        "Speedup",
    ]);

    let baseline = report.baseline_ms();
    for outcome in report.outcomes() {
        match outcome {
            RunOutcome::Completed(r) => {
                table.add_row(vec![
                    r.client.clone(),
                    format_ms(r.elapsed_ms),
                    format_ms(r.trie_time_ms),
                    format_ms(r.db_write_time_ms),
                    format_bytes(r.peak_memory_bytes),
                    format_bytes(r.db_size_bytes),
                    format_speedup(super::speedup(r.elapsed_ms, baseline)),
                ]);
            }
            RunOutcome::Failed { client, .. } => {
                table.add_row(vec![
                    client.clone(),
                    FAILED.to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                    "-".to_string(),
                ]);
            }
        }
    }
    table
}

fn counts_table(report: &Report) -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_MARKDOWN)
        .set_header(vec!["Client", "Accounts", "Contracts", "Storage Slots"]);

    for r in report.completed() {
        table.add_row(vec![
            r.client.clone(),
            r.accounts_created.to_string(),
            r.contracts_created.to_string(),
            r.storage_slots.to_string(),
        ]);
    }
    table
}
