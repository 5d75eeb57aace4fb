// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Cross-client comparison.
//!
//! A [`Report`] is built from the outcomes of one benchmark run, all produced
//! from the same workload file. It answers two questions: do the clients agree
//! on the state root, and how fast was each one relative to the fastest.

pub mod format;
pub mod markdown;

use crate::error::ReportError;
use crate::result::{BenchResult, RunOutcome};
use std::io::Write;

/// Outcome of the state-root agreement check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RootAgreement {
    Match,
    /// Every `(client, state_root)` pair, in report order.
    Mismatch(Vec<(String, String)>),
}

impl RootAgreement {
    /// Exact string equality across all results. Fewer than two results
    /// always match.
    pub fn check<'a, I>(results: I) -> Self
    where
        I: IntoIterator<Item = &'a BenchResult>,
    {
        let results: Vec<&BenchResult> = results.into_iter().collect();
        if results.len() < 2 {
            return RootAgreement::Match;
        }

        let first = &results[0].state_root;
        if results.iter().all(|r| &r.state_root == first) {
            RootAgreement::Match
        } else {
            RootAgreement::Mismatch(
                results
                    .iter()
                    .map(|r| (r.client.clone(), r.state_root.clone()))
                    .collect(),
            )
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, RootAgreement::Match)
    }
}

/// Fastest strictly positive elapsed time, if any.
pub fn baseline_ms<'a, I>(results: I) -> Option<u64>
where
    I: IntoIterator<Item = &'a BenchResult>,
{
    results
        .into_iter()
        .map(|r| r.elapsed_ms)
        .filter(|ms| *ms > 0)
        .min()
}

/// `elapsed / baseline`; 1.0 when either side is zero or there is no baseline.
pub fn speedup(elapsed_ms: u64, baseline: Option<u64>) -> f64 {
    match baseline {
        Some(base) if base > 0 && elapsed_ms > 0 => elapsed_ms as f64 / base as f64,
        _ => 1.0,
    }
}

pub struct Report {
    outcomes: Vec<RunOutcome>,
}

impl Report {
    /// Fails on an empty collection: a report needs at least one data point.
    pub fn new(outcomes: Vec<RunOutcome>) -> Result<Self, ReportError> {
        if outcomes.is_empty() {
            return Err(ReportError::Empty);
        }
        Ok(Self { outcomes })
    }

    pub fn from_results(results: Vec<BenchResult>) -> Result<Self, ReportError> {
        Self::new(results.into_iter().map(RunOutcome::Completed).collect())
    }

    pub fn outcomes(&self) -> &[RunOutcome] {
        &self.outcomes
    }

    pub fn completed(&self) -> impl Iterator<Item = &BenchResult> {
        self.outcomes.iter().filter_map(RunOutcome::completed)
    }

    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            RunOutcome::Failed { client, error } => Some((client.as_str(), error.as_str())),
            RunOutcome::Completed(_) => None,
        })
    }

    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }

    /// Agreement among completed results.
    pub fn agreement(&self) -> RootAgreement {
        RootAgreement::check(self.completed())
    }

    pub fn baseline_ms(&self) -> Option<u64> {
        baseline_ms(self.completed())
    }

    pub fn speedup(&self, result: &BenchResult) -> f64 {
        speedup(result.elapsed_ms, self.baseline_ms())
    }

    /// Markdown tables with display-rounded values.
    pub fn write_markdown<W: Write>(&self, w: W) -> Result<(), ReportError> {
        markdown::write(self, w)
    }

    /// Pretty-printed JSON array carrying every field unmodified.
    pub fn write_json<W: Write>(&self, mut w: W) -> Result<(), ReportError> {
        serde_json::to_writer_pretty(&mut w, &self.outcomes)?;
        w.write_all(b"\n")?;
        Ok(())
    }
}

/// Writes the markdown comparison for a complete set of results.
pub fn generate<W: Write>(w: W, results: &[BenchResult]) -> Result<(), ReportError> {
    Report::from_results(results.to_vec())?.write_markdown(w)
}

/// Writes `results` as a JSON array.
pub fn generate_json<W: Write>(w: W, results: &[BenchResult]) -> Result<(), ReportError> {
    Report::from_results(results.to_vec())?.write_json(w)
}
