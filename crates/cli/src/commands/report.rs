use anyhow::Context;
use statebench::report::Report;
use statebench::RunOutcome;
use std::io::Write;
use std::path::Path;

/// Re-renders a JSON report saved by `run --json`.
pub fn run<W: Write>(path: &Path, json: bool, mut out: W) -> anyhow::Result<()> {
    let data = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let outcomes: Vec<RunOutcome> = serde_json::from_slice(&data)
        .with_context(|| format!("parse results {}", path.display()))?;

    let report = Report::new(outcomes)?;
    if json {
        report.write_json(&mut out)?;
    } else {
        report.write_markdown(&mut out)?;
    }
    out.flush()?;
    Ok(())
}
