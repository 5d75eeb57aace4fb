use super::WorkloadArgs;
use anyhow::Context;
use clap::Args;
use statebench::report::Report;
use statebench_runner::{
    BenchContext, FailurePolicy, Orchestrator, ProcessLauncher, RunConfig, TokioLauncher,
    WorkloadSource,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub workload: WorkloadArgs,

    /// Clients to benchmark, in order (e.g. geth,reth,erigon)
    #[arg(long, value_delimiter = ',')]
    pub clients: Vec<String>,

    /// Base directory for client databases
    #[arg(long, default_value = "tmp")]
    pub db_dir: PathBuf,

    /// Path to a pre-generated workload file (skips generation)
    #[arg(long = "workload")]
    pub workload_file: Option<PathBuf>,

    /// Path to the harnesses directory
    #[arg(long, default_value = "harnesses")]
    pub harnesses_dir: PathBuf,

    /// Skip building harness binaries
    #[arg(long)]
    pub skip_build: bool,

    /// Use a prebuilt harness binary for a client
    #[arg(long = "harness", value_name = "NAME=PATH", value_parser = parse_harness)]
    pub harnesses: Vec<(String, PathBuf)>,

    /// Per-harness timeout in seconds (0 = no timeout)
    #[arg(long, default_value_t = 1800)]
    pub timeout: u64,

    /// Keep running the remaining clients when one fails and report it as failed
    #[arg(long)]
    pub keep_going: bool,

    /// Output results as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

fn parse_harness(s: &str) -> Result<(String, PathBuf), String> {
    match s.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(format!("expected NAME=PATH, got {s:?}")),
    }
}

impl RunArgs {
    pub fn context(&self) -> BenchContext {
        let workload = match &self.workload_file {
            Some(path) => WorkloadSource::File(path.clone()),
            None => WorkloadSource::Generate(self.workload.to_config()),
        };

        let config = RunConfig {
            clients: self.clients.clone(),
            db_root: self.db_dir.clone(),
            harnesses_dir: self.harnesses_dir.clone(),
            timeout: (self.timeout > 0).then(|| Duration::from_secs(self.timeout)),
            skip_build: self.skip_build,
            failure_policy: if self.keep_going {
                FailurePolicy::Continue
            } else {
                FailurePolicy::Abort
            },
            binary_overrides: self.harnesses.iter().cloned().collect(),
        };

        BenchContext { config, workload }
    }
}

pub async fn run(args: RunArgs) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    execute(&args, TokioLauncher, stdout.lock()).await
}

/// Runs the benchmark with `launcher` and writes the report to `out`.
pub async fn execute<L, W>(args: &RunArgs, launcher: L, mut out: W) -> anyhow::Result<()>
where
    L: ProcessLauncher + Sync,
    W: Write,
{
    let ctx = args.context();
    tracing::info!(clients = ?ctx.config.clients, "starting benchmark");

    let outcome = Orchestrator::new(launcher)
        .run(&ctx)
        .await
        .context("benchmark failed")?;

    let report = Report::new(outcome.outcomes).context("build report")?;
    if args.json {
        report.write_json(&mut out)?;
    } else {
        report.write_markdown(&mut out)?;
    }
    out.flush()?;

    if !report.is_complete() {
        tracing::warn!("some clients failed; see the report for details");
    }
    tracing::info!("benchmark complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_harness() {
        assert_eq!(
            parse_harness("geth=/opt/geth-harness").unwrap(),
            ("geth".to_string(), PathBuf::from("/opt/geth-harness"))
        );
        assert!(parse_harness("geth").is_err());
        assert!(parse_harness("=/x").is_err());
        assert!(parse_harness("geth=").is_err());
    }
}
