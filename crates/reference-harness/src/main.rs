use anyhow::Context;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "reference-harness")]
#[command(about = "Reference statebench harness: workload on stdin, one JSON result on stdout", long_about = None)]
struct Args {
    /// Writable database directory owned by this run
    #[arg(long)]
    db: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let started = Instant::now();
    let args = Args::parse();

    let stdin = std::io::stdin();
    let result = reference_harness::run(stdin.lock(), &args.db, started)
        .context("reference harness failed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer(&mut out, &result).context("write result")?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
