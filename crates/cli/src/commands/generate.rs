use super::{summary_table, WorkloadArgs};
use anyhow::Context;
use clap::Args;
use statebench::workload::{Generator, Summary};
use statebench::WorkloadError;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub workload: WorkloadArgs,

    /// Output file (default: stdout)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

pub fn run(args: GenerateArgs) -> anyhow::Result<Summary> {
    let mut generator = Generator::new(args.workload.to_config())?;

    let summary = match &args.output {
        Some(path) => {
            let summary = write_or_remove(path, |w| generator.generate(w))?;
            println!("Wrote {}", path.display());
            println!("{}", summary_table(&summary));
            summary
        }
        None => {
            let stdout = std::io::stdout();
            let summary = generator.generate(BufWriter::new(stdout.lock()))?;
            // stdout carries the workload
            eprintln!("{}", summary_table(&summary));
            summary
        }
    };

    Ok(summary)
}

/// Creates `path` and hands it to `write`. If `write` fails, `path` is
/// removed again: a partially written workload is never left behind.
fn write_or_remove<T>(
    path: &Path,
    write: impl FnOnce(BufWriter<File>) -> Result<T, WorkloadError>,
) -> anyhow::Result<T> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;

    match write(BufWriter::new(file)) {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(remove) = std::fs::remove_file(path) {
                tracing::warn!(
                    path = %path.display(),
                    error = %remove,
                    "could not remove partial workload"
                );
            }
            Err(e).with_context(|| format!("write {}", path.display()))
        }
    }
}
