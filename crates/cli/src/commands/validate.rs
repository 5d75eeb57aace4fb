use super::summary_table;
use anyhow::Context;
use statebench::workload::{self, Summary};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub fn run(path: &Path) -> anyhow::Result<Summary> {
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let summary = workload::validate(BufReader::new(file))
        .with_context(|| format!("invalid workload {}", path.display()))?;

    println!("\n{} is valid", path.display());
    println!("{}", summary_table(&summary));
    Ok(summary)
}
