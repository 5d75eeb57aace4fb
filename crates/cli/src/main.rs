use clap::{Parser, Subcommand};
use statebench_cli::commands::{generate, report, run, validate};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statebench")]
#[command(about = "Cross-client state-root benchmark: one deterministic workload, every client, compared", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workload and run it through each client's harness, comparing
    /// state roots and performance.
    Run(run::RunArgs),
    /// Write a deterministic workload file without running anything
    Generate(generate::GenerateArgs),
    /// Check a workload file and print its summary
    Validate {
        path: PathBuf,
    },
    /// Re-render results saved with `run --json`
    Report {
        path: PathBuf,

        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    statebench_runner::telemetry::init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run::run(args).await,
        Commands::Generate(args) => generate::run(args).map(|_| ()),
        Commands::Validate { path } => validate::run(&path).map(|_| ()),
        Commands::Report { path, json } => report::run(&path, json, std::io::stdout().lock()),
    }
}
