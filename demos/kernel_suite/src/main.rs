use anyhow::{Context, Result};
use clap::Parser;
use prism_kernels::{KernelKind, KernelSuite, SuiteConfig};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Run the PrismChrono microbenchmark kernels and report their results
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Kernels to run, comma separated (default: all)
    #[arg(long, value_delimiter = ',')]
    kernels: Vec<String>,

    /// Only run the base-24 and ternary kernels
    #[arg(long, default_value_t = false)]
    ternary_only: bool,

    /// JSON suite configuration; missing fields use the reference constants
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the configured seed
    #[arg(long)]
    seed: Option<u64>,

    /// Override the configured repetitions per kernel
    #[arg(long)]
    repetitions: Option<usize>,

    /// Write the JSON report to this file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = match &args.config {
        Some(path) => SuiteConfig::from_path(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => SuiteConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(repetitions) = args.repetitions {
        config.repetitions = repetitions;
    }

    let mut kinds = if args.kernels.is_empty() {
        KernelKind::ALL.to_vec()
    } else {
        args.kernels
            .iter()
            .map(|name| name.parse::<KernelKind>())
            .collect::<Result<Vec<_>, _>>()
            .context("parse --kernels")?
    };
    if args.ternary_only {
        kinds.retain(|kind| kind.is_ternary_specific());
    }

    tracing::info!("Running {} kernel(s) with seed {}", kinds.len(), config.seed);

    let suite = KernelSuite::new(config);
    let report = suite.run(&kinds).context("run suite")?;

    println!("{:<16} {:>14} {:>12}  detail", "kernel", "value", "mean ns");
    println!("{}", "-".repeat(72));
    for run in &report.runs {
        println!(
            "{:<16} {:>14} {:>12}  {}",
            run.output.kind, run.output.value, run.mean_ns, run.output.detail
        );
    }

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        std::fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("Report written to {}", path.display());
    }

    Ok(())
}
