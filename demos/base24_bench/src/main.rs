use anyhow::Result;
use clap::Parser;
use prism_base24::{chain, Base24Number};
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Chained base-24 addition and multiplication benchmark
///
/// Every iteration computes a + b and a * b, then feeds both results back in
/// as the next operands. Overflow past eight base-24 digits is truncated.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// Number of chained iterations
    #[arg(long, default_value_t = 1000)]
    iterations: usize,

    /// Initial left operand
    #[arg(long, default_value_t = 42)]
    a: u32,

    /// Initial right operand
    #[arg(long, default_value_t = 24)]
    b: u32,

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

    let a = Base24Number::from_u32(args.a);
    let b = Base24Number::from_u32(args.b);
    tracing::debug!("a = {} ({}), b = {} ({})", args.a, a, args.b, b);

    let start = Instant::now();
    let out = chain(a, b, args.iterations);
    let elapsed = start.elapsed();

    tracing::info!(
        "{} iterations in {:.3} ms",
        args.iterations,
        elapsed.as_secs_f64() * 1e3
    );
    tracing::debug!("final sum digits {}, product digits {}", out.sum, out.product);

    println!("Final addition result: {}", out.sum.to_u32());
    println!("Final multiplication result: {}", out.product.to_u32());

    Ok(())
}
