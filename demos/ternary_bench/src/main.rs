use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use prism_ternary::{StateMachine, Trit, VoteTally};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Three-state simple-majority vote
    Vote,
    /// Three-state automaton
    Automaton,
    /// Both kernels
    Both,
}

/// Ternary logic benchmarks over seeded random trits
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
struct Args {
    /// Which kernel to run
    #[arg(long, value_enum, default_value = "both")]
    mode: Mode,

    /// Number of ballots
    #[arg(long, default_value_t = 50)]
    votes: usize,

    /// Number of automaton inputs
    #[arg(long, default_value_t = 100)]
    inputs: usize,

    /// Seed for the random trits
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Explicit comma-separated trits (-1, 0, 1) instead of random ones
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    trits: Option<Vec<i8>>,

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

    let explicit = match &args.trits {
        Some(raw) => Some(
            raw.iter()
                .map(|&v| Trit::try_from(v))
                .collect::<Result<Vec<Trit>, _>>()
                .context("parse --trits")?,
        ),
        None => None,
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut draw = |len: usize| -> Vec<Trit> {
        match &explicit {
            Some(trits) => trits.clone(),
            None => (0..len)
                .map(|_| Trit::from_i8_lossy(rng.gen_range(-1..=1)))
                .collect(),
        }
    };

    if matches!(args.mode, Mode::Vote | Mode::Both) {
        let votes = draw(args.votes);
        tracing::debug!("ballots: {}", render(&votes));

        let tally = VoteTally::from_trits(&votes);
        println!("Vote result: {}", tally.outcome().as_i8());
        println!("Positive votes: {}", tally.positive);
        println!("Negative votes: {}", tally.negative);
        println!("Abstentions: {}", tally.abstain);
    }

    if matches!(args.mode, Mode::Automaton | Mode::Both) {
        let inputs = draw(args.inputs);
        tracing::debug!("inputs: {}", render(&inputs));

        let mut machine = StateMachine::new();
        for &input in &inputs {
            let state = machine.step(input);
            tracing::trace!("{} -> {}", input, state);
        }
        println!("Final state: {}", machine.state().as_i8());
    }

    Ok(())
}

fn render(trits: &[Trit]) -> String {
    trits.iter().map(|t| t.to_string()).collect()
}
