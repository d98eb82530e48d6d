use crate::arith::{FactorialKernel, FunctionCallKernel, SumArrayKernel};
use crate::config::SuiteConfig;
use crate::kernel::{Kernel, KernelError, KernelKind, KernelOutput};
use crate::memcpy::MemcpyKernel;
use crate::search::LinearSearchKernel;
use crate::sort::InsertionSortKernel;
use crate::ternary::{random_trits, Base24Kernel, SpecialStatesKernel, TernaryVoteKernel};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info};

/// Timing and output of one kernel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelRun {
    pub output: KernelOutput,
    pub repetitions: usize,
    pub total_ns: u64,
    pub mean_ns: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub seed: u64,
    pub runs: Vec<KernelRun>,
}

impl SuiteReport {
    pub fn get(&self, kind: KernelKind) -> Option<&KernelRun> {
        self.runs.iter().find(|run| run.output.kind == kind)
    }

    pub fn total_ns(&self) -> u64 {
        self.runs.iter().map(|run| run.total_ns).sum()
    }
}

/// Builds kernels from a [`SuiteConfig`] and times them.
///
/// Each kernel draws its random inputs from its own RNG seeded with
/// `seed + kind index`, so a kernel sees the same inputs whatever else runs.
pub struct KernelSuite {
    config: SuiteConfig,
}

impl KernelSuite {
    pub fn new(config: SuiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    pub fn build(&self, kind: KernelKind) -> Box<dyn Kernel> {
        let cfg = &self.config;
        let mut rng = StdRng::seed_from_u64(cfg.seed.wrapping_add(kind as u64));

        match kind {
            KernelKind::Factorial => Box::new(FactorialKernel { n: cfg.factorial_n }),
            KernelKind::FunctionCall => Box::new(FunctionCallKernel {
                a: cfg.call_a,
                b: cfg.call_b,
                count: cfg.call_count,
            }),
            KernelKind::SumArray => Box::new(SumArrayKernel::sequential(cfg.array_size)),
            KernelKind::LinearSearch => Box::new(LinearSearchKernel::planted(
                cfg.array_size,
                cfg.search_value,
                &mut rng,
            )),
            KernelKind::InsertionSort => Box::new(InsertionSortKernel::random(
                cfg.array_size,
                cfg.sort_bound,
                &mut rng,
            )),
            KernelKind::Memcpy => Box::new(MemcpyKernel::sequential(cfg.array_size)),
            KernelKind::Base24 => Box::new(Base24Kernel {
                a: cfg.base24_a,
                b: cfg.base24_b,
                iterations: cfg.base24_iterations,
            }),
            KernelKind::TernaryVote => Box::new(TernaryVoteKernel {
                votes: random_trits(cfg.vote_size, &mut rng),
            }),
            KernelKind::SpecialStates => Box::new(SpecialStatesKernel {
                inputs: random_trits(cfg.automaton_inputs, &mut rng),
            }),
        }
    }

    /// Run the selected kernels in order; stops at the first failing kernel
    pub fn run(&self, kinds: &[KernelKind]) -> Result<SuiteReport, KernelError> {
        let repetitions = self.config.repetitions.max(1);
        let mut runs = Vec::with_capacity(kinds.len());

        for &kind in kinds {
            let mut kernel = self.build(kind);

            let start = Instant::now();
            let mut output = kernel.run()?;
            for _ in 1..repetitions {
                output = kernel.run()?;
            }
            let total_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);

            debug!(
                kernel = %kind,
                value = output.value,
                total_ns,
                "{}",
                output.detail
            );

            runs.push(KernelRun {
                output,
                repetitions,
                total_ns,
                mean_ns: total_ns / repetitions as u64,
            });
        }

        let report = SuiteReport {
            seed: self.config.seed,
            runs,
        };
        info!(
            kernels = report.runs.len(),
            total_ns = report.total_ns(),
            "Suite complete"
        );
        Ok(report)
    }

    pub fn run_all(&self) -> Result<SuiteReport, KernelError> {
        self.run(&KernelKind::ALL)
    }
}

impl Default for KernelSuite {
    fn default() -> Self {
        Self::new(SuiteConfig::default())
    }
}
