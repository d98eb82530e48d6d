use crate::kernel::{Kernel, KernelError, KernelKind, KernelOutput};
use prism_base24::{chain, Base24Number};
use prism_ternary::{process_inputs, Trit, VoteTally};
use rand::Rng;

/// `len` trits drawn uniformly from `{-1, 0, 1}`
pub fn random_trits<R: Rng>(len: usize, rng: &mut R) -> Vec<Trit> {
    (0..len)
        .map(|_| Trit::from_i8_lossy(rng.gen_range(-1..=1)))
        .collect()
}

/// Chained base-24 add/multiply feedback loop
pub struct Base24Kernel {
    pub a: u32,
    pub b: u32,
    pub iterations: usize,
}

impl Kernel for Base24Kernel {
    fn kind(&self) -> KernelKind {
        KernelKind::Base24
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let out = chain(
            Base24Number::from_u32(self.a),
            Base24Number::from_u32(self.b),
            self.iterations,
        );
        let sum = out.sum.to_u32();
        let product = out.product.to_u32();
        Ok(KernelOutput::new(
            self.kind(),
            i64::from(sum),
            format!("final addition: {}, final multiplication: {}", sum, product),
        ))
    }
}

pub struct TernaryVoteKernel {
    pub votes: Vec<Trit>,
}

impl Kernel for TernaryVoteKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::TernaryVote
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let tally = VoteTally::from_trits(&self.votes);
        let outcome = tally.outcome();
        Ok(KernelOutput::new(
            self.kind(),
            i64::from(outcome.as_i8()),
            format!(
                "vote result: {} (positive {}, negative {}, abstain {})",
                outcome.as_i8(),
                tally.positive,
                tally.negative,
                tally.abstain
            ),
        ))
    }
}

pub struct SpecialStatesKernel {
    pub inputs: Vec<Trit>,
}

impl Kernel for SpecialStatesKernel {
    fn kind(&self) -> KernelKind {
        KernelKind::SpecialStates
    }

    fn run(&mut self) -> Result<KernelOutput, KernelError> {
        let state = process_inputs(&self.inputs);
        Ok(KernelOutput::new(
            self.kind(),
            i64::from(state.as_i8()),
            format!("final state: {}", state.as_i8()),
        ))
    }
}
