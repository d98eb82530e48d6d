use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Every benchmark in the suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    Factorial,
    FunctionCall,
    SumArray,
    LinearSearch,
    InsertionSort,
    Memcpy,
    Base24,
    TernaryVote,
    SpecialStates,
}

impl KernelKind {
    pub const ALL: [KernelKind; 9] = [
        KernelKind::Factorial,
        KernelKind::FunctionCall,
        KernelKind::SumArray,
        KernelKind::LinearSearch,
        KernelKind::InsertionSort,
        KernelKind::Memcpy,
        KernelKind::Base24,
        KernelKind::TernaryVote,
        KernelKind::SpecialStates,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KernelKind::Factorial => "factorial",
            KernelKind::FunctionCall => "function_call",
            KernelKind::SumArray => "sum_array",
            KernelKind::LinearSearch => "linear_search",
            KernelKind::InsertionSort => "insertion_sort",
            KernelKind::Memcpy => "memcpy",
            KernelKind::Base24 => "base24",
            KernelKind::TernaryVote => "ternary_vote",
            KernelKind::SpecialStates => "special_states",
        }
    }

    /// Kernels written to exercise base-24 or three-valued logic
    pub fn is_ternary_specific(&self) -> bool {
        matches!(
            self,
            KernelKind::Base24 | KernelKind::TernaryVote | KernelKind::SpecialStates
        )
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for KernelKind {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KernelKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| KernelError::UnknownKernel(s.to_string()))
    }
}

#[derive(Error, Debug)]
pub enum KernelError {
    #[error("{0}! overflows a 64-bit accumulator")]
    FactorialOverflow(u32),
    #[error("Length mismatch: destination {dest} vs source {src}")]
    LengthMismatch { dest: usize, src: usize },
    #[error("Value {0} not found")]
    NotFound(i64),
    #[error("Array is not sorted at index {0}")]
    NotSorted(usize),
    #[error("Copy verification failed at word {0}")]
    CopyMismatch(usize),
    #[error("Unknown kernel: {0}")]
    UnknownKernel(String),
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result line of one kernel run, kept for manual verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KernelOutput {
    pub kind: KernelKind,
    pub value: i64,
    pub detail: String,
}

impl KernelOutput {
    pub fn new(kind: KernelKind, value: i64, detail: impl Into<String>) -> Self {
        Self {
            kind,
            value,
            detail: detail.into(),
        }
    }
}

/// A benchmark body with its inputs already prepared.
///
/// `run` must leave the prepared inputs untouched so it can be repeated.
pub trait Kernel {
    fn kind(&self) -> KernelKind;
    fn run(&mut self) -> Result<KernelOutput, KernelError>;
}
