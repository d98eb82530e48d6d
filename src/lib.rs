//! # prism-bench
//!
//! Umbrella crate for the PrismChrono microbenchmark suite.
//!
//! - [`base24`]: fixed-width base-24 integers with overflow truncation
//! - [`ternary`]: balanced trits, ternary vote and the three-state automaton
//! - [`kernels`]: every benchmark behind the `Kernel` trait, plus the suite runner

pub use prism_base24 as base24;
pub use prism_kernels as kernels;
pub use prism_ternary as ternary;
