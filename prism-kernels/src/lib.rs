//! # prism-kernels
//!
//! The PrismChrono microbenchmark kernels behind a single [`Kernel`] trait.
//!
//! Classic kernels (factorial, function calls, array sum, linear search,
//! insertion sort, word copy) live next to the base-24 and ternary ones so
//! [`KernelSuite`] can build, run and time any selection from one
//! [`SuiteConfig`].

pub mod arith;
pub mod config;
pub mod kernel;
pub mod memcpy;
pub mod search;
pub mod sort;
pub mod suite;
pub mod ternary;

pub use arith::{call_function_multiple_times, factorial, simple_function, sum_array};
pub use config::SuiteConfig;
pub use kernel::{Kernel, KernelError, KernelKind, KernelOutput};
pub use memcpy::word_copy;
pub use search::linear_search;
pub use sort::{first_unsorted, insertion_sort, is_sorted};
pub use suite::{KernelRun, KernelSuite, SuiteReport};
pub use ternary::random_trits;
