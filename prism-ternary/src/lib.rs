//! # prism-ternary
//!
//! Three-valued logic kernels for the PrismChrono benchmark suite.
//!
//! - [`Trit`]: a balanced ternary symbol (`-1`, `0`, `+1`)
//! - [`VoteTally`] / [`ternary_vote`]: simple-majority vote where abstentions never decide
//! - [`StateMachine`] / [`process_inputs`]: a three-state automaton driven by trit inputs

pub mod automaton;
pub mod trit;
pub mod vote;

pub use automaton::{process_inputs, transition, StateMachine};
pub use trit::{Trit, TritError};
pub use vote::{ternary_vote, VoteTally};
