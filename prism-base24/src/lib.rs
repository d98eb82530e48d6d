//! # prism-base24
//!
//! Fixed-width base-24 integer arithmetic for the PrismChrono benchmark suite.
//!
//! This crate provides [`Base24Number`]: eight base-24 digits (least-significant
//! first) plus an active digit count, stored inline with no allocation.
//! Addition and multiplication silently truncate anything that would need a
//! ninth digit, so every result is the exact value modulo `24^8`.
//!
//! The only dependency is `thiserror`, for [`Base24Error`].

pub mod base24;
pub mod chain;
pub mod ops;

pub use base24::{Base24Error, Base24Number, BASE, MAX_VALUE, WIDTH};
pub use chain::{chain, ChainOutcome};
