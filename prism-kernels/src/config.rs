use crate::kernel::KernelError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Inputs for every kernel in the suite.
///
/// Defaults reproduce the reference benchmark constants. Missing JSON
/// fields fall back to those defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuiteConfig {
    /// Seed for every randomized input
    pub seed: u64,
    /// Timed runs per kernel
    pub repetitions: usize,

    pub factorial_n: u32,

    pub call_a: i64,
    pub call_b: i64,
    pub call_count: usize,

    /// Length of the sum, search, sort and copy arrays
    pub array_size: usize,
    pub search_value: i64,
    /// Sort values are drawn from `[0, sort_bound)`
    pub sort_bound: i64,

    pub base24_a: u32,
    pub base24_b: u32,
    pub base24_iterations: usize,

    pub vote_size: usize,
    pub automaton_inputs: usize,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            repetitions: 1,
            factorial_n: 10,
            call_a: 5,
            call_b: 10,
            call_count: 1000,
            array_size: 100,
            search_value: 42,
            sort_bound: 1000,
            base24_a: 42,
            base24_b: 24,
            base24_iterations: 1000,
            vote_size: 50,
            automaton_inputs: 100,
        }
    }
}

impl SuiteConfig {
    pub fn from_json(json: &str) -> Result<Self, KernelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, KernelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_constants() {
        let config = SuiteConfig::default();
        assert_eq!(config.array_size, 100);
        assert_eq!(config.factorial_n, 10);
        assert_eq!(config.base24_iterations, 1000);
        assert_eq!(config.vote_size, 50);
        assert_eq!(config.automaton_inputs, 100);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = SuiteConfig::from_json(r#"{ "seed": 7, "array_size": 16 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.array_size, 16);
        assert_eq!(config.search_value, 42);
        assert_eq!(config.base24_a, 42);
    }

    #[test]
    fn test_invalid_json() {
        let err = SuiteConfig::from_json(r#"{ "seed": "seven" }"#).unwrap_err();
        assert!(matches!(err, KernelError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SuiteConfig::from_path("/nonexistent/prism-suite.json").unwrap_err();
        assert!(matches!(err, KernelError::Io(_)));
    }
}
