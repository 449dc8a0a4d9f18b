//! Configuration system for backtrack searches.
//!
//! Load search configuration from TOML or YAML files to choose the problem,
//! its size, a solution limit and an optional resume point without code
//! changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use backtrack_config::{ProblemKind, SearchConfig};
//!
//! let config = SearchConfig::from_toml_str(r#"
//!     problem = "n_queens"
//!     size = 6
//!     solution_limit = 2
//!
//!     [seed]
//!     values = [1]
//! "#).unwrap();
//!
//! assert_eq!(config.problem, ProblemKind::NQueens);
//! assert_eq!(config.size, 6);
//! assert_eq!(config.seed_values(), &[1]);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use backtrack_config::SearchConfig;
//!
//! let config = SearchConfig::load("search.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::fmt;
use std::path::Path;

use backtrack_core::MAX_COUNT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board size used when no size is configured.
pub const DEFAULT_SIZE: usize = 8;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main search configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Which standard problem to enumerate.
    #[serde(default)]
    pub problem: ProblemKind,

    /// Number of positions, which is also the size of the value domain.
    #[serde(default = "default_size")]
    pub size: usize,

    /// Stop after this many solutions.
    #[serde(default)]
    pub solution_limit: Option<u64>,

    /// Resume point for the enumeration.
    #[serde(default)]
    pub seed: Option<SeedConfig>,
}

fn default_size() -> usize {
    DEFAULT_SIZE
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            problem: ProblemKind::default(),
            size: DEFAULT_SIZE,
            solution_limit: None,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the problem kind.
    pub fn with_problem(mut self, problem: ProblemKind) -> Self {
        self.problem = problem;
        self
    }

    /// Sets the problem size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the solution limit.
    pub fn with_solution_limit(mut self, limit: u64) -> Self {
        self.solution_limit = Some(limit);
        self
    }

    /// Sets the seed prefix.
    pub fn with_seed(mut self, values: Vec<i32>) -> Self {
        self.seed = Some(SeedConfig { values });
        self
    }

    /// Returns the seed prefix, empty when none is configured.
    pub fn seed_values(&self) -> &[i32] {
        self.seed.as_ref().map(|s| s.values.as_slice()).unwrap_or(&[])
    }

    /// Checks the configuration against the engine's domain bounds.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 || self.size > MAX_COUNT {
            return Err(ConfigError::Invalid(format!(
                "size must be in [1, {MAX_COUNT}], got {}",
                self.size
            )));
        }
        if self.solution_limit == Some(0) {
            return Err(ConfigError::Invalid(
                "solution_limit must be positive when set".to_string(),
            ));
        }
        let seed = self.seed_values();
        if seed.len() > self.size {
            return Err(ConfigError::Invalid(format!(
                "seed has {} values but size is {}",
                seed.len(),
                self.size
            )));
        }
        if let Some((index, value)) = seed
            .iter()
            .enumerate()
            .find(|(_, &v)| v < 0 || v as usize >= self.size)
        {
            return Err(ConfigError::Invalid(format!(
                "seed value {value} at index {index} is outside [0, {})",
                self.size
            )));
        }
        Ok(())
    }
}

/// Standard problems the engine ships predicates for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemKind {
    /// All orderings of `[0, n)`.
    Permutations,

    /// Non-attacking queen placements, one column index per row.
    #[default]
    NQueens,
}

impl fmt::Display for ProblemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProblemKind::Permutations => write!(f, "Permutations"),
            ProblemKind::NQueens => write!(f, "NQueens"),
        }
    }
}

/// Seed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SeedConfig {
    /// Prefix copied into the assignment buffer before searching.
    #[serde(default)]
    pub values: Vec<i32>,
}

#[cfg(test)]
mod tests;
