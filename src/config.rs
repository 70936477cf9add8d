//! Benchmark harness configuration.
//!
//! Defaults reproduce the reference sweep: N = 100, 500, 1000, 1500 by
//! rating, insertion sorts capped at 3000 (iterative) and 1500 (recursive),
//! binary search for 8.5. A JSON file may override any subset of fields.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::Key;
use crate::registry::Algorithm;
use crate::sorting::RecursionBudget;
use crate::utils::timer::TimingConfig;

pub const DEFAULT_SIZES: [usize; 4] = [100, 500, 1000, 1500];
pub const DEFAULT_INSERTION_ITERATIVE_CEILING: usize = 3000;
pub const DEFAULT_INSERTION_RECURSIVE_CEILING: usize = 1500;
pub const DEFAULT_SEARCH_TARGET: f64 = 8.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Input sizes, one result row each, in this order
    pub sizes: Vec<usize>,
    pub key: Key,
    pub search_target: f64,
    /// Insertion-iterative is skipped for N above this (None: never)
    pub insertion_iterative_ceiling: Option<usize>,
    /// Insertion-recursive is skipped for N above this (None: never)
    pub insertion_recursive_ceiling: Option<usize>,
    pub recursion: RecursionBudget,
    pub timing: TimingConfig,
    /// Wall-clock limit for the whole run, checked between cells
    pub deadline_secs: Option<f64>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_SIZES.to_vec(),
            key: Key::Rating,
            search_target: DEFAULT_SEARCH_TARGET,
            insertion_iterative_ceiling: Some(DEFAULT_INSERTION_ITERATIVE_CEILING),
            insertion_recursive_ceiling: Some(DEFAULT_INSERTION_RECURSIVE_CEILING),
            recursion: RecursionBudget::default(),
            timing: TimingConfig::default(),
            deadline_secs: None,
        }
    }
}

impl HarnessConfig {
    /// Load from a JSON file; missing fields keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config: HarnessConfig = serde_json::from_str(&text)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidConfig("at least one input size is required".into()));
        }
        if self.sizes.contains(&0) {
            return Err(Error::InvalidConfig("input sizes must be positive".into()));
        }
        if self.timing.runs_per_cell == 0 {
            return Err(Error::InvalidConfig("runs_per_cell must be at least 1".into()));
        }
        self.recursion.validate()?;
        if let Some(secs) = self.deadline_secs {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "deadline must be a positive number of seconds, got {}",
                    secs
                )));
            }
        }
        Ok(())
    }

    /// Size ceiling for an algorithm; only the insertion sorts have one.
    pub fn ceiling_for(&self, algorithm: Algorithm) -> Option<usize> {
        match algorithm {
            Algorithm::InsertionIterative => self.insertion_iterative_ceiling,
            Algorithm::InsertionRecursive => self.insertion_recursive_ceiling,
            _ => None,
        }
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.deadline_secs.map(Duration::from_secs_f64)
    }
}

/// Parse a comma separated size list such as `100, 500,1000`.
pub fn parse_sizes(text: &str) -> Result<Vec<usize>> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<usize>()
                .map_err(|_| Error::InvalidConfig(format!("'{}' is not a valid input size", s)))
        })
        .collect()
}

/// Parse a size ceiling: a number, or `none` / `off` for no ceiling.
pub fn parse_ceiling(text: &str) -> Result<Option<usize>> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("none") || text.eq_ignore_ascii_case("off") {
        return Ok(None);
    }
    text.parse::<usize>()
        .map(Some)
        .map_err(|_| Error::InvalidConfig(format!("'{}' is not a valid ceiling", text)))
}
