//! Algorithm registry for discovery, verification and benchmark cells.
//!
//! Each algorithm family registers one runner. The benchmark harness walks
//! the registry in order, so registration order is also the column order of
//! a benchmark result.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::record::{Key, RecordSet};
use crate::sorting::{RecursionBudget, SortStrategy};

/// One benchmarked operation: a sort variant or the binary search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    QuickIterative,
    QuickRecursive,
    InsertionIterative,
    InsertionRecursive,
    BinarySearch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::QuickIterative,
        Algorithm::QuickRecursive,
        Algorithm::InsertionIterative,
        Algorithm::InsertionRecursive,
        Algorithm::BinarySearch,
    ];

    pub fn name(&self) -> &'static str {
        match self.sort_strategy() {
            Some(strategy) => strategy.name(),
            None => "binary-search",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.sort_strategy() {
            Some(strategy) => strategy.description(),
            None => "Bisection over descending records, timed after an untimed re-sort",
        }
    }

    /// Column header used by the result table
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::QuickIterative => "Quick Iter (ms)",
            Algorithm::QuickRecursive => "Quick Rec (ms)",
            Algorithm::InsertionIterative => "Insertion Iter (ms)",
            Algorithm::InsertionRecursive => "Insertion Rec (ms)",
            Algorithm::BinarySearch => "Binary Search (ms)",
        }
    }

    pub fn sort_strategy(&self) -> Option<SortStrategy> {
        match self {
            Algorithm::QuickIterative => Some(SortStrategy::QuickIterative),
            Algorithm::QuickRecursive => Some(SortStrategy::QuickRecursive),
            Algorithm::InsertionIterative => Some(SortStrategy::InsertionIterative),
            Algorithm::InsertionRecursive => Some(SortStrategy::InsertionRecursive),
            Algorithm::BinarySearch => None,
        }
    }
}

impl From<SortStrategy> for Algorithm {
    fn from(strategy: SortStrategy) -> Self {
        match strategy {
            SortStrategy::QuickIterative => Algorithm::QuickIterative,
            SortStrategy::QuickRecursive => Algorithm::QuickRecursive,
            SortStrategy::InsertionIterative => Algorithm::InsertionIterative,
            SortStrategy::InsertionRecursive => Algorithm::InsertionRecursive,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything a runner needs to build the cells of one benchmark row
pub struct BenchContext<'a> {
    /// Test data for this row, never mutated by the closures
    pub data: &'a RecordSet,
    pub key: Key,
    pub search_target: f64,
    pub budget: RecursionBudget,
}

/// A closure that runs one timed execution of a variant
pub struct VariantClosure<'a> {
    pub algorithm: Algorithm,
    /// Returns the elapsed time of the timed region.
    /// Timing happens inside the closure so per-run setup (cloning the
    /// records, re-sorting for search) stays outside the measurement.
    pub run: Box<dyn FnMut() -> Result<Duration> + 'a>,
}

/// Trait that all algorithm families implement
pub trait AlgorithmRunner: Send + Sync {
    /// Name of the family (e.g., "quick_sort")
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// Category (e.g., "sorting", "searching")
    fn category(&self) -> &'static str;

    /// Benchmark columns contributed by this family, in order
    fn algorithms(&self) -> Vec<Algorithm>;

    /// Get list of available variant names
    fn available_variants(&self) -> Vec<&'static str> {
        self.algorithms().iter().map(|a| a.name()).collect()
    }

    /// Get closures for each variant over the row's data.
    /// Each closure does ONE timed execution on a fresh copy.
    fn get_variant_closures<'a>(&'a self, ctx: &BenchContext<'a>) -> Vec<VariantClosure<'a>>;

    /// Verify correctness of all variants against a reference
    fn verify(&self) -> std::result::Result<(), String>;
}

/// Registry of all algorithm families
pub struct AlgorithmRegistry {
    algorithms: Vec<Box<dyn AlgorithmRunner>>,
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            algorithms: Vec::new(),
        }
    }

    /// Register an algorithm family
    pub fn register<A: AlgorithmRunner + 'static>(&mut self, algo: A) {
        self.algorithms.push(Box::new(algo));
    }

    /// Get all registered families
    pub fn all(&self) -> &[Box<dyn AlgorithmRunner>] {
        &self.algorithms
    }

    /// Find a family by name
    pub fn find(&self, name: &str) -> Option<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .find(|a| a.name() == name)
            .map(|a| a.as_ref())
    }

    /// Benchmark columns in registration order
    pub fn columns(&self) -> Vec<Algorithm> {
        self.algorithms.iter().flat_map(|a| a.algorithms()).collect()
    }

    /// Families in a category
    pub fn by_category(&self, category: &str) -> Vec<&dyn AlgorithmRunner> {
        self.algorithms
            .iter()
            .filter(|a| a.category() == category)
            .map(|a| a.as_ref())
            .collect()
    }
}

impl Default for AlgorithmRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all families
pub fn build_registry() -> AlgorithmRegistry {
    let mut registry = AlgorithmRegistry::new();

    registry.register(crate::sorting::quick_sort::QuickSortRunner);
    registry.register(crate::sorting::insertion_sort::InsertionSortRunner);
    registry.register(crate::searching::binary_search::BinarySearchRunner);

    registry
}
