//! # Sort-Search-Bench
//!
//! Descending sorts and binary search over film records, plus a harness
//! that times every algorithm across a sweep of input sizes.

pub mod config;
pub mod engine;
pub mod error;
pub mod loader;
pub mod record;
pub mod registry;
pub mod searching;
pub mod sorting;
pub mod utils;

pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::{run_benchmarks, run_benchmarks_with_progress};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::HarnessConfig;
    pub use crate::engine::{search_records, sort_records, SearchReport, SortReport};
    pub use crate::error::{Error, Result};
    pub use crate::record::{Key, Record, RecordSet};
    pub use crate::registry::{build_registry, Algorithm, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::sorting::{RecursionBudget, SortStrategy};
    pub use crate::utils::{BenchmarkResult, Cell, SkipReason};
}
