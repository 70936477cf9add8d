//! Utility modules for benchmarking and execution.

pub mod bench;
pub mod cpu_affinity;
pub mod runner;
pub mod timer;
pub mod tui;

// Re-export commonly used items
pub use bench::{BenchmarkResult, BenchmarkRow, Cell, SkipReason, TimingSample};
pub use cpu_affinity::CpuPinGuard;
pub use timer::{as_millis_f64, calculate_median, PinStrategy, TimingConfig};

use crate::registry::Algorithm;

/// Information about an algorithm implementation variant.
/// Generic over F which is the function signature.
pub struct VariantInfo<F> {
    /// Benchmark column this variant fills
    pub algorithm: Algorithm,
    /// The specific implementation function
    pub function: F,
}

impl<F> VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "quick-iterative")
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    pub fn description(&self) -> &'static str {
        self.algorithm.description()
    }
}
