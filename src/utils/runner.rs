//! Benchmark harness: every registered algorithm across a list of sizes.
//!
//! For each size N the source records are sampled (truncated, or repeated
//! cyclically) into the row's test data, then every cell is run on a fresh
//! copy in registry order. Cells run strictly one after another on the
//! calling thread.
//!
//! A cell that cannot be measured becomes a skip sentinel:
//! - N above the algorithm's configured ceiling
//! - the recursion budget ran out (`StackExhausted`)
//! - the run deadline passed before the cell started
//!
//! Any other failure aborts the run with [`Error::Cell`] naming the
//! algorithm and size.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use super::bench::{BenchmarkResult, BenchmarkRow, Cell, SkipReason, TimingSample};
use super::cpu_affinity::CpuPinGuard;
use super::timer::{as_millis_f64, calculate_median, PinStrategy, TimingConfig};
use crate::config::HarnessConfig;
use crate::error::{Error, Result};
use crate::record::RecordSet;
use crate::registry::{build_registry, Algorithm, BenchContext, VariantClosure};

/// Reported after each completed row
#[derive(Clone, Copy, Debug)]
pub struct Progress<'a> {
    pub completed: usize,
    pub total: usize,
    pub row: &'a BenchmarkRow,
}

impl Progress<'_> {
    pub fn fraction(&self) -> f64 {
        self.completed as f64 / self.total as f64
    }
}

/// Run the full matrix described by `config` over `source`.
pub fn run_benchmarks(source: &RecordSet, config: &HarnessConfig) -> Result<BenchmarkResult> {
    run_benchmarks_with_progress(source, config, |_| {})
}

/// [`run_benchmarks`], calling `on_row` after every completed row.
pub fn run_benchmarks_with_progress<F>(
    source: &RecordSet,
    config: &HarnessConfig,
    mut on_row: F,
) -> Result<BenchmarkResult>
where
    F: FnMut(Progress<'_>),
{
    config.validate()?;
    if source.is_empty() {
        return Err(Error::EmptyInput("benchmark source has no records".into()));
    }

    let registry = build_registry();
    let mut result = BenchmarkResult::new(config.key, config.search_target, registry.columns());
    let deadline = config.deadline().map(|d| Instant::now() + d);
    let _global_pin = (config.timing.pin_strategy == PinStrategy::Global).then(CpuPinGuard::new);

    info!(
        sizes = ?config.sizes,
        key = %config.key,
        source_len = source.len(),
        "starting benchmark"
    );

    for (idx, &size) in config.sizes.iter().enumerate() {
        let data = source.sample(size)?;
        let ctx = BenchContext {
            data: &data,
            key: config.key,
            search_target: config.search_target,
            budget: config.recursion,
        };

        let mut row = BenchmarkRow::new(size);
        for runner in registry.all() {
            for mut closure in runner.get_variant_closures(&ctx) {
                let algorithm = closure.algorithm;
                let cell = run_cell(&mut closure, size, config, deadline).map_err(|source| {
                    Error::Cell {
                        algorithm,
                        size,
                        source: Box::new(source),
                    }
                })?;
                row.samples.push(TimingSample { algorithm, size, cell });
            }
        }

        info!(size, "row complete");
        on_row(Progress {
            completed: idx + 1,
            total: config.sizes.len(),
            row: &row,
        });
        result.rows.push(row);
    }

    Ok(result)
}

/// Measure one (algorithm, N) cell, or decide why it is skipped.
fn run_cell(
    closure: &mut VariantClosure<'_>,
    size: usize,
    config: &HarnessConfig,
    deadline: Option<Instant>,
) -> Result<Cell> {
    let algorithm = closure.algorithm;

    if deadline.is_some_and(|d| Instant::now() >= d) {
        warn!(%algorithm, size, "deadline reached, cell skipped");
        return Ok(skipped(SkipReason::Deadline));
    }

    if let Some(ceiling) = config.ceiling_for(algorithm) {
        if size > ceiling {
            debug!(%algorithm, size, ceiling, "above ceiling, cell skipped");
            return Ok(skipped(SkipReason::AboveCeiling { ceiling }));
        }
    }

    match measure_runs(closure, &config.timing) {
        Ok(times) => {
            let millis = as_millis_f64(calculate_median(&times));
            debug!(%algorithm, size, millis, runs = times.len(), "cell measured");
            Ok(Cell::Measured { millis })
        }
        Err(err) if err.is_stack_exhausted() => {
            warn!(%algorithm, size, error = %err, "cell skipped");
            Ok(skipped(SkipReason::StackExhausted))
        }
        Err(err) => Err(err),
    }
}

fn measure_runs(closure: &mut VariantClosure<'_>, timing: &TimingConfig) -> Result<Vec<Duration>> {
    for _ in 0..timing.warmup_runs {
        (closure.run)()?;
    }

    let mut times = Vec::with_capacity(timing.runs_per_cell);
    for _ in 0..timing.runs_per_cell {
        let _per_exec_pin =
            (timing.pin_strategy == PinStrategy::PerExecution).then(CpuPinGuard::new);
        times.push((closure.run)()?);
    }
    Ok(times)
}

fn skipped(reason: SkipReason) -> Cell {
    Cell::Skipped { reason }
}

/// Column order of every result produced by this harness
pub fn columns() -> Vec<Algorithm> {
    build_registry().columns()
}
