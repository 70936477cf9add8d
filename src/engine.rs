//! Single sort and search operations over a caller-supplied record set.
//!
//! These are the entry points the terminal front end uses outside of the
//! benchmark matrix. Each call takes ownership of its records and hands
//! the sorted set back in the report.

use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::record::{Key, Record, RecordSet};
use crate::searching::binary_search;
use crate::sorting::{RecursionBudget, SortStrategy};
use crate::utils::timer::as_millis_f64;

/// Outcome of [`sort_records`]
#[derive(Clone, Debug, PartialEq)]
pub struct SortReport {
    pub strategy: SortStrategy,
    pub key: Key,
    pub records: RecordSet,
    pub elapsed: Duration,
}

impl SortReport {
    pub fn elapsed_ms(&self) -> f64 {
        as_millis_f64(self.elapsed)
    }
}

/// Outcome of [`search_records`]
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    pub key: Key,
    pub target: f64,
    /// Index into `records`, `None` when no record matches
    pub index: Option<usize>,
    /// Records sorted descending by `key`
    pub records: RecordSet,
    pub sort_elapsed: Duration,
    pub search_elapsed: Duration,
}

impl SearchReport {
    pub fn found(&self) -> Option<&Record> {
        self.index.and_then(|i| self.records.get(i))
    }

    /// The index, or -1 when not found
    pub fn index_or_sentinel(&self) -> i64 {
        self.index.map_or(-1, |i| i as i64)
    }

    pub fn search_elapsed_ms(&self) -> f64 {
        as_millis_f64(self.search_elapsed)
    }
}

/// Sort `records` descending by `key` with the chosen strategy.
pub fn sort_records(
    mut records: RecordSet,
    strategy: SortStrategy,
    key: Key,
    budget: &RecursionBudget,
) -> Result<SortReport> {
    let (elapsed, result) = crate::measure!(strategy.sort(&mut records, key, budget));
    result?;
    debug!(%strategy, %key, n = records.len(), recursive = strategy.is_recursive(), "sorted");

    Ok(SortReport {
        strategy,
        key,
        records,
        elapsed,
    })
}

/// Sort with quick-iterative, then binary search for `target`.
///
/// Only the search itself is counted in `search_elapsed`. Debug builds
/// verify the descending order before searching.
pub fn search_records(
    records: RecordSet,
    target: f64,
    key: Key,
    budget: &RecursionBudget,
) -> Result<SearchReport> {
    let sorted = sort_records(records, SortStrategy::QuickIterative, key, budget)?;
    let records = sorted.records;

    let search = if cfg!(debug_assertions) {
        binary_search::binary_search_checked
    } else {
        binary_search::binary_search_iterative
    };
    let (search_elapsed, index) = crate::measure!(search(records.as_slice(), target, key));
    let index = index?;
    debug!(%key, target, ?index, "searched");

    Ok(SearchReport {
        key,
        target,
        index,
        records,
        sort_elapsed: sorted.elapsed,
        search_elapsed,
    })
}
