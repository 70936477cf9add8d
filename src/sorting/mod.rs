//! # Descending Sorts
//!
//! Four deliberately separate strategies that reorder records into
//! non-increasing key order:
//!
//! - **Quick sort** (Lomuto partition, last element as pivot), recursive and
//!   with an explicit range stack. Not stable.
//! - **Insertion sort**, iterative and recursive. Stable for equal keys.
//!
//! The recursive variants take a [`RecursionBudget`] and fail with
//! `StackExhausted` instead of overflowing the thread stack.

pub mod insertion_sort;
pub mod quick_sort;
pub(crate) mod verification;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{Key, Record, RecordSet};

/// Default maximum recursion depth for the recursive variants
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Largest accepted recursion budget
pub const MAX_SAFE_DEPTH: usize = 100_000;

/// Stack reserved per recursive frame, generous enough for debug builds
const FRAME_BYTES: usize = 1024;

/// Stack reserved on top of the frames themselves
const BASE_STACK_BYTES: usize = 1 << 20;

/// Per-call recursion limit for the recursive sort variants
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecursionBudget {
    pub max_depth: usize,
}

impl RecursionBudget {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// A budget within `1..=MAX_SAFE_DEPTH`, or `InvalidConfig`.
    pub fn try_new(max_depth: usize) -> Result<Self> {
        let budget = Self::new(max_depth);
        budget.validate()?;
        Ok(budget)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 || self.max_depth > MAX_SAFE_DEPTH {
            return Err(Error::InvalidConfig(format!(
                "recursion max_depth must be between 1 and {}, got {}",
                MAX_SAFE_DEPTH, self.max_depth
            )));
        }
        Ok(())
    }

    /// Stack size of a thread that can hold `max_depth` recursive frames
    pub fn stack_bytes(&self) -> usize {
        self.max_depth
            .min(MAX_SAFE_DEPTH)
            .saturating_mul(FRAME_BYTES)
            .saturating_add(BASE_STACK_BYTES)
    }

    /// Run `f` on a scoped thread sized by [`stack_bytes`](Self::stack_bytes).
    ///
    /// The calling thread's stack may be smaller than the budget needs, so
    /// recursive variants run here and hit `StackExhausted` first.
    pub fn run_with_stack<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T> + Send,
        T: Send,
    {
        std::thread::scope(|scope| -> Result<T> {
            let handle = std::thread::Builder::new()
                .name("recursive-sort".into())
                .stack_size(self.stack_bytes())
                .spawn_scoped(scope, f)?;
            handle
                .join()
                .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
        })
    }

    /// Called on entry to every recursive frame (depth starts at 1).
    #[inline]
    pub fn enter(&self, depth: usize) -> Result<()> {
        if depth > self.max_depth {
            return Err(Error::StackExhausted {
                depth,
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

impl Default for RecursionBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

/// Sort algorithm selection. The caller always picks one explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortStrategy {
    QuickIterative,
    QuickRecursive,
    InsertionIterative,
    InsertionRecursive,
}

impl SortStrategy {
    pub const ALL: [SortStrategy; 4] = [
        SortStrategy::QuickIterative,
        SortStrategy::QuickRecursive,
        SortStrategy::InsertionIterative,
        SortStrategy::InsertionRecursive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            SortStrategy::QuickIterative => "quick-iterative",
            SortStrategy::QuickRecursive => "quick-recursive",
            SortStrategy::InsertionIterative => "insertion-iterative",
            SortStrategy::InsertionRecursive => "insertion-recursive",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SortStrategy::QuickIterative => "Quick sort driven by an explicit range stack",
            SortStrategy::QuickRecursive => "Quick sort by divide-and-conquer recursion",
            SortStrategy::InsertionIterative => "Insertion sort in a single forward pass",
            SortStrategy::InsertionRecursive => {
                "Insertion sort of the first n-1 records, then the nth"
            }
        }
    }

    /// Whether this strategy consumes the recursion budget
    pub fn is_recursive(&self) -> bool {
        matches!(self, SortStrategy::QuickRecursive | SortStrategy::InsertionRecursive)
    }

    /// Sort the whole record set descending by `key`. Empty input is a no-op.
    ///
    /// Recursive strategies run on a thread sized for `budget`.
    pub fn sort(
        &self,
        records: &mut RecordSet,
        key: Key,
        budget: &RecursionBudget,
    ) -> Result<()> {
        let slice = records.as_mut_slice();
        if slice.is_empty() {
            return Ok(());
        }
        if self.is_recursive() {
            budget.run_with_stack(|| self.sort_slice(slice, key, budget))
        } else {
            self.sort_slice(slice, key, budget)
        }
    }

    fn sort_slice(&self, slice: &mut [Record], key: Key, budget: &RecursionBudget) -> Result<()> {
        let high = slice.len() - 1;
        match self {
            SortStrategy::QuickIterative => {
                quick_sort::quick_sort_iterative(slice, 0, high, key, budget)
            }
            SortStrategy::QuickRecursive => {
                quick_sort::quick_sort_recursive(slice, 0, high, key, budget)
            }
            SortStrategy::InsertionIterative => {
                insertion_sort::insertion_sort_iterative(slice, key, budget)
            }
            SortStrategy::InsertionRecursive => {
                insertion_sort::insertion_sort_recursive(slice, key, budget)
            }
        }
    }
}

impl fmt::Display for SortStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SortStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        SortStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == wanted)
            .ok_or_else(|| {
                let names: Vec<_> = SortStrategy::ALL.iter().map(|s| s.name()).collect();
                Error::InvalidConfig(format!(
                    "unknown strategy '{}' (expected one of {})",
                    s,
                    names.join(", ")
                ))
            })
    }
}
