//! Classic recursive quick sort.

use super::{check_range, partition};
use crate::error::Result;
use crate::record::{Key, Record};
use crate::sorting::RecursionBudget;

/// Sort `records[low..=high]` descending by `key` by recursing on both
/// partitions.
///
/// Depth follows the partition tree, so presorted input recurses once per
/// record. Going past `budget.max_depth` returns `StackExhausted` and leaves
/// the range partially sorted.
pub fn quick_sort_recursive(
    records: &mut [Record],
    low: usize,
    high: usize,
    key: Key,
    budget: &RecursionBudget,
) -> Result<()> {
    check_range(records, low, high, key)?;
    sort_range(records, low, high, key, budget, 1)
}

fn sort_range(
    records: &mut [Record],
    low: usize,
    high: usize,
    key: Key,
    budget: &RecursionBudget,
    depth: usize,
) -> Result<()> {
    if low >= high {
        return Ok(());
    }
    budget.enter(depth)?;

    let p = partition(records, low, high, key);
    if p > low {
        sort_range(records, low, p - 1, key, budget, depth + 1)?;
    }
    if p < high {
        sort_range(records, p + 1, high, key, budget, depth + 1)?;
    }
    Ok(())
}
