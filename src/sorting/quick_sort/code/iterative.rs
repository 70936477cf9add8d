//! Quick sort with an explicit stack of pending ranges.

use super::{check_range, partition};
use crate::error::Result;
use crate::record::{Key, Record};
use crate::sorting::RecursionBudget;

/// Sort `records[low..=high]` descending by `key` without recursion.
///
/// The budget is not consulted: the range stack lives on the heap.
pub fn quick_sort_iterative(
    records: &mut [Record],
    low: usize,
    high: usize,
    key: Key,
    _budget: &RecursionBudget,
) -> Result<()> {
    check_range(records, low, high, key)?;
    sort_range_with_stack(records, low, high, key);
    Ok(())
}

/// Stack-driven sort of a validated range. Returns the peak number of
/// pending ranges.
///
/// Only ranges holding at least two records are pushed and pending ranges
/// never overlap, so the peak is at most `(high - low + 2) / 2`. The stack is
/// a `Vec` regardless, pre-sized to `high - low + 1`.
pub(crate) fn sort_range_with_stack(
    records: &mut [Record],
    low: usize,
    high: usize,
    key: Key,
) -> usize {
    let mut stack: Vec<(usize, usize)> = Vec::with_capacity(high - low + 1);
    let mut peak = 0;

    if low < high {
        stack.push((low, high));
    }

    while let Some((l, h)) = stack.pop() {
        let p = partition(records, l, h, key);

        if p > l + 1 {
            stack.push((l, p - 1));
        }
        if p + 1 < h {
            stack.push((p + 1, h));
        }
        peak = peak.max(stack.len());
    }

    peak
}
