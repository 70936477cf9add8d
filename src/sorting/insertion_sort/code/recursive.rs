//! Recursive insertion sort: sort the first n-1 records, then insert the nth.

use super::insert_into_prefix;
use crate::error::Result;
use crate::record::{Key, Record};
use crate::sorting::RecursionBudget;

/// Sort `records` descending by `key`, recursing once per record.
///
/// Recursion reaches depth `len - 1` before any record moves, so a budget
/// smaller than that fails with `StackExhausted` and leaves the input
/// untouched.
pub fn insertion_sort_recursive(
    records: &mut [Record],
    key: Key,
    budget: &RecursionBudget,
) -> Result<()> {
    key.check(records, 0)?;
    sort_prefix(records, records.len(), key, budget, 1)
}

fn sort_prefix(
    records: &mut [Record],
    n: usize,
    key: Key,
    budget: &RecursionBudget,
    depth: usize,
) -> Result<()> {
    if n <= 1 {
        return Ok(());
    }
    budget.enter(depth)?;

    sort_prefix(records, n - 1, key, budget, depth + 1)?;
    insert_into_prefix(records, n - 1, key);
    Ok(())
}
