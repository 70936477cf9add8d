//! Single-pass insertion sort.

use super::insert_into_prefix;
use crate::error::Result;
use crate::record::{Key, Record};
use crate::sorting::RecursionBudget;

/// Sort `records` descending by `key`.
///
/// O(n²) comparisons in general, O(n) when the input is already
/// descending. Records with equal keys keep their relative order.
pub fn insertion_sort_iterative(
    records: &mut [Record],
    key: Key,
    _budget: &RecursionBudget,
) -> Result<()> {
    key.check(records, 0)?;
    for i in 1..records.len() {
        insert_into_prefix(records, i, key);
    }
    Ok(())
}
