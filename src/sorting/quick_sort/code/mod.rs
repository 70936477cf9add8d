//! Quick sort implementations.
//!
//! Both variants share the Lomuto partition below and sort an inclusive
//! range `[low, high]` of the slice.

mod iterative;
mod recursive;

pub use iterative::quick_sort_iterative;
pub use recursive::quick_sort_recursive;

#[cfg(test)]
pub(crate) use iterative::sort_range_with_stack;

use crate::error::{Error, Result};
use crate::record::{Key, Record};
use crate::registry::Algorithm;
use crate::sorting::RecursionBudget;
use crate::utils::VariantInfo;

/// Signature shared by the quick sort variants
pub type QuickSortFn = fn(&mut [Record], usize, usize, Key, &RecursionBudget) -> Result<()>;

/// Returns all available quick sort variants
pub fn available_variants() -> Vec<VariantInfo<QuickSortFn>> {
    vec![
        VariantInfo {
            algorithm: Algorithm::QuickIterative,
            function: quick_sort_iterative,
        },
        VariantInfo {
            algorithm: Algorithm::QuickRecursive,
            function: quick_sort_recursive,
        },
    ]
}

/// Validate `[low, high]` against the slice and the key against the range.
pub(crate) fn check_range(records: &[Record], low: usize, high: usize, key: Key) -> Result<()> {
    if low > high || high >= records.len() {
        return Err(Error::InvalidRange {
            low,
            high,
            len: records.len(),
        });
    }
    key.check(&records[low..=high], low)
}

/// Lomuto partition around `records[high]`.
///
/// Every element with a value `>=` the pivot ends up left of the returned
/// index, which is the pivot's final position.
#[inline]
pub(crate) fn partition(records: &mut [Record], low: usize, high: usize, key: Key) -> usize {
    let pivot = key.read(&records[high]);
    let mut store = low;
    for j in low..high {
        if key.read(&records[j]) >= pivot {
            records.swap(store, j);
            store += 1;
        }
    }
    records.swap(store, high);
    store
}
