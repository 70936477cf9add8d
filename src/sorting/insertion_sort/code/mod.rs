//! Insertion sort implementations.

mod iterative;
mod recursive;

pub use iterative::insertion_sort_iterative;
pub use recursive::insertion_sort_recursive;

use crate::error::Result;
use crate::record::{Key, Record};
use crate::registry::Algorithm;
use crate::sorting::RecursionBudget;
use crate::utils::VariantInfo;

/// Signature shared by the insertion sort variants
pub type InsertionSortFn = fn(&mut [Record], Key, &RecursionBudget) -> Result<()>;

/// Returns all available insertion sort variants
pub fn available_variants() -> Vec<VariantInfo<InsertionSortFn>> {
    vec![
        VariantInfo {
            algorithm: Algorithm::InsertionIterative,
            function: insertion_sort_iterative,
        },
        VariantInfo {
            algorithm: Algorithm::InsertionRecursive,
            function: insertion_sort_recursive,
        },
    ]
}

/// Move `records[i]` left past every predecessor with a strictly smaller
/// key. `records[..i]` must already be descending.
#[inline]
pub(crate) fn insert_into_prefix(records: &mut [Record], i: usize, key: Key) {
    let current = key.read(&records[i]);
    let mut j = i;
    while j > 0 && key.read(&records[j - 1]) < current {
        j -= 1;
    }
    if j < i {
        records[j..=i].rotate_right(1);
    }
}
