//! Iterative bisection over descending records.

use crate::error::{Error, Result};
use crate::record::{first_ascent, Key, Record};

fn probe(records: &[Record], index: usize, key: Key) -> Result<f64> {
    key.value(&records[index])
        .ok_or(Error::InvalidKey { key, index })
}

/// Find the index of some record whose key equals `target`.
///
/// `records` must already be sorted descending by `key`; this is not
/// checked and the answer is meaningless otherwise. With duplicates of
/// `target` any one of their indices may be returned. Empty input yields
/// `None`.
pub fn binary_search_iterative(records: &[Record], target: f64, key: Key) -> Result<Option<usize>> {
    let mut low = 0;
    let mut high = records.len();

    while low < high {
        let mid = low + (high - low) / 2;
        let value = probe(records, mid, key)?;

        if value == target {
            return Ok(Some(mid));
        } else if value < target {
            // descending: larger values sit further left
            high = mid;
        } else {
            low = mid + 1;
        }
    }

    Ok(None)
}

/// [`binary_search_iterative`] after verifying the descending precondition.
pub fn binary_search_checked(records: &[Record], target: f64, key: Key) -> Result<Option<usize>> {
    key.check(records, 0)?;
    if let Some(index) = first_ascent(records, key) {
        return Err(Error::PreconditionViolated { key, index });
    }
    binary_search_iterative(records, target, key)
}
