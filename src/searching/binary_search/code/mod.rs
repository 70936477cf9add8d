//! Binary search implementations.

mod iterative;

pub use iterative::{binary_search_checked, binary_search_iterative};

use crate::error::Result;
use crate::record::{Key, Record};
use crate::registry::Algorithm;
use crate::utils::VariantInfo;

/// Signature of a search over descending records
pub type SearchFn = fn(&[Record], f64, Key) -> Result<Option<usize>>;

/// Returns all available binary search variants
pub fn available_variants() -> Vec<VariantInfo<SearchFn>> {
    vec![VariantInfo {
        algorithm: Algorithm::BinarySearch,
        function: binary_search_iterative,
    }]
}
