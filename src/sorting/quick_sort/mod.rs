//! # Quick Sort
//!
//! Lomuto partition with the last element of the range as pivot. Records
//! whose key is `>=` the pivot move left, so the output is non-increasing.
//! Equal keys may be reordered.
//!
//! ## Variants
//!
//! - **quick-iterative**: pending ranges kept on a heap-allocated stack
//! - **quick-recursive**: recursion on both partitions, bounded by a
//!   [`RecursionBudget`](crate::sorting::RecursionBudget)

pub mod code;
pub mod test;

pub use code::*;

use crate::error::Result;
use crate::record::{Key, RecordSet};
use crate::registry::{Algorithm, AlgorithmRunner, BenchContext, VariantClosure};
use crate::sorting::RecursionBudget;

/// Sort a whole record set with one of the range-based variants
fn sort_whole(
    func: QuickSortFn,
    records: &mut RecordSet,
    key: Key,
    budget: &RecursionBudget,
) -> Result<()> {
    match records.len() {
        0 => Ok(()),
        n => func(records.as_mut_slice(), 0, n - 1, key, budget),
    }
}

/// Runner for the quick sort family
pub struct QuickSortRunner;

impl AlgorithmRunner for QuickSortRunner {
    fn name(&self) -> &'static str {
        "quick_sort"
    }

    fn description(&self) -> &'static str {
        "Descending quick sort, Lomuto partition on the last element"
    }

    fn category(&self) -> &'static str {
        "sorting"
    }

    fn algorithms(&self) -> Vec<Algorithm> {
        code::available_variants().iter().map(|v| v.algorithm).collect()
    }

    fn get_variant_closures<'a>(&'a self, ctx: &BenchContext<'a>) -> Vec<VariantClosure<'a>> {
        let data = ctx.data;
        let key = ctx.key;
        let budget = ctx.budget;

        code::available_variants()
            .into_iter()
            .map(|v| {
                let func = v.function;
                let recursive = v.algorithm.sort_strategy().is_some_and(|s| s.is_recursive());

                VariantClosure {
                    algorithm: v.algorithm,
                    run: Box::new(move || {
                        let timed = move || {
                            let mut records = data.clone();
                            let (elapsed, result) =
                                crate::measure!(sort_whole(func, &mut records, key, &budget));
                            result.map(|()| elapsed)
                        };
                        if recursive {
                            budget.run_with_stack(timed)
                        } else {
                            timed()
                        }
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> std::result::Result<(), String> {
        test::verify_all()
    }
}
