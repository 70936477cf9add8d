//! # Binary Search (descending)
//!
//! Standard bisection adapted to non-increasing data: when the middle value
//! is smaller than the target, the target can only be further left.
//!
//! The precondition is the caller's: [`binary_search_iterative`] trusts its
//! input, [`binary_search_checked`] verifies it first and fails with
//! `PreconditionViolated`.

pub mod code;
pub mod test;

pub use code::*;

use crate::record::RecordSet;
use crate::registry::{Algorithm, AlgorithmRunner, BenchContext, VariantClosure};
use crate::sorting::SortStrategy;

/// Runner for the binary search family
pub struct BinarySearchRunner;

impl AlgorithmRunner for BinarySearchRunner {
    fn name(&self) -> &'static str {
        "binary_search"
    }

    fn description(&self) -> &'static str {
        "Bisection over records sorted in descending key order"
    }

    fn category(&self) -> &'static str {
        "searching"
    }

    fn algorithms(&self) -> Vec<Algorithm> {
        code::available_variants().iter().map(|v| v.algorithm).collect()
    }

    fn get_variant_closures<'a>(&'a self, ctx: &BenchContext<'a>) -> Vec<VariantClosure<'a>> {
        let data = ctx.data;
        let key = ctx.key;
        let target = ctx.search_target;
        let budget = ctx.budget;

        code::available_variants()
            .into_iter()
            .map(|v| {
                let func = v.function;
                let mut sorted: Option<RecordSet> = None;

                VariantClosure {
                    algorithm: v.algorithm,
                    run: Box::new(move || {
                        // Re-sort this size's data once, outside the timed region.
                        let records = match sorted.take() {
                            Some(records) => records,
                            None => {
                                let mut records = data.clone();
                                SortStrategy::QuickIterative.sort(&mut records, key, &budget)?;
                                records
                            }
                        };
                        let (elapsed, result) =
                            crate::measure!(func(records.as_slice(), target, key));
                        sorted = Some(records);
                        result.map(|_| elapsed)
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> std::result::Result<(), String> {
        test::verify_all()
    }
}
