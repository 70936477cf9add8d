//! # Insertion Sort
//!
//! Each record is shifted left past every predecessor whose key is strictly
//! smaller. Ties are left in place, so unlike quick sort the result is
//! stable.
//!
//! The recursive variant recurses once per record and is the first cell
//! the benchmark harness drops as N grows.

pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{Algorithm, AlgorithmRunner, BenchContext, VariantClosure};

/// Runner for the insertion sort family
pub struct InsertionSortRunner;

impl AlgorithmRunner for InsertionSortRunner {
    fn name(&self) -> &'static str {
        "insertion_sort"
    }

    fn description(&self) -> &'static str {
        "Descending, stable insertion sort"
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
                                crate::measure!(func(records.as_mut_slice(), key, &budget));
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
