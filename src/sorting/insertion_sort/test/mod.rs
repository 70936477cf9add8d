//! Tests for the insertion sort variants

use super::code::available_variants;
use crate::record::Key;
use crate::sorting::verification::{check_sorted, verification_inputs};
use crate::sorting::RecursionBudget;

/// Verify every variant against the reference descending order
pub fn verify_all() -> Result<(), String> {
    let budget = RecursionBudget::default();

    for variant in available_variants() {
        for (input_name, input) in verification_inputs() {
            for key in Key::ALL {
                let mut output = input.clone();
                (variant.function)(output.as_mut_slice(), key, &budget)
                    .map_err(|e| {
                        format!(
                            "Variant '{}' failed on {}: {}",
                            variant.name(),
                            input_name,
                            e
                        )
                    })?;

                let label = format!("{} on {} by {}", variant.name(), input_name, key);
                check_sorted(&label, &input, &output, key)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::{ratings, Record, RecordSet};
    use crate::sorting::insertion_sort::{insertion_sort_iterative, insertion_sort_recursive};
    use crate::sorting::quick_sort::quick_sort_iterative;
    use proptest::prelude::*;

    fn titles(set: &RecordSet) -> Vec<&str> {
        set.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_ties_keep_input_order() {
        // r0..r4 with ratings 5, 7, 5, 7, 5
        let input = ratings(&[5.0, 7.0, 5.0, 7.0, 5.0]);
        for variant in available_variants() {
            let mut output = input.clone();
            let budget = RecursionBudget::default();
            (variant.function)(output.as_mut_slice(), Key::Rating, &budget).unwrap();
            assert_eq!(titles(&output), vec!["r1", "r3", "r0", "r2", "r4"], "{}", variant.name());
        }
    }

    #[test]
    fn test_already_descending_is_unchanged() {
        let input = ratings(&[9.5, 9.0, 9.0, 4.0, 1.5]);
        for variant in available_variants() {
            let mut output = input.clone();
            let budget = RecursionBudget::default();
            (variant.function)(output.as_mut_slice(), Key::Rating, &budget).unwrap();
            assert_eq!(output, input, "{}", variant.name());
        }
    }

    #[test]
    fn test_recursive_budget_leaves_input_untouched() {
        let input = ratings(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let mut output = input.clone();
        let budget = RecursionBudget::new(4);
        let result = insertion_sort_recursive(output.as_mut_slice(), Key::Rating, &budget);
        assert!(matches!(result, Err(Error::StackExhausted { depth: 5, limit: 4 })));
        assert_eq!(output, input);

        // n records need a depth of n - 1
        let budget = RecursionBudget::new(5);
        insertion_sort_recursive(output.as_mut_slice(), Key::Rating, &budget).unwrap();
        assert!(output.is_descending(Key::Rating));
    }

    #[test]
    fn test_recursive_at_reference_ceiling() {
        let mut records = RecordSet::synthetic(1500, 3);
        let budget = RecursionBudget::new(1500);
        insertion_sort_recursive(records.as_mut_slice(), Key::Rating, &budget).unwrap();
        assert!(records.is_descending(Key::Rating));
    }

    #[test]
    fn test_bench_closure_deep_recursion() {
        use crate::registry::{Algorithm, AlgorithmRunner, BenchContext};
        use crate::sorting::insertion_sort::InsertionSortRunner;

        // already descending: linear work, but recursion depth n - 1
        let values: Vec<f64> = (0..50_000).rev().map(f64::from).collect();
        let data = ratings(&values);
        let ctx = BenchContext {
            data: &data,
            key: Key::Rating,
            search_target: 8.5,
            budget: RecursionBudget::new(60_000),
        };
        let runner = InsertionSortRunner;
        let mut closures = runner.get_variant_closures(&ctx);
        let closure = closures
            .iter_mut()
            .find(|c| c.algorithm == Algorithm::InsertionRecursive)
            .unwrap();
        assert!((closure.run)().is_ok());
    }

    #[test]
    fn test_missing_key() {
        let mut records = ratings(&[1.0]);
        records.push(Record::new("no year", 2.0, None, 3.0, "Drama"));
        for variant in available_variants() {
            let budget = RecursionBudget::default();
            let result = (variant.function)(records.as_mut_slice(), Key::Year, &budget);
            assert!(
                matches!(result, Err(Error::InvalidKey { index: 1, .. })),
                "{}",
                variant.name()
            );
        }
    }

    #[test]
    fn test_empty_and_single() {
        for variant in available_variants() {
            (variant.function)(&mut [], Key::Votes, &RecursionBudget::new(0)).unwrap();
            let mut one = ratings(&[4.0]);
            (variant.function)(one.as_mut_slice(), Key::Votes, &RecursionBudget::new(0)).unwrap();
            assert_eq!(one.len(), 1);
        }
    }

    proptest! {
        #[test]
        fn prop_matches_quick_sort_values(values in prop::collection::vec(0u16..1000, 0..150)) {
            let values: Vec<f64> = values.into_iter().map(f64::from).collect();
            let input = ratings(&values);
            let budget = RecursionBudget::default();

            let mut quick = input.clone();
            if !quick.is_empty() {
                let high = quick.len() - 1;
                quick_sort_iterative(quick.as_mut_slice(), 0, high, Key::Rating, &budget).unwrap();
            }

            let mut insertion = input.clone();
            insertion_sort_iterative(insertion.as_mut_slice(), Key::Rating, &budget).unwrap();
            prop_assert_eq!(insertion.key_values(Key::Rating), quick.key_values(Key::Rating));

            let mut recursive = input.clone();
            insertion_sort_recursive(recursive.as_mut_slice(), Key::Rating, &budget).unwrap();
            prop_assert_eq!(recursive, insertion);
        }
    }
}
