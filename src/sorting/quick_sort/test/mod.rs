//! Tests for the quick sort variants

use super::code::available_variants;
use super::sort_whole;
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
                sort_whole(variant.function, &mut output, key, &budget)
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
    use crate::sorting::quick_sort::code::{partition, sort_range_with_stack};
    use crate::sorting::quick_sort::{quick_sort_iterative, quick_sort_recursive};
    use proptest::prelude::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_partition_moves_ge_pivot_left() {
        let mut records = ratings(&[3.0, 8.0, 5.0, 1.0, 5.0]);
        let p = partition(records.as_mut_slice(), 0, 4, Key::Rating);
        let values = records.key_values(Key::Rating);
        assert_eq!(values[p], 5.0);
        assert!(values[..p].iter().all(|&v| v >= 5.0));
        assert!(values[p + 1..].iter().all(|&v| v < 5.0));
        // the equal-to-pivot 5.0 lands left of the pivot
        assert_eq!(p, 2);
    }

    #[test]
    fn test_sub_range_only() {
        for variant in available_variants() {
            let mut records = ratings(&[1.0, 2.0, 3.0, 4.0, 5.0]);
            let budget = RecursionBudget::default();
            (variant.function)(records.as_mut_slice(), 1, 3, Key::Rating, &budget).unwrap();
            assert_eq!(
                records.key_values(Key::Rating),
                vec![1.0, 4.0, 3.0, 2.0, 5.0],
                "{}",
                variant.name()
            );
        }
    }

    #[test]
    fn test_invalid_range() {
        for variant in available_variants() {
            let mut records = ratings(&[1.0, 2.0, 3.0]);
            let budget = RecursionBudget::default();
            assert!(matches!(
                (variant.function)(records.as_mut_slice(), 2, 1, Key::Rating, &budget),
                Err(Error::InvalidRange { low: 2, high: 1, len: 3 })
            ));
            assert!(matches!(
                (variant.function)(records.as_mut_slice(), 0, 3, Key::Rating, &budget),
                Err(Error::InvalidRange { .. })
            ));
            assert!(matches!(
                (variant.function)(&mut [], 0, 0, Key::Rating, &budget),
                Err(Error::InvalidRange { len: 0, .. })
            ));
        }
    }

    #[test]
    fn test_missing_key() {
        let mut records = ratings(&[1.0, 2.0]);
        records.push(Record::new("unknown year", 3.0, None, 1.0, "Drama"));
        let len = records.len();
        for variant in available_variants() {
            let budget = RecursionBudget::default();
            let result = (variant.function)(records.as_mut_slice(), 0, len - 1, Key::Year, &budget);
            assert!(
                matches!(result, Err(Error::InvalidKey { key: Key::Year, index: 2 })),
                "{}",
                variant.name()
            );
        }
    }

    #[test]
    fn test_iterative_stack_on_unbalanced_input() {
        // Ascending input puts every pivot at the low end: one sub-range per level.
        let n = 4096;
        let values: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let mut records = ratings(&values);
        let peak = sort_range_with_stack(records.as_mut_slice(), 0, n - 1, Key::Rating);
        assert!(records.is_descending(Key::Rating));
        assert!(peak <= (n + 1) / 2, "peak {} exceeds bound", peak);

        // All-equal keys put every pivot at the high end.
        let mut flat = ratings(&vec![7.0; n]);
        let peak = sort_range_with_stack(flat.as_mut_slice(), 0, n - 1, Key::Rating);
        assert!(peak <= (n + 1) / 2);

        // A balanced input keeps several ranges pending at once.
        let mut random = RecordSet::synthetic(n, 99);
        let peak = sort_range_with_stack(random.as_mut_slice(), 0, n - 1, Key::Votes);
        assert!(random.is_descending(Key::Votes));
        assert!(peak >= 2 && peak <= (n + 1) / 2);
    }

    #[test]
    fn test_recursive_budget_on_presorted_input() {
        let values: Vec<f64> = (0..200).map(|i| i as f64).collect();
        let mut records = ratings(&values);
        let budget = RecursionBudget::new(50);
        let result = quick_sort_recursive(records.as_mut_slice(), 0, 199, Key::Rating, &budget);
        assert!(matches!(result, Err(Error::StackExhausted { depth: 51, limit: 50 })));

        let mut records = ratings(&values);
        let budget = RecursionBudget::new(200);
        quick_sort_recursive(records.as_mut_slice(), 0, 199, Key::Rating, &budget).unwrap();
        assert!(records.is_descending(Key::Rating));
    }

    #[test]
    fn test_iterative_ignores_budget() {
        let values: Vec<f64> = (0..500).map(|i| i as f64).collect();
        let mut records = ratings(&values);
        let budget = RecursionBudget::new(1);
        quick_sort_iterative(records.as_mut_slice(), 0, 499, Key::Rating, &budget).unwrap();
        assert!(records.is_descending(Key::Rating));
    }

    proptest! {
        #[test]
        fn prop_variants_agree(values in prop::collection::vec(0u8..20, 0..120)) {
            let values: Vec<f64> = values.into_iter().map(|v| f64::from(v) / 2.0).collect();
            let input = ratings(&values);
            let mut expected = values.clone();
            expected.sort_by(|a, b| b.total_cmp(a));

            for variant in available_variants() {
                let mut output = input.clone();
                let budget = RecursionBudget::default();
                sort_whole(variant.function, &mut output, Key::Rating, &budget).unwrap();
                prop_assert_eq!(output.key_values(Key::Rating), expected.clone());
                prop_assert!(check_sorted(variant.name(), &input, &output, Key::Rating).is_ok());
            }
        }
    }
}
