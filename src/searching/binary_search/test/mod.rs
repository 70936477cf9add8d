//! Tests for the binary search variants

use super::code::available_variants;
use crate::record::{Key, RecordSet};
use crate::sorting::{RecursionBudget, SortStrategy};

/// Every variant must find each present value and reject absent ones.
pub fn verify_all() -> Result<(), String> {
    let mut records = RecordSet::synthetic(501, 0xb15ec7);
    SortStrategy::QuickIterative
        .sort(&mut records, Key::Rating, &RecursionBudget::default())
        .map_err(|e| e.to_string())?;

    let present = records.key_values(Key::Rating);
    // synthetic ratings carry one decimal, so x.x5 never occurs
    let absent = [0.5, 5.55, 7.05, 10.5];

    for variant in available_variants() {
        for &target in &present {
            match (variant.function)(records.as_slice(), target, Key::Rating) {
                Ok(Some(index))
                    if Key::Rating.value(&records.as_slice()[index]) == Some(target) => {}
                other => {
                    return Err(format!(
                        "Variant '{}' failed for present target {}: got {:?}",
                        variant.name(),
                        target,
                        other
                    ))
                }
            }
        }

        for &target in &absent {
            match (variant.function)(records.as_slice(), target, Key::Rating) {
                Ok(None) => {}
                other => {
                    return Err(format!(
                        "Variant '{}' failed for absent target {}: got {:?}",
                        variant.name(),
                        target,
                        other
                    ))
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::{ratings, Record};
    use crate::searching::binary_search::{binary_search_checked, binary_search_iterative};
    use proptest::prelude::*;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[test]
    fn test_three_ratings_scenario() {
        let mut records = ratings(&[7.0, 9.0, 5.0]);
        SortStrategy::QuickIterative
            .sort(&mut records, Key::Rating, &RecursionBudget::default())
            .unwrap();
        assert_eq!(records.key_values(Key::Rating), vec![9.0, 7.0, 5.0]);

        assert_eq!(binary_search_iterative(records.as_slice(), 7.0, Key::Rating).unwrap(), Some(1));
        assert_eq!(binary_search_iterative(records.as_slice(), 6.0, Key::Rating).unwrap(), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(binary_search_iterative(&[], 8.5, Key::Rating).unwrap(), None);
        assert_eq!(binary_search_checked(&[], 8.5, Key::Rating).unwrap(), None);
    }

    #[test]
    fn test_ends() {
        let records = ratings(&[9.0, 8.0, 7.0, 6.0, 5.0]);
        assert_eq!(binary_search_iterative(records.as_slice(), 9.0, Key::Rating).unwrap(), Some(0));
        assert_eq!(binary_search_iterative(records.as_slice(), 5.0, Key::Rating).unwrap(), Some(4));
        assert_eq!(binary_search_iterative(records.as_slice(), 9.5, Key::Rating).unwrap(), None);
        assert_eq!(binary_search_iterative(records.as_slice(), 4.5, Key::Rating).unwrap(), None);
    }

    #[test]
    fn test_duplicates_return_a_match() {
        let records = ratings(&[9.0, 8.5, 8.5, 8.5, 8.5, 2.0]);
        let index = binary_search_iterative(records.as_slice(), 8.5, Key::Rating)
            .unwrap()
            .unwrap();
        assert!((1..=4).contains(&index));
    }

    #[test]
    fn test_checked_rejects_unsorted() {
        let records = ratings(&[5.0, 9.0, 7.0]);
        assert!(matches!(
            binary_search_checked(records.as_slice(), 7.0, Key::Rating),
            Err(Error::PreconditionViolated { key: Key::Rating, index: 0 })
        ));
    }

    #[test]
    fn test_probe_without_key() {
        let records = vec![
            Record::new("a", 9.0, Some(2001.0), 1.0, "Drama"),
            Record::new("b", 8.0, None, 1.0, "Drama"),
            Record::new("c", 7.0, Some(1999.0), 1.0, "Drama"),
        ];
        assert!(matches!(
            binary_search_iterative(&records, 2000.0, Key::Year),
            Err(Error::InvalidKey { key: Key::Year, index: 1 })
        ));
        assert!(matches!(
            binary_search_checked(&records, 2000.0, Key::Year),
            Err(Error::InvalidKey { index: 1, .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_found_iff_present(
            values in prop::collection::vec(0u8..40, 0..80),
            target in 0u8..40,
        ) {
            let mut values: Vec<f64> = values.into_iter().map(f64::from).collect();
            values.sort_by(|a, b| b.total_cmp(a));
            let records = ratings(&values);
            let target = f64::from(target);

            match binary_search_iterative(records.as_slice(), target, Key::Rating).unwrap() {
                Some(index) => prop_assert_eq!(values[index], target),
                None => prop_assert!(!values.contains(&target)),
            }
        }
    }
}
