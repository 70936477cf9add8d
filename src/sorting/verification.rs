//! Shared fixtures and checks for verifying the sort variants.

use crate::record::{Key, Record, RecordSet};

fn ramp(n: usize, value: impl Fn(usize) -> f64) -> RecordSet {
    (0..n)
        .map(|i| {
            let v = value(i);
            Record::new(format!("ramp {}", i), v, Some(v), v * 10.0, "Drama")
        })
        .collect()
}

/// Named inputs every sort family is verified against
pub(crate) fn verification_inputs() -> Vec<(&'static str, RecordSet)> {
    let cycled = RecordSet::synthetic(40, 0xc0ffee)
        .sample(300)
        .unwrap_or_default();

    vec![
        ("random", RecordSet::synthetic(257, 0x5eed)),
        ("cycled", cycled),
        ("ascending", ramp(200, |i| i as f64)),
        ("descending", ramp(200, |i| (200 - i) as f64)),
        ("all-equal", ramp(64, |_| 5.0)),
        ("organ-pipe", ramp(101, |i| (50i64 - i as i64).abs() as f64)),
        ("pair", ramp(2, |i| i as f64)),
        ("single", ramp(1, |_| 1.0)),
        ("empty", RecordSet::new()),
    ]
}

fn fingerprint(set: &RecordSet) -> Vec<(String, u64, u64)> {
    let mut prints: Vec<_> = set
        .iter()
        .map(|r| (r.title.clone(), r.rating.to_bits(), r.votes.to_bits()))
        .collect();
    prints.sort();
    prints
}

/// `output` must be `input` reordered into non-increasing key order.
pub(crate) fn check_sorted(
    name: &str,
    input: &RecordSet,
    output: &RecordSet,
    key: Key,
) -> std::result::Result<(), String> {
    if let Some(index) = output.first_ascent(key) {
        return Err(format!(
            "{}: output is not descending by {} at index {}",
            name, key, index
        ));
    }

    let mut expected = input.key_values(key);
    expected.sort_by(|a, b| b.total_cmp(a));
    if output.key_values(key) != expected {
        return Err(format!("{}: {} values differ from the reference order", name, key));
    }

    if fingerprint(input) != fingerprint(output) {
        return Err(format!("{}: output is not a permutation of the input", name));
    }

    Ok(())
}
