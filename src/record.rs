//! Film records, sort keys and the record set the algorithms reorder.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One film row. `rating` and `votes` are always numeric once loaded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub title: String,
    pub rating: f64,
    pub year: Option<f64>,
    pub votes: f64,
    pub genre: String,
}

impl Record {
    pub fn new(
        title: impl Into<String>,
        rating: f64,
        year: Option<f64>,
        votes: f64,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            rating,
            year,
            votes,
            genre: genre.into(),
        }
    }
}

/// Numeric field a sort or search operates on
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    #[default]
    Rating,
    Votes,
    Year,
}

impl Key {
    pub const ALL: [Key; 3] = [Key::Rating, Key::Votes, Key::Year];

    pub fn name(&self) -> &'static str {
        match self {
            Key::Rating => "rating",
            Key::Votes => "votes",
            Key::Year => "year",
        }
    }

    /// Numeric value of this key on `record`, `None` when absent or NaN.
    pub fn value(&self, record: &Record) -> Option<f64> {
        let raw = match self {
            Key::Rating => Some(record.rating),
            Key::Votes => Some(record.votes),
            Key::Year => record.year,
        };
        raw.filter(|v| !v.is_nan())
    }

    /// Raw read for the sort inner loops. Callers validate with [`Key::check`] first.
    #[inline(always)]
    pub(crate) fn read(&self, record: &Record) -> f64 {
        match self {
            Key::Rating => record.rating,
            Key::Votes => record.votes,
            Key::Year => record.year.unwrap_or(f64::NAN),
        }
    }

    /// Ensure every record in `records` carries this key.
    /// `offset` is added to reported indices when `records` is a sub-slice.
    pub fn check(&self, records: &[Record], offset: usize) -> Result<()> {
        match records.iter().position(|r| self.value(r).is_none()) {
            Some(index) => Err(Error::InvalidKey {
                key: *self,
                index: offset + index,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Key {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Key::ALL
            .into_iter()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                Error::InvalidConfig(format!(
                    "unknown key '{}' (expected rating, votes or year)",
                    s
                ))
            })
    }
}

/// Ordered, mutable collection of records under test
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.records
    }

    pub fn as_mut_slice(&mut self) -> &mut [Record] {
        &mut self.records
    }

    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Benchmark test data of exactly `n` records: the first `n` when the
    /// source is large enough, otherwise the source repeated cyclically and
    /// truncated to `n`.
    pub fn sample(&self, n: usize) -> Result<RecordSet> {
        if n > 0 && self.is_empty() {
            return Err(Error::EmptyInput(format!(
                "cannot build {} records from an empty source",
                n
            )));
        }
        Ok(self.records.iter().cycle().take(n).cloned().collect())
    }

    /// Projection of the key column; absent values are skipped.
    pub fn key_values(&self, key: Key) -> Vec<f64> {
        self.records.iter().filter_map(|r| key.value(r)).collect()
    }

    /// First index `i` where `records[i] < records[i + 1]` by `key`.
    pub fn first_ascent(&self, key: Key) -> Option<usize> {
        first_ascent(&self.records, key)
    }

    pub fn is_descending(&self, key: Key) -> bool {
        self.first_ascent(key).is_none()
    }

    /// Seeded random film records, ratings with one decimal in 1.0..=10.0.
    pub fn synthetic(n: usize, seed: u64) -> RecordSet {
        const GENRES: [&str; 6] = ["Drama", "Comedy", "Action", "Horror", "Sci-Fi", "Romance"];

        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|i| {
                let rating = f64::from(rng.random_range(10u32..=100)) / 10.0;
                let year = f64::from(rng.random_range(1950u32..=2024));
                let votes = f64::from(rng.random_range(100u32..=2_500_000));
                let genre = GENRES[rng.random_range(0..GENRES.len())];
                Record::new(format!("Film #{}", i + 1), rating, Some(year), votes, genre)
            })
            .collect()
    }
}

pub(crate) fn first_ascent(records: &[Record], key: Key) -> Option<usize> {
    records
        .windows(2)
        .position(|w| match (key.value(&w[0]), key.value(&w[1])) {
            (Some(a), Some(b)) => a < b,
            _ => true,
        })
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
pub(crate) fn ratings(values: &[f64]) -> RecordSet {
    values
        .iter()
        .enumerate()
        .map(|(i, &r)| {
            let year = Some(2000.0 + i as f64);
            Record::new(format!("r{}", i), r, year, (i as f64 + 1.0) * 10.0, "Drama")
        })
        .collect()
}
