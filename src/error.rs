//! Error types for sort-search-bench.

use thiserror::Error;

use crate::record::Key;
use crate::registry::Algorithm;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the sorts, the searcher, the harness and the loaders
#[derive(Error, Debug)]
pub enum Error {
    /// Sort range does not fit the record slice
    #[error("invalid range {low}..={high} for {len} records")]
    InvalidRange { low: usize, high: usize, len: usize },

    /// The key is absent or non-numeric on a record
    #[error("key '{key}' is missing or non-numeric on record {index}")]
    InvalidKey { key: Key, index: usize },

    /// Nothing to work with where at least one record is required
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// A recursive variant went deeper than its budget allows
    #[error("recursion depth {depth} exceeds the budget of {limit}")]
    StackExhausted { depth: usize, limit: usize },

    /// Binary search input is not descending (checked search only)
    #[error("records are not sorted descending by '{key}' at index {index}")]
    PreconditionViolated { key: Key, index: usize },

    /// Harness or CLI configuration rejected by validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed input file
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// A benchmark cell failed with an error that is not a skip
    #[error("{algorithm} failed at N={size}: {source}")]
    Cell {
        algorithm: Algorithm,
        size: usize,
        source: Box<Error>,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Pattern used by the loaders failed to compile
    #[error("regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Whether the harness may turn this error into a skip sentinel
    pub fn is_stack_exhausted(&self) -> bool {
        matches!(self, Error::StackExhausted { .. })
    }
}
