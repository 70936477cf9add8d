//! Searching over sorted records.

pub mod binary_search;
