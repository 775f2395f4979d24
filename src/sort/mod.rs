//! Sort module
//!
//! Orders records by a single field with automatic detection of numeric,
//! textual and date-like values.
//!
//! # Overview
//!
//! Every field value is classified once into a [`SortKey`] before any
//! reordering happens:
//! - numbers and numeric strings compare numerically
//! - two date-like texts compare chronologically
//! - any other pair of texts compares lexically, case-insensitively
//! - a number against a text compares equal
//!
//! Missing and falsy values read as the number `0`. Objects and arrays
//! cannot be classified and fail the whole sort.

mod comparator;
mod types;

pub use comparator::{compare, compare_keys, sort_key, sort_records};
pub use types::{parse_date, SortDirection, SortKey, SortSpec};

#[cfg(test)]
mod tests;
