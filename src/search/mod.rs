//! Search module
//!
//! Case-insensitive free-text search over every field of every record,
//! including the keys and values of objects nested one level deep.
//!
//! # Overview
//!
//! - `SearchEngine` - A prepared needle that tests and filters records
//! - `SearchMode` - Keep the matching records or their complement

mod engine;
mod types;

pub use engine::{search, SearchEngine};
pub use types::SearchMode;
