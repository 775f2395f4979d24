//! Common types used throughout pagewise
//!
//! This module contains shared type aliases used across multiple modules.

use std::sync::Arc;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single record of the data pool.
///
/// Records are JSON objects whose values are scalars or one level of nested
/// objects. The engine never mutates a record, it only reorders or filters.
pub type Record = JsonValue;

/// A record shared between the result set and the search result set.
///
/// Search results point at the same allocation as the result set entry they
/// were taken from, so `Arc::ptr_eq` is the identity check between the two.
pub type SharedRecord = Arc<Record>;

/// Wrap plain records into shared records
pub fn share_records(records: impl IntoIterator<Item = Record>) -> Vec<SharedRecord> {
    records.into_iter().map(Arc::new).collect()
}
