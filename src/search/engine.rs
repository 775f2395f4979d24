//! Search engine implementation

use super::types::SearchMode;
use crate::coerce::scalar_text;
use crate::error::{Error, Result};
use crate::types::Record;
use serde_json::Value;
use std::borrow::Borrow;

/// A prepared, lowercased search needle.
///
/// A record matches when any top-level field matches:
/// - a scalar matches when its text contains the needle
/// - an object (or array, keyed by index) matches when any of its keys or
///   scalar values contains the needle
///
/// `null` has no text and never matches a non-empty needle. An empty needle
/// matches every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchEngine {
    needle: String,
}

impl SearchEngine {
    /// Create an engine for `text`
    pub fn new(text: &str) -> Self {
        Self {
            needle: text.to_lowercase(),
        }
    }

    /// The lowercased needle
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Check if the needle is empty
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check whether a record matches.
    ///
    /// Scanning stops at the first matching field. Values nested deeper than
    /// one level are an error when the scan reaches them.
    pub fn matches(&self, record: &Record) -> Result<bool> {
        if self.needle.is_empty() {
            return Ok(true);
        }

        let Value::Object(fields) = record else {
            return Ok(false);
        };

        for (field, value) in fields {
            let matched = match value {
                Value::Object(map) => {
                    self.nested_matches(field, map.iter().map(|(k, v)| (k.as_str(), v)))?
                }
                Value::Array(items) => {
                    let keys: Vec<String> = (0..items.len()).map(|i| i.to_string()).collect();
                    self.nested_matches(field, keys.iter().map(String::as_str).zip(items))?
                }
                scalar => self.text_matches(scalar),
            };

            if matched {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Filter records, keeping matches or their complement.
    ///
    /// Output order follows input order. Any failure aborts the whole call.
    pub fn filter<R>(&self, records: &[R], mode: SearchMode) -> Result<Vec<R>>
    where
        R: Borrow<Record> + Clone,
    {
        let mut kept = Vec::new();
        for record in records {
            let matched = self.matches(record.borrow())?;
            if matched == mode.includes_matches() {
                kept.push(record.clone());
            }
        }

        tracing::trace!(
            "Search '{}' ({:?}) kept {} of {} records",
            self.needle,
            mode,
            kept.len(),
            records.len()
        );

        Ok(kept)
    }

    fn nested_matches<'a>(
        &self,
        field: &str,
        entries: impl Iterator<Item = (&'a str, &'a Value)>,
    ) -> Result<bool> {
        for (key, value) in entries {
            if key.to_lowercase().contains(&self.needle) {
                return Ok(true);
            }
            if matches!(value, Value::Object(_) | Value::Array(_)) {
                return Err(Error::search(format!(
                    "field '{field}.{key}' is nested more than one level deep"
                )));
            }
            if self.text_matches(value) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn text_matches(&self, value: &Value) -> bool {
        scalar_text(value).is_some_and(|text| text.to_lowercase().contains(&self.needle))
    }
}

/// Search `records` for `needle` in one call.
///
/// Shorthand for [`SearchEngine::new`] followed by [`SearchEngine::filter`].
pub fn search<R>(records: &[R], needle: &str, mode: SearchMode) -> Result<Vec<R>>
where
    R: Borrow<Record> + Clone,
{
    SearchEngine::new(needle).filter(records, mode)
}
