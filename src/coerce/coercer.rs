//! Column type coercion

use super::convert::{number_text, to_number};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Declared semantic type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Values are presented as numbers
    Number,
    /// Values are presented as text
    String,
}

/// Converts field values to the type declared for their column.
///
/// Columns without a declaration pass through untouched. A conversion that
/// cannot produce a value of the declared type degrades to the original
/// value instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCoercer {
    types: BTreeMap<String, ValueType>,
}

impl TypeCoercer {
    /// Create a coercer with no declared columns
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coercer from a column → type map
    pub fn from_types(types: BTreeMap<String, ValueType>) -> Self {
        Self { types }
    }

    /// Declare the type of a column
    #[must_use]
    pub fn with_column(mut self, column: impl Into<String>, value_type: ValueType) -> Self {
        self.types.insert(column.into(), value_type);
        self
    }

    /// Declared type of a column, if any
    pub fn column_type(&self, column: &str) -> Option<ValueType> {
        self.types.get(column).copied()
    }

    /// Check if no column has a declared type
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Coerce a value of `column` to its declared type
    pub fn coerce<'a>(&self, column: &str, value: &'a Value) -> Cow<'a, Value> {
        match self.column_type(column) {
            None => Cow::Borrowed(value),
            Some(ValueType::Number) => coerce_number(column, value),
            Some(ValueType::String) => coerce_string(value),
        }
    }

    /// Look up `field` on a record and coerce it.
    ///
    /// Returns `None` when the record has no such field.
    pub fn field<'a>(&self, record: &'a Value, field: &str) -> Option<Cow<'a, Value>> {
        record.get(field).map(|value| self.coerce(field, value))
    }
}

fn coerce_number<'a>(column: &str, value: &'a Value) -> Cow<'a, Value> {
    if value.is_number() {
        return Cow::Borrowed(value);
    }

    match to_number(value).and_then(number_value) {
        Some(number) => Cow::Owned(Value::Number(number)),
        None => {
            tracing::debug!(
                "Column '{}': cannot coerce {} to a number, keeping original",
                column,
                value
            );
            Cow::Borrowed(value)
        }
    }
}

fn coerce_string(value: &Value) -> Cow<'_, Value> {
    let text = match value {
        Value::String(_) => return Cow::Borrowed(value),
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    };
    Cow::Owned(Value::String(text))
}

/// JSON number for a float, preferring an integer representation
fn number_value(f: f64) -> Option<Number> {
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
        Some(Number::from(f as i64))
    } else {
        Number::from_f64(f)
    }
}
