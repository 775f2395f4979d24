//! Type coercion module
//!
//! Converts raw record values into declared column types and provides the
//! loose number/text conversions shared by sorting and searching.
//!
//! # Overview
//!
//! - `TypeCoercer` - Applies a column → `ValueType` map to field values
//! - `to_number` / `parse_number` - Loose numeric conversion of JSON values
//! - `scalar_text` - Display text of a scalar JSON value

mod coercer;
mod convert;

pub use coercer::{TypeCoercer, ValueType};
pub use convert::{is_falsy, number_text, parse_number, scalar_text, to_number};
