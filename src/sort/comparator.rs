//! Record comparator and full-pool sort

use super::types::{SortDirection, SortKey, SortSpec};
use crate::coerce::{is_falsy, parse_number, to_number};
use crate::error::{Error, Result};
use crate::types::Record;
use serde_json::Value;
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Classify the value of `field` on a record.
///
/// Missing and falsy values read as `0`. Values with a numeric reading are
/// numeric, other scalars are text. Objects and arrays are an error.
pub fn sort_key(record: &Record, field: &str) -> Result<SortKey> {
    let value = record.get(field);
    if is_falsy(value) {
        return Ok(SortKey::Numeric(0.0));
    }

    match value {
        Some(Value::Object(_)) => Err(Error::sort(format!(
            "field '{field}' holds an object, which has no sortable text"
        ))),
        Some(Value::Array(_)) => Err(Error::sort(format!(
            "field '{field}' holds an array, which has no sortable text"
        ))),
        Some(Value::String(s)) => Ok(match parse_number(s) {
            Some(n) => SortKey::Numeric(n),
            None => SortKey::from_text(s),
        }),
        Some(other) => Ok(SortKey::Numeric(to_number(other).unwrap_or(0.0))),
        None => Ok(SortKey::Numeric(0.0)),
    }
}

/// Compare two classified keys in the given direction.
///
/// `Desc` swaps the operands rather than reversing the result.
pub fn compare_keys(a: &SortKey, b: &SortKey, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ascending(a, b),
        SortDirection::Desc => ascending(b, a),
    }
}

fn ascending(a: &SortKey, b: &SortKey) -> Ordering {
    match (a, b) {
        (SortKey::DateLike { at: x, .. }, SortKey::DateLike { at: y, .. }) => x.cmp(y),
        (SortKey::Numeric(x), SortKey::Numeric(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        // A number against text has no numeric difference: treated as a tie
        (SortKey::Numeric(_), _) | (_, SortKey::Numeric(_)) => Ordering::Equal,
        // Code-point order of the lowercased text
        _ => match (a.text(), b.text()) {
            (Some(x), Some(y)) => x.cmp(y),
            _ => Ordering::Equal,
        },
    }
}

/// Compare two records on `field`
pub fn compare(a: &Record, b: &Record, field: &str, direction: SortDirection) -> Result<Ordering> {
    let key_a = sort_key(a, field)?;
    let key_b = sort_key(b, field)?;
    Ok(compare_keys(&key_a, &key_b, direction))
}

/// Sort a sequence of records into a new vector.
///
/// Every key is classified before anything moves, so a failure leaves no
/// partial order behind. Equal records keep their relative order.
pub fn sort_records<R>(records: &[R], spec: &SortSpec) -> Result<Vec<R>>
where
    R: Borrow<Record> + Clone,
{
    let keys = records
        .iter()
        .map(|record| sort_key(record.borrow(), &spec.field))
        .collect::<Result<Vec<_>>>()?;

    let mut order: Vec<usize> = (0..records.len()).collect();
    let mut by_key = |i: &usize, j: &usize| compare_keys(&keys[*i], &keys[*j], spec.direction);
    merge_sort_by(&mut order, &mut by_key);

    tracing::trace!(
        "Sorted {} records by '{}' {}",
        records.len(),
        spec.field,
        spec.direction
    );

    Ok(order.into_iter().map(|i| records[i].clone()).collect())
}

/// Stable merge sort.
///
/// Number-against-text ties make the order non-transitive, and the standard
/// library sorts may panic on that. This merge accepts any comparison result.
fn merge_sort_by<T, F>(items: &mut Vec<T>, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= 1 {
        return;
    }

    let mut right = items.split_off(items.len() / 2);
    let mut left = std::mem::take(items);
    merge_sort_by(&mut left, compare);
    merge_sort_by(&mut right, compare);

    items.reserve(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        items.extend(next);
    }
}
