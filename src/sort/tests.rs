//! Tests for sort module

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::cmp::Ordering;
use std::sync::Arc;

fn field_values(records: &[Value], field: &str) -> Vec<Value> {
    records.iter().map(|r| r[field].clone()).collect()
}

// ============================================================================
// SortDirection / SortSpec Tests
// ============================================================================

#[test]
fn test_direction_flip_and_parse() {
    assert_eq!(SortDirection::Asc.flipped(), SortDirection::Desc);
    assert_eq!(SortDirection::Desc.flipped(), SortDirection::Asc);
    assert_eq!("DESC".parse::<SortDirection>(), Ok(SortDirection::Desc));
    assert!("sideways".parse::<SortDirection>().is_err());
    assert_eq!(SortDirection::default(), SortDirection::Asc);
}

#[test]
fn test_sort_spec_deserialize_default_direction() {
    let spec: SortSpec = serde_json::from_value(json!({"field": "name"})).unwrap();
    assert_eq!(spec, SortSpec::asc("name"));
}

// ============================================================================
// Classification Tests
// ============================================================================

#[test]
fn test_sort_key_classification() {
    let record = json!({
        "n": 5,
        "s": "10",
        "t": "  Banana",
        "d": "2023-01-01",
        "zero": 0,
        "empty": "",
        "null": null,
        "flag": true
    });

    assert_eq!(sort_key(&record, "n").unwrap(), SortKey::Numeric(5.0));
    assert_eq!(sort_key(&record, "s").unwrap(), SortKey::Numeric(10.0));
    assert_eq!(
        sort_key(&record, "t").unwrap(),
        SortKey::Textual("banana".to_string())
    );
    assert!(matches!(
        sort_key(&record, "d").unwrap(),
        SortKey::DateLike { ref text, .. } if text == "2023-01-01"
    ));
    assert_eq!(sort_key(&record, "zero").unwrap(), SortKey::Numeric(0.0));
    assert_eq!(sort_key(&record, "empty").unwrap(), SortKey::Numeric(0.0));
    assert_eq!(sort_key(&record, "null").unwrap(), SortKey::Numeric(0.0));
    assert_eq!(sort_key(&record, "missing").unwrap(), SortKey::Numeric(0.0));
    assert_eq!(sort_key(&record, "flag").unwrap(), SortKey::Numeric(1.0));
}

#[test]
fn test_sort_key_rejects_composites() {
    let record = json!({"obj": {"a": "b"}, "arr": ["x"]});

    assert!(matches!(sort_key(&record, "obj"), Err(Error::Sort { .. })));
    assert!(matches!(sort_key(&record, "arr"), Err(Error::Sort { .. })));
}

#[test]
fn test_parse_date_layouts() {
    assert!(parse_date("2022-06-15").is_some());
    assert!(parse_date("2022-06-15T10:30:00Z").is_some());
    assert!(parse_date("2022-06-15T10:30:00.250+02:00").is_some());
    assert!(parse_date("2022-06-15 10:30").is_some());
    assert!(parse_date("2022/06/15").is_some());
    assert!(parse_date("06/15/2022").is_some());
    assert!(parse_date("Jun 15 2022").is_some());
    assert!(parse_date("June 15, 2022").is_some());
    assert!(parse_date("15 Jun 2022").is_some());

    assert!(parse_date("banana").is_none());
    assert!(parse_date("").is_none());
    assert!(parse_date("2022-13-45").is_none());
}

#[test]
fn test_parse_date_normalizes_offsets() {
    let utc = parse_date("2022-06-15T10:00:00Z").unwrap();
    let shifted = parse_date("2022-06-15T12:00:00+02:00").unwrap();
    assert_eq!(utc, shifted);
}

// ============================================================================
// Comparator Tests
// ============================================================================

#[test]
fn test_numeric_strings_sort_numerically() {
    let records = vec![json!({"f": "10"}), json!({"f": "9"})];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(field_values(&sorted, "f"), vec![json!("9"), json!("10")]);
}

#[test]
fn test_text_sorts_case_insensitively() {
    let records = vec![json!({"f": "banana"}), json!({"f": "Apple"})];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(field_values(&sorted, "f"), vec![json!("Apple"), json!("banana")]);
}

#[test]
fn test_leading_whitespace_ignored() {
    let records = vec![json!({"f": "beta"}), json!({"f": "   alpha"})];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(field_values(&sorted, "f"), vec![json!("   alpha"), json!("beta")]);
}

#[test]
fn test_dates_sort_chronologically() {
    let records = vec![json!({"f": "2023-01-01"}), json!({"f": "2022-06-15"})];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(
        field_values(&sorted, "f"),
        vec![json!("2022-06-15"), json!("2023-01-01")]
    );

    let sorted = sort_records(&records, &SortSpec::desc("f")).unwrap();
    assert_eq!(
        field_values(&sorted, "f"),
        vec![json!("2023-01-01"), json!("2022-06-15")]
    );
}

#[test]
fn test_dates_in_mixed_layouts_sort_chronologically() {
    // Lexically "jan" sorts before "mar", chronologically 2021 comes first
    let records = vec![json!({"f": "Jan 10 2024"}), json!({"f": "Mar 3 2021"})];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(
        field_values(&sorted, "f"),
        vec![json!("Mar 3 2021"), json!("Jan 10 2024")]
    );
}

#[test]
fn test_date_against_plain_text_is_lexical() {
    let a = json!({"f": "2023-01-01"});
    let b = json!({"f": "zebra"});
    assert_eq!(compare(&a, &b, "f", SortDirection::Asc).unwrap(), Ordering::Less);
    assert_eq!(compare(&b, &a, "f", SortDirection::Asc).unwrap(), Ordering::Greater);
}

#[test]
fn test_number_against_text_compares_equal() {
    let a = json!({"f": 5});
    let b = json!({"f": "apple"});

    assert_eq!(compare(&a, &b, "f", SortDirection::Asc).unwrap(), Ordering::Equal);
    assert_eq!(compare(&b, &a, "f", SortDirection::Desc).unwrap(), Ordering::Equal);
}

#[test]
fn test_desc_swaps_operands() {
    let a = json!({"f": 1});
    let b = json!({"f": 2});
    assert_eq!(compare(&a, &b, "f", SortDirection::Asc).unwrap(), Ordering::Less);
    assert_eq!(compare(&a, &b, "f", SortDirection::Desc).unwrap(), Ordering::Greater);
    assert_eq!(compare(&a, &a, "f", SortDirection::Desc).unwrap(), Ordering::Equal);
}

#[test]
fn test_missing_values_sort_as_zero() {
    let records = vec![json!({"f": 3}), json!({}), json!({"f": -2})];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(sorted, vec![json!({"f": -2}), json!({}), json!({"f": 3})]);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let records = vec![
        json!({"f": 1, "id": "a"}),
        json!({"f": 0, "id": "b"}),
        json!({"f": 1, "id": "c"}),
        json!({"f": 0, "id": "d"}),
    ];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(
        field_values(&sorted, "id"),
        vec![json!("b"), json!("d"), json!("a"), json!("c")]
    );
}

#[test]
fn test_mixed_pool_does_not_panic() {
    let records: Vec<Value> = (0..64)
        .map(|i| {
            if i % 3 == 0 {
                json!({"f": format!("word{i}")})
            } else {
                json!({"f": i})
            }
        })
        .collect();

    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(sorted.len(), records.len());
}

#[test]
fn test_sort_failure_reports_field() {
    let records = vec![json!({"f": 1}), json!({"f": {"nested": true}})];
    let err = sort_records(&records, &SortSpec::asc("f")).unwrap_err();
    assert!(err.to_string().starts_with("Sort failed:"));
    assert!(err.to_string().contains("'f'"));
}

#[test]
fn test_sort_shared_records_keeps_identity() {
    let records: Vec<Arc<Value>> = vec![Arc::new(json!({"f": 2})), Arc::new(json!({"f": 1}))];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert!(Arc::ptr_eq(&sorted[0], &records[1]));
    assert!(Arc::ptr_eq(&sorted[1], &records[0]));
}

#[test]
fn test_text_orders_by_code_point() {
    let records = vec![json!({"f": "éclair"}), json!({"f": "Zebra"}), json!({"f": "apple"})];
    let sorted = sort_records(&records, &SortSpec::asc("f")).unwrap();
    assert_eq!(
        field_values(&sorted, "f"),
        vec![json!("apple"), json!("Zebra"), json!("éclair")]
    );
}
