//! Unit tests for request parameter handling.

use chrono::NaiveDate;

use super::Params;

#[test]
fn numeric_values_serialize_as_strings() {
    let params = Params::new().with("id", 42_u64).with("page", 3_i32);
    let pairs: Vec<_> = params.iter().collect();
    assert_eq!(pairs, vec![("id", "42"), ("page", "3")]);
}

#[test]
fn boolean_values_serialize_as_strings() {
    let params = Params::new().with("isLocked", true);
    assert_eq!(params.iter().next(), Some(("isLocked", "true")));
}

#[test]
fn dates_serialize_in_iso_format() {
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date");
    let params = Params::new().with("since", date);
    assert_eq!(params.iter().next(), Some(("since", "2026-01-15")));
}

#[test]
fn take_consumes_the_value() {
    let mut params = Params::new().with("id", 7_u64).with("limit", 25_u64);
    assert_eq!(params.take("id"), Some("7".to_string()));
    assert_eq!(params.take("id"), None);

    let remaining: Vec<_> = params.iter().collect();
    assert_eq!(remaining, vec![("limit", "25")]);
}

#[test]
fn iteration_preserves_insertion_order() {
    let params = Params::new()
        .with("from", "2026-01-01")
        .with("to", "2026-02-01")
        .with("format", "csv");
    let keys: Vec<_> = params.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["from", "to", "format"]);
}
