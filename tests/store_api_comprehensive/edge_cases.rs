//! Edge Case Tests
//!
//! Boundary behavior: name clamping, extreme ids, unusual scores, and
//! serde round-trips of stored records.

use super::*;
use rosterdb::{Limits, RecordId};

// =============================================================================
// NAME CLAMPING
// =============================================================================

#[test]
fn test_long_name_is_silently_clamped() {
    let mut store = RecordStore::new();
    let long = "n".repeat(1000);

    // Over-long names are accepted, never rejected
    store.insert(Record::new(1, long, 1.0)).unwrap();

    let stored = store.get(1).unwrap();
    assert_eq!(stored.name.len(), Limits::default().max_name_bytes);
    assert!(stored.name.chars().all(|c| c == 'n'));
}

#[test]
fn test_name_at_exact_limit_is_preserved() {
    let mut store = RecordStore::new();
    let exact = "n".repeat(Limits::default().max_name_bytes);

    store.insert(Record::new(1, exact.clone(), 1.0)).unwrap();
    assert_eq!(store.get(1).unwrap().name, exact);
}

#[test]
fn test_multibyte_name_clamps_on_char_boundary() {
    let mut store = RecordStore::with_limits(Limits { max_name_bytes: 10 });
    // Four three-byte chars: only three fit in ten bytes
    store.insert(Record::new(1, "妙妙妙妙", 0.0)).unwrap();

    let stored = store.get(1).unwrap();
    assert_eq!(stored.name, "妙妙妙");
    assert!(stored.name.len() <= 10);
}

#[test]
fn test_empty_name_is_fine() {
    let mut store = RecordStore::new();
    store.insert(Record::new(1, "", 0.0)).unwrap();
    assert_eq!(store.get(1).unwrap().name, "");
}

// =============================================================================
// EXTREME KEYS AND SCORES
// =============================================================================

#[test]
fn test_extreme_ids_sort_correctly() {
    let store = store_with(&[
        (i64::MAX, "max", 1.0),
        (0, "zero", 0.0),
        (i64::MIN, "min", -1.0),
        (-1, "neg", 0.5),
    ]);

    assert_eq!(scanned_ids(&store), vec![i64::MIN, -1, 0, i64::MAX]);
}

#[test]
fn test_score_has_no_range_constraint() {
    let mut store = RecordStore::new();
    store.insert(Record::new(1, "inf", f64::INFINITY)).unwrap();
    store.insert(Record::new(2, "neg", f64::NEG_INFINITY)).unwrap();
    store.insert(Record::new(3, "nan", f64::NAN)).unwrap();
    store.insert(Record::new(4, "tiny", f64::MIN_POSITIVE)).unwrap();

    assert_eq!(store.get(1).unwrap().score, f64::INFINITY);
    assert_eq!(store.get(2).unwrap().score, f64::NEG_INFINITY);
    assert!(store.get(3).unwrap().score.is_nan());
    assert_eq!(store.get(4).unwrap().score, f64::MIN_POSITIVE);
}

// =============================================================================
// SERDE ROUND-TRIP
// =============================================================================

#[test]
fn test_stored_record_serde_roundtrip() {
    let store = store_with(&[(12, "Grace Hopper", 88.25)]);
    let stored = store.get(12).unwrap();

    let json = serde_json::to_string(stored).unwrap();
    let back: Record = serde_json::from_str(&json).unwrap();

    assert_eq!(&back, stored);
    assert_eq!(back.id, RecordId::new(12));
}
