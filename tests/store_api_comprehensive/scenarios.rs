//! Fixed Scenario Tests
//!
//! Small deterministic insertion sequences with known expected shapes,
//! covering each rebalancing case and the empty store.

use super::*;
use rosterdb::Error;

#[test]
fn test_scenario_mixed_inserts_stay_shallow() {
    // 30, 20, 40, 10: no rotation needed, four records fit in height 3
    let store = store_with(&[
        (30, "thirty", 3.0),
        (20, "twenty", 2.0),
        (40, "forty", 4.0),
        (10, "ten", 1.0),
    ]);

    assert_eq!(store.len(), 4);
    assert!(store.height() <= 3);
    assert_eq!(scanned_ids(&store), vec![10, 20, 30, 40]);
}

#[test]
fn test_scenario_ascending_triple_triggers_rotation() {
    // 10, 20, 30 arrives fully skewed; one rotation makes 20 the root,
    // observable from outside as height 2 instead of 3
    let store = store_with(&[(10, "a", 1.0), (20, "b", 2.0), (30, "c", 3.0)]);

    assert_eq!(store.height(), 2);
    assert_eq!(scanned_ids(&store), vec![10, 20, 30]);
}

#[test]
fn test_scenario_descending_triple_triggers_rotation() {
    let store = store_with(&[(30, "c", 3.0), (20, "b", 2.0), (10, "a", 1.0)]);

    assert_eq!(store.height(), 2);
    assert_eq!(scanned_ids(&store), vec![10, 20, 30]);
}

#[test]
fn test_scenario_duplicate_id_keeps_first_record() {
    let mut store = RecordStore::new();
    store.insert(Record::new(5, "original", 50.0)).unwrap();

    let err = store.insert(Record::new(5, "impostor", 99.0)).unwrap_err();
    assert!(matches!(err, Error::DuplicateId(_)));

    let found = store.get(5).expect("first record must survive");
    assert_eq!(found.name, "original");
    assert_eq!(found.score, 50.0);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_scenario_empty_store() {
    let store = RecordStore::new();

    assert!(store.is_empty());
    assert_eq!(store.height(), 0);
    for probe in [-1, 0, 1, i64::MAX, i64::MIN] {
        assert!(store.get(probe).is_none());
    }
    assert!(store.scan_sorted().is_empty());
}

#[test]
fn test_scenario_fifty_ascending_inserts_search_within_bound() {
    let mut store = RecordStore::new();
    for id in 1..=50 {
        store.insert(Record::new(id, format!("r{id}"), id as f64)).unwrap();
    }

    // Every search walks at most `height` comparisons, and the height
    // stays under the AVL worst-case bound for 50 records
    assert!(store.height() <= avl_height_bound(50));

    for id in 1..=50 {
        let found = store.get(id).expect("all fifty ids must be found");
        assert_eq!(found.id.as_i64(), id);
    }
    assert_eq!(scanned_ids(&store), (1..=50).collect::<Vec<_>>());
}
