//! S4 (duplicates) from spec.md §8: inserting an already-present value is a
//! no-op, byte-for-byte.

use avlset::{Engine, FixedIntCodec};
use tempfile::tempdir;

#[test]
fn s4_duplicate_insert_is_a_no_op() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("set.bin");
    let engine = Engine::open(&path, FixedIntCodec::<i64>::new()).unwrap();

    assert!(engine.add(10).unwrap());
    let bytes_after_first = std::fs::read(&path).unwrap();

    assert!(!engine.add(10).unwrap());
    assert_eq!(engine.size().unwrap(), 1);

    let bytes_after_second = std::fs::read(&path).unwrap();
    assert_eq!(bytes_after_first, bytes_after_second);
}

#[test]
fn duplicates_across_a_larger_set_are_all_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("set.bin");
    let engine = Engine::open(&path, FixedIntCodec::<i64>::new()).unwrap();

    for value in [5, 3, 8, 1, 4, 7, 9] {
        assert!(engine.add(value).unwrap());
    }
    let bytes_before = std::fs::read(&path).unwrap();

    for value in [5, 3, 8, 1, 4, 7, 9] {
        assert!(!engine.add(value).unwrap());
    }

    assert_eq!(engine.size().unwrap(), 7);
    assert_eq!(std::fs::read(&path).unwrap(), bytes_before);
}
