//! S6 (neighbor edges) from spec.md §8, exercised through the public API.

use avlset::{Engine, FixedIntCodec};
use tempfile::tempdir;

#[test]
fn s6_neighbor_edges() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("set.bin");
    let engine = Engine::open(&path, FixedIntCodec::<i64>::new()).unwrap();

    for value in [50i64, 100, 150, 200] {
        assert!(engine.add(value).unwrap());
    }

    assert_eq!(engine.higher(&100i64).unwrap(), Some(150));
    assert_eq!(engine.ceiling(&100i64).unwrap(), Some(100));
    assert_eq!(engine.floor(&100i64).unwrap(), Some(100));
    assert_eq!(engine.higher(&200i64).unwrap(), None);
    assert_eq!(engine.ceiling(&201i64).unwrap(), None);
    assert_eq!(engine.floor(&49i64).unwrap(), None);
    assert_eq!(engine.floor(&50i64).unwrap(), Some(50));
}

#[test]
fn membership_agrees_with_what_was_inserted() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("set.bin");
    let engine = Engine::open(&path, FixedIntCodec::<i64>::new()).unwrap();

    let inserted: Vec<i64> = vec![17, 3, 42, -5, 100, 0];
    for &value in &inserted {
        engine.add(value).unwrap();
    }

    for &value in &inserted {
        assert!(engine.contains(&value).unwrap());
    }
    for probe in [1i64, 2, 16, 18, 41, 43, -6, 101] {
        assert!(!engine.contains(&probe).unwrap());
    }
}

#[test]
fn reopening_an_existing_file_trusts_the_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("set.bin");

    {
        let engine = Engine::open(&path, FixedIntCodec::<i64>::new()).unwrap();
        for value in [4, 2, 6, 1, 3, 5, 7] {
            engine.add(value).unwrap();
        }
        engine.close().unwrap();
    }

    let engine = Engine::open(&path, FixedIntCodec::<i64>::new()).unwrap();
    assert_eq!(engine.size().unwrap(), 7);
    assert_eq!(engine.first().unwrap(), 1);
    assert_eq!(engine.last().unwrap(), 7);
    assert!(engine.contains(&5).unwrap());
    assert!(!engine.add(4).unwrap());
}
