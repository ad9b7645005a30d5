mod common;

use common::build_test_kingdom;
use kingdom_engine::flush::{read_snapshot, write_snapshot};

#[test]
fn kingdom_snapshot_round_trips_through_json() {
    let kingdom = build_test_kingdom();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kingdom.json");

    write_snapshot(&kingdom, &path).unwrap();
    let back = read_snapshot(&path).unwrap();

    assert_eq!(back, kingdom);
}

#[test]
fn reading_a_missing_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    assert!(read_snapshot(&path).is_err());
}
