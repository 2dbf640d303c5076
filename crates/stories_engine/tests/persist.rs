use std::fs;

use stories_engine::{ensure_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("state");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_creates_parent_and_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested").join("prefs.ron");
    let writer = AtomicFileWriter::new(target.clone());

    writer.write("first").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "first");

    writer.write("second").unwrap();
    assert_eq!(fs::read_to_string(&target).unwrap(), "second");
}

#[test]
fn write_fails_when_parent_is_a_file() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let writer = AtomicFileWriter::new(blocker.join("prefs.ron"));
    assert!(writer.write("data").is_err());
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "x");
}
