use std::fs::{self, File};

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use super::*;

#[test]
fn test_discover_empty_dir() {
    let dir = tempdir().unwrap();
    assert!(discover_tests(dir.path()).is_empty());
}

#[test]
fn test_discover_only_source_files() {
    let dir = tempdir().unwrap();
    File::create(dir.path().join("one.fn")).unwrap();
    File::create(dir.path().join("two.fn")).unwrap();
    File::create(dir.path().join("notes.txt")).unwrap();

    assert_eq!(discover_tests(dir.path()).len(), 2);
}

#[test]
fn test_discover_recursive_and_sorted() {
    let dir = tempdir().unwrap();
    let sub = dir.path().join("nested");
    fs::create_dir(&sub).unwrap();
    File::create(sub.join("b.fn")).unwrap();
    File::create(dir.path().join("a.fn")).unwrap();

    let files = discover_tests(dir.path());
    assert_eq!(
        files,
        [
            TestFile::new(dir.path().join("a.fn")),
            TestFile::new(sub.join("b.fn")),
        ]
    );
}

#[test]
fn test_skip_hidden_and_target() {
    let dir = tempdir().unwrap();
    for skipped in [".git", "target"] {
        let sub = dir.path().join(skipped);
        fs::create_dir(&sub).unwrap();
        File::create(sub.join("ignored.fn")).unwrap();
    }
    File::create(dir.path().join(".hidden.fn")).unwrap();
    File::create(dir.path().join("kept.fn")).unwrap();

    let files = discover_tests(dir.path());
    assert_eq!(files, [TestFile::new(dir.path().join("kept.fn"))]);
}

#[test]
fn test_discover_in_single_file() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("only.fn");
    File::create(&file).unwrap();
    let other = dir.path().join("readme.md");
    File::create(&other).unwrap();

    assert_eq!(discover_tests_in(&file), [TestFile::new(file.clone())]);
    assert!(discover_tests_in(&other).is_empty());
    assert!(discover_tests_in(&dir.path().join("missing")).is_empty());
}
