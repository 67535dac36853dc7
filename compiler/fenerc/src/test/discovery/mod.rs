//! Test file discovery.
//!
//! Every `.fn` file may hold `test` blocks, so every one is a candidate.

use std::fs;
use std::path::{Path, PathBuf};

use crate::SOURCE_EXTENSION;

/// A discovered source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestFile {
    pub path: PathBuf,
}

impl TestFile {
    pub fn new(path: PathBuf) -> Self {
        TestFile { path }
    }
}

fn is_source(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == SOURCE_EXTENSION)
}

/// All `.fn` files under `root`, sorted by path.
pub fn discover_tests(root: &Path) -> Vec<TestFile> {
    let mut files = Vec::new();
    discover_recursive(root, &mut files);
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files
}

fn discover_recursive(dir: &Path, files: &mut Vec<TestFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();

        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
        if name.starts_with('.') {
            continue;
        }

        if path.is_dir() {
            if name == "target" {
                continue;
            }
            discover_recursive(&path, files);
        } else if is_source(&path) {
            files.push(TestFile::new(path));
        }
    }
}

/// A single file if `path` is one, otherwise everything under the directory.
pub fn discover_tests_in(path: &Path) -> Vec<TestFile> {
    if path.is_file() {
        if is_source(path) {
            vec![TestFile::new(path.to_path_buf())]
        } else {
            vec![]
        }
    } else if path.is_dir() {
        discover_tests(path)
    } else {
        vec![]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
