//! Filesystem scanning for the index builders.
//!
//! Two entry points: [`scan_tree`] recursively enumerates every regular file
//! under a root (pages), and [`glob_match`] expands a shell-glob pattern
//! without recursion (flat category scans, the fixed-depth post pattern
//! `user-data/*/posts/*/*/*.json`).
//!
//! Neither function sorts: discovery order is whatever the filesystem
//! yields. Callers that need determinism sort explicitly.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("scan failed: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("bad glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("unreadable entry during glob scan: {0}")]
    Entry(#[from] glob::GlobError),
}

/// Recursively list every regular file under `root` in discovery order.
///
/// An unreadable root is a configuration error and surfaces immediately;
/// no partial result is returned.
pub fn scan_tree(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// Files matching a shell-glob pattern.
pub fn glob_match(pattern: &str) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in glob::glob(pattern)? {
        let path = entry?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}
