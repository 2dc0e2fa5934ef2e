//! Index cache persistence.
//!
//! Each index is serialized to its own file under `cache/indexes/`. The
//! format is JSON over ordered maps, so writing the same index twice
//! produces identical bytes and the files are diffable when debugging —
//! but the format is private to this subsystem and may change between
//! releases.
//!
//! There is no fallback on load: a missing or corrupt cache file is a fatal
//! error, because a half-trusted cache would break the cross-index
//! consistency the facade guarantees. Invalidation is manual — delete the
//! cache files (or call `reindex`) to force a rebuild.

use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Sentinel file: its presence decides load-vs-rebuild at construction.
pub const SLUG_INDEX_FILE: &str = "slugindex.inx";
pub const PAGE_INDEX_FILE: &str = "pages.inx";
pub const POST_INDEX_FILE: &str = "posts.inx";
pub const CAT_INDEX_FILE: &str = "categories.inx";
pub const TAG_INDEX_FILE: &str = "tags.inx";
pub const MENU_INDEX_FILE: &str = "menus.inx";
pub const TAG2POST_INDEX_FILE: &str = "tag2posts.inx";
pub const CAT2POST_INDEX_FILE: &str = "cat2posts.inx";

#[derive(Error, Debug)]
pub enum CacheError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot load index file, does not exist [{0}]")]
    Missing(PathBuf),
    #[error("index file is corrupt [{path}]: {source}")]
    Format {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Serialize an index mapping to `path`, creating parent directories as
/// needed. Any failure is fatal.
pub fn write_index<T: Serialize>(path: &Path, index: &T) -> Result<(), CacheError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(index).map_err(|source| CacheError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json)?;
    Ok(())
}

/// Deserialize a previously written index file.
pub fn load_index<T: DeserializeOwned>(path: &Path) -> Result<T, CacheError> {
    if !path.exists() {
        return Err(CacheError::Missing(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|source| CacheError::Format {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Element, Index, Section};
    use tempfile::TempDir;

    fn sample_index() -> Index {
        let mut index = Index::new();
        for key in ["about", "contact"] {
            index.insert(
                key.to_string(),
                Element::bare(key, Path::new("/site/x.json"), Section::Page),
            );
        }
        index
    }

    #[test]
    fn write_then_load_roundtrips() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("pages.inx");
        let index = sample_index();

        write_index(&path, &index).unwrap();
        let loaded: Index = load_index(&path).unwrap();
        assert_eq!(loaded, index);
    }

    #[test]
    fn write_creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("cache/indexes/pages.inx");
        write_index(&path, &sample_index()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_is_deterministic() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.inx");
        let b = tmp.path().join("b.inx");
        write_index(&a, &sample_index()).unwrap();
        write_index(&b, &sample_index()).unwrap();
        assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
    }

    #[test]
    fn load_missing_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let result: Result<Index, _> = load_index(&tmp.path().join("absent.inx"));
        assert!(matches!(result, Err(CacheError::Missing(_))));
    }

    #[test]
    fn load_corrupt_file_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.inx");
        fs::write(&path, "not json").unwrap();
        let result: Result<Index, _> = load_index(&path);
        assert!(matches!(result, Err(CacheError::Format { .. })));
    }

    #[test]
    fn load_format_mismatch_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("wrong.inx");
        // Valid JSON, wrong shape for an Index
        fs::write(&path, r#"[1, 2, 3]"#).unwrap();
        let result: Result<Index, _> = load_index(&path);
        assert!(matches!(result, Err(CacheError::Format { .. })));
    }
}
