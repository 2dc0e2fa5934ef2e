//! Slug and metadata decoding for content paths.
//!
//! The content tree has no database: everything the indexer knows about a
//! file is encoded positionally in its name and its parent directories.
//! This module is the single place where that implicit schema is decoded.
//!
//! ## Post filenames
//!
//! Posts follow `YYYYMMDDHHMMSS_tag1,tag2,...,tagN_title` (extension already
//! stripped):
//!
//! ```text
//! 20210101000000_tagone,tagtwo_harvest-time
//! └────14 digits┘└── tag list ─┘└── title ──┘
//! ```
//!
//! The tag list may be empty (`20210101030000__welcome`). The canonical post
//! slug is `{year}/{month}/{title}`, sliced from the date.
//!
//! ## Pages and categories
//!
//! Page and category slugs come from the file's path relative to its section
//! root, separators normalized to `/` and extension stripped. A page path
//! ending in `/index` represents its parent directory, and the root index
//! page maps to the slug `/`.

use crate::types::HOME_INDEX_KEY;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum NamingError {
    #[error("content filename is too short [{0}]")]
    TooShort(String),
    #[error("content filename syntax error [{0}]")]
    Syntax(String),
    #[error("post path does not match user-data/<user>/posts/<category>/<type> [{0}]")]
    Layout(PathBuf),
}

/// Decoded pieces of a post filename stem.
#[derive(Debug, Clone, PartialEq)]
pub struct PostName {
    /// Raw 14-digit timestamp string.
    pub date: String,
    pub tags: Vec<String>,
    pub title: String,
}

/// Decode a post filename stem (extension already stripped).
///
/// The stem must be at least 17 bytes: 14 date digits, a separator, at
/// least an empty tag list plus separator, and a non-empty title.
pub fn decode_post_filename(stem: &str) -> Result<PostName, NamingError> {
    if stem.len() < 17 {
        return Err(NamingError::TooShort(stem.to_string()));
    }
    let bytes = stem.as_bytes();
    if !bytes[..14].iter().all(u8::is_ascii_digit) || bytes[14] != b'_' {
        return Err(NamingError::Syntax(stem.to_string()));
    }
    let date = stem[..14].to_string();
    // The tag list runs from offset 15 to the next separator.
    let rest = &stem[15..];
    let Some(sep) = rest.find('_') else {
        return Err(NamingError::Syntax(stem.to_string()));
    };
    let title = &rest[sep + 1..];
    if title.is_empty() {
        return Err(NamingError::Syntax(stem.to_string()));
    }
    let tags = rest[..sep]
        .split(',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    Ok(PostName {
        date,
        tags,
        title: title.to_string(),
    })
}

/// Canonical post slug: `{year}/{month}/{title}`.
pub fn post_slug(name: &PostName) -> String {
    format!("{}/{}/{}", &name.date[..4], &name.date[4..6], name.title)
}

/// Recover `(username, category, kind)` from a post path's directory
/// components, which must sit at the validated fixed depth
/// `user-data/{username}/posts/{category}/{kind}/{file}`.
pub fn decode_post_path(
    user_data_root: &Path,
    path: &Path,
) -> Result<(String, String, String), NamingError> {
    let rel = path
        .strip_prefix(user_data_root)
        .map_err(|_| NamingError::Layout(path.to_path_buf()))?;
    let parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.len() != 5 || parts[1] != "posts" {
        return Err(NamingError::Layout(path.to_path_buf()));
    }
    Ok((parts[0].clone(), parts[2].clone(), parts[3].clone()))
}

/// Slug for a category file: relative path with the extension stripped.
pub fn category_slug(categories_root: &Path, path: &Path) -> String {
    relative_slug(categories_root, path)
}

/// Slug for a page file.
///
/// Index pages represent their parent directory: `apiaries/index.json`
/// becomes `apiaries`, and the root `index.json` becomes `/`.
pub fn page_slug(pages_root: &Path, path: &Path) -> String {
    let slug = relative_slug(pages_root, path);
    if slug == "index" {
        return HOME_INDEX_KEY.to_string();
    }
    match slug.strip_suffix("/index") {
        Some(parent) => parent.to_string(),
        None => slug,
    }
}

/// Relative path with separators normalized to `/` and extension stripped.
fn relative_slug(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = rel
        .with_extension("")
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
