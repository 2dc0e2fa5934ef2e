//! Shared types serialized into the index cache.
//!
//! Every index file under `cache/indexes/` is a JSON rendering of one of the
//! mappings defined here. Ordered maps (`BTreeMap`) are used throughout so
//! that rebuilding from identical content produces byte-identical cache
//! files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// Extension of every content file, without the leading dot.
pub const CONTENT_FILE_EXT: &str = "json";

/// Slug of the root index page (`common/pages/index.json`).
pub const HOME_INDEX_KEY: &str = "/";
/// Reserved slug of the blog listing landing page.
pub const BLOG_INDEX_KEY: &str = "blog";
/// Reserved slug of the category listing landing page.
pub const CAT_INDEX_KEY: &str = "category";
/// Reserved slug of the tag listing landing page, also the prefix of every
/// tag element key (`tag/{name}`).
pub const TAG_INDEX_KEY: &str = "tag";

/// Coarse content section an element belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Page,
    Category,
    Post,
    Tag,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Page => "page",
            Section::Category => "category",
            Section::Post => "post",
            Section::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// One entry in an index.
///
/// The shape is fixed: fields that do not apply to a section hold an empty
/// string (or an empty vec for `tags`). `key` is never empty; `path` is
/// non-empty for every element except tag elements, which exist only as
/// index entries with no backing file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Canonical slug, unique within its section.
    pub key: String,
    /// Absolute location of the backing content file.
    pub path: String,
    pub section: Section,
    /// Owning category slug. Empty for non-posts.
    pub category: String,
    /// Content sub-type (`image`, `quote`, `regular`). Empty for non-posts.
    #[serde(rename = "type")]
    pub kind: String,
    /// Author identifier. Empty for non-posts.
    pub username: String,
    /// Raw 14-digit timestamp string. Empty for non-posts.
    pub date: String,
    pub tags: Vec<String>,
}

impl Element {
    /// An element carrying only a key, path and section — the shape used for
    /// categories and pages.
    pub fn bare(key: impl Into<String>, path: &Path, section: Section) -> Self {
        Self {
            key: key.into(),
            path: path.to_string_lossy().into_owned(),
            section,
            category: String::new(),
            kind: String::new(),
            username: String::new(),
            date: String::new(),
            tags: Vec::new(),
        }
    }

    /// A tag element: an index entry with no backing file.
    pub fn tag(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            path: String::new(),
            section: Section::Tag,
            category: String::new(),
            kind: String::new(),
            username: String::new(),
            date: String::new(),
            tags: Vec::new(),
        }
    }
}

/// Mapping from slug to element. The core index shape.
pub type Index = BTreeMap<String, Element>;

/// Mapping from `tag/{name}` to the slugs of every post carrying that tag.
pub type TagToPost = BTreeMap<String, Vec<String>>;

/// Mapping from category slug to the last-seen post slug for that category.
pub type CatToPost = BTreeMap<String, String>;

/// Mapping from menu name to its weight-ordered nodes.
pub type MenuIndex = BTreeMap<String, Vec<MenuNode>>;

/// One node in a named menu.
///
/// `key` is the owning page's slug and `weight` drives ordering; everything
/// else the page declared for this menu entry (labels, targets, ...) rides
/// along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    pub key: String,
    #[serde(default)]
    pub weight: i64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Recognized top-level fields of a content file. Anything else in the
/// document belongs to the rendering layer and is ignored here.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentFile {
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub summary: Option<String>,
    /// Named menu definitions: menu name → arbitrary label/value pairs,
    /// commonly including a `weight`.
    #[serde(default)]
    pub menus: Option<BTreeMap<String, BTreeMap<String, serde_json::Value>>>,
}
