//! Index facade: the single object the rest of the system depends on.
//!
//! [`IndexManager::new`] validates the content layout, then either loads
//! every index from the cache (when the slug-index sentinel file exists) or
//! runs the four builders in dependency order and persists the results.
//! Once constructed the indexes are immutable; queries never touch the
//! filesystem.
//!
//! ## Rebuild vs load
//!
//! ```text
//! new(root)
//!   ├─ validate common/categories, common/pages, user-data
//!   ├─ ensure cache/indexes is writable
//!   ├─ sentinel (slugindex.inx) present? ── yes ─→ load every .inx file
//!   └─ no ─→ build categories → pages/menus → posts → composites,
//!            merge the slug index, persist everything (sentinel last)
//! ```
//!
//! The rebuild is staged: all indexes are built in memory before the first
//! cache file is written, so a malformed content file aborts the rebuild
//! without leaving a partial cache generation behind.
//!
//! Single-writer assumption: nothing here locks. Concurrent rebuilds from
//! multiple processes must be serialized by the caller (e.g. index once at
//! deploy time, then serve).

use crate::build;
use crate::cache::{self, CacheError};
use crate::naming::NamingError;
use crate::scan::ScanError;
use crate::types::{CatToPost, Element, Index, MenuIndex, TAG_INDEX_KEY, TagToPost};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CATEGORIES_DIR: &str = "common/categories";
const PAGES_DIR: &str = "common/pages";
const LANDING_DIR: &str = "common/landing";
const USER_DATA_DIR: &str = "user-data";
const INDEX_DIR: &str = "cache/indexes";

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to validate the location of the content root [{0}]")]
    InvalidRoot(PathBuf),
    #[error("content directory format is invalid, directory does not exist [{0}]")]
    MissingDirectory(PathBuf),
    #[error("cannot create cache directory [{0}]: {1}")]
    CacheDir(PathBuf, std::io::Error),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Naming(#[from] NamingError),
    #[error(transparent)]
    Cache(#[from] CacheError),
    #[error("malformed content file [{path}]: {source}")]
    MalformedContent {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("key [{0}] does not exist in the index, check element_exists() first")]
    UnknownSlug(String),
}

/// Resolved locations of every section under one content root.
#[derive(Debug, Clone)]
pub struct SiteLayout {
    root: PathBuf,
}

impl SiteLayout {
    /// Resolve and validate a content root. The three required section
    /// directories must exist; anything else is a configuration error.
    pub fn new(root: &Path) -> Result<Self, IndexError> {
        let root = root
            .canonicalize()
            .map_err(|_| IndexError::InvalidRoot(root.to_path_buf()))?;
        let layout = Self { root };
        for dir in [
            layout.categories_dir(),
            layout.pages_dir(),
            layout.user_data_dir(),
        ] {
            if !dir.is_dir() {
                return Err(IndexError::MissingDirectory(dir));
            }
        }
        Ok(layout)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn categories_dir(&self) -> PathBuf {
        self.root.join(CATEGORIES_DIR)
    }

    pub fn pages_dir(&self) -> PathBuf {
        self.root.join(PAGES_DIR)
    }

    pub fn landing_dir(&self) -> PathBuf {
        self.root.join(LANDING_DIR)
    }

    pub fn user_data_dir(&self) -> PathBuf {
        self.root.join(USER_DATA_DIR)
    }

    pub fn index_dir(&self) -> PathBuf {
        self.root.join(INDEX_DIR)
    }

    fn index_file(&self, name: &str) -> PathBuf {
        self.index_dir().join(name)
    }
}

/// Owns every index for the lifetime of the process and serves lookups to
/// the rendering layer.
#[derive(Debug)]
pub struct IndexManager {
    layout: SiteLayout,
    slug_index: Index,
    category_index: Index,
    page_index: Index,
    post_index: Index,
    tag_index: Index,
    menu_index: MenuIndex,
    tag_to_post: TagToPost,
    cat_to_post: CatToPost,
}

impl IndexManager {
    /// Validate the layout, then load the cache if the sentinel file is
    /// present or run a full rebuild if it is not.
    pub fn new(root: &Path) -> Result<Self, IndexError> {
        let layout = SiteLayout::new(root)?;
        let index_dir = layout.index_dir();
        fs::create_dir_all(&index_dir).map_err(|e| IndexError::CacheDir(index_dir, e))?;

        let mut manager = Self {
            layout,
            slug_index: Index::new(),
            category_index: Index::new(),
            page_index: Index::new(),
            post_index: Index::new(),
            tag_index: Index::new(),
            menu_index: MenuIndex::new(),
            tag_to_post: TagToPost::new(),
            cat_to_post: CatToPost::new(),
        };
        if manager.layout.index_file(cache::SLUG_INDEX_FILE).exists() {
            manager.load()?;
        } else {
            manager.rebuild()?;
        }
        Ok(manager)
    }

    /// Force a full rebuild, overwriting any existing cache files.
    pub fn reindex(&mut self) -> Result<(), IndexError> {
        self.rebuild()
    }

    fn rebuild(&mut self) -> Result<(), IndexError> {
        let built = build::build_all(&self.layout)?;

        // Merged view. Later sources override earlier ones on key
        // collision: post, category, page, tag.
        let mut slug_index = built.posts.clone();
        slug_index.extend(built.categories.clone());
        slug_index.extend(built.pages.clone());
        slug_index.extend(built.tags.clone());

        cache::write_index(&self.layout.index_file(cache::CAT_INDEX_FILE), &built.categories)?;
        cache::write_index(&self.layout.index_file(cache::PAGE_INDEX_FILE), &built.pages)?;
        cache::write_index(&self.layout.index_file(cache::POST_INDEX_FILE), &built.posts)?;
        cache::write_index(&self.layout.index_file(cache::TAG_INDEX_FILE), &built.tags)?;
        cache::write_index(&self.layout.index_file(cache::MENU_INDEX_FILE), &built.menus)?;
        cache::write_index(
            &self.layout.index_file(cache::TAG2POST_INDEX_FILE),
            &built.tag_to_post,
        )?;
        cache::write_index(
            &self.layout.index_file(cache::CAT2POST_INDEX_FILE),
            &built.cat_to_post,
        )?;
        // The sentinel goes last: its presence marks a complete generation.
        cache::write_index(&self.layout.index_file(cache::SLUG_INDEX_FILE), &slug_index)?;

        self.category_index = built.categories;
        self.page_index = built.pages;
        self.post_index = built.posts;
        self.tag_index = built.tags;
        self.menu_index = built.menus;
        self.tag_to_post = built.tag_to_post;
        self.cat_to_post = built.cat_to_post;
        self.slug_index = slug_index;
        Ok(())
    }

    fn load(&mut self) -> Result<(), IndexError> {
        self.category_index = cache::load_index(&self.layout.index_file(cache::CAT_INDEX_FILE))?;
        self.page_index = cache::load_index(&self.layout.index_file(cache::PAGE_INDEX_FILE))?;
        self.post_index = cache::load_index(&self.layout.index_file(cache::POST_INDEX_FILE))?;
        self.tag_index = cache::load_index(&self.layout.index_file(cache::TAG_INDEX_FILE))?;
        self.menu_index = cache::load_index(&self.layout.index_file(cache::MENU_INDEX_FILE))?;
        self.tag_to_post =
            cache::load_index(&self.layout.index_file(cache::TAG2POST_INDEX_FILE))?;
        self.cat_to_post =
            cache::load_index(&self.layout.index_file(cache::CAT2POST_INDEX_FILE))?;
        self.slug_index = cache::load_index(&self.layout.index_file(cache::SLUG_INDEX_FILE))?;
        Ok(())
    }

    pub fn layout(&self) -> &SiteLayout {
        &self.layout
    }

    /// True iff `slug` is a key of the merged slug index.
    pub fn element_exists(&self, slug: &str) -> bool {
        self.slug_index.contains_key(slug)
    }

    /// Look up one element by slug.
    ///
    /// Callers must check [`element_exists`](Self::element_exists) first; an
    /// unknown slug here is a programming error, not a user-facing
    /// condition.
    pub fn element(&self, slug: &str) -> Result<&Element, IndexError> {
        self.slug_index
            .get(slug)
            .ok_or_else(|| IndexError::UnknownSlug(slug.to_string()))
    }

    pub fn posts_index(&self) -> &Index {
        &self.post_index
    }

    pub fn categories_index(&self) -> &Index {
        &self.category_index
    }

    pub fn page_index(&self) -> &Index {
        &self.page_index
    }

    pub fn tag_index(&self) -> &Index {
        &self.tag_index
    }

    pub fn menus_index(&self) -> &MenuIndex {
        &self.menu_index
    }

    pub fn tag_to_post(&self) -> &TagToPost {
        &self.tag_to_post
    }

    pub fn cat_to_post(&self) -> &CatToPost {
        &self.cat_to_post
    }

    /// Posts carrying the given tag (without the `tag/` prefix), or `None`
    /// for an unknown tag.
    pub fn posts_for_tag(&self, tag: &str) -> Option<Vec<&Element>> {
        let slugs = self.tag_to_post.get(&format!("{TAG_INDEX_KEY}/{tag}"))?;
        Some(
            slugs
                .iter()
                .filter_map(|slug| self.post_index.get(slug))
                .collect(),
        )
    }

    /// Posts recorded for the given category, or `None` for an unknown
    /// category. The cat2post index holds a single slug per category, so
    /// this returns at most one element.
    pub fn posts_for_category(&self, category: &str) -> Option<Vec<&Element>> {
        let slug = self.cat_to_post.get(category)?;
        Some(self.post_index.get(slug).into_iter().collect())
    }
}
