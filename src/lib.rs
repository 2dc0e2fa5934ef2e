//! # Flatsite
//!
//! Content indexer for flat-file sites. There is no database: pages, posts
//! and categories are individual JSON files under a conventional directory
//! tree, and everything the system knows about them — slugs, dates, tags,
//! authors, menu membership — is derived from names and positions alone.
//!
//! # Architecture: One Pass, Many Indexes
//!
//! A single build pass walks the content tree and produces several mutually
//! consistent lookup indexes, each persisted to its own cache file:
//!
//! ```text
//! categories → pages/menus → posts → composites (tags, tag2post, cat2post)
//!                                     │
//!                              merged slug index  (the sentinel)
//! ```
//!
//! The builders run in dependency order because the composite indexes
//! derive from the post index. All indexes are staged in memory and only
//! persisted once every builder has succeeded, so a malformed content file
//! never leaves a partial cache generation behind. On later runs the
//! presence of the slug-index sentinel file short-circuits the builders
//! entirely: every index is loaded straight from cache.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`index`] | The facade — validates the layout, decides rebuild-vs-load, serves lookups |
//! | [`build`] | Per-section index builders, run in dependency order |
//! | [`scan`] | Recursive tree scan and shell-glob matching |
//! | [`naming`] | Positional slug/metadata codec for filenames and paths |
//! | [`menus`] | Menu extraction from page front matter and weight-ordered assembly |
//! | [`cache`] | Index persistence: one JSON file per index under `cache/indexes/` |
//! | [`types`] | Shared serialized types (`Element`, `MenuNode`, index mappings) |
//! | [`config`] | Optional `config.toml` loading for the CLI |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## The Filesystem Is the Schema
//!
//! Post filenames follow `YYYYMMDDHHMMSS_tag1,tag2_title.json` and sit at
//! the fixed depth `user-data/{user}/posts/{category}/{type}/`. Decoding
//! that implicit schema is inherently stringly-typed, so it is isolated in
//! [`naming`] behind named error kinds (too-short, syntax, layout) instead
//! of being scattered through the builders.
//!
//! ## Full Rebuild or Nothing
//!
//! There is no incremental reindexing. Any content change requires a full
//! rebuild (delete the cache or run `reindex`), and a single malformed file
//! aborts the whole build: a partially built index set would break the
//! cross-index consistency every page render depends on. Stale beats
//! inconsistent, and failing hard beats both.
//!
//! ## Ordered Maps Everywhere
//!
//! Every index is a `BTreeMap` serialized as pretty JSON. Rebuilding from
//! identical content yields byte-identical cache files, which makes cache
//! diffs meaningful during debugging and keeps tests honest.

pub mod build;
pub mod cache;
pub mod config;
pub mod index;
pub mod menus;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
