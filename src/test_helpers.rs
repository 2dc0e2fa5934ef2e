//! Shared test fixtures for the flatsite test suite.
//!
//! [`setup_site`] materializes the canonical content tree used across the
//! builder and facade tests: 2 categories, 6 pages (including the root
//! index page and one nested index page), 3 landing pages, and 4 posts
//! across 2 categories with the tag sets {tagone,tagtwo,tagthree}, {},
//! {tagone,tagtwo} and {tagone}.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Write a content file, creating parent directories.
pub fn write_json(path: &Path, body: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

/// Build the canonical fixture site in a temp directory.
pub fn setup_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    // Categories (flat)
    write_json(
        &root.join("common/categories/harvesting.json"),
        r#"{"body":"Harvesting posts"}"#,
    );
    write_json(
        &root.join("common/categories/uncategorized.json"),
        r#"{"body":"Everything else"}"#,
    );

    // Pages: 6 files, two of them in menus
    write_json(
        &root.join("common/pages/index.json"),
        r#"{"body":"Welcome home"}"#,
    );
    write_json(
        &root.join("common/pages/about.json"),
        r#"{"body":"About the site","menus":{"main":{"weight":2,"label":"About"}}}"#,
    );
    write_json(
        &root.join("common/pages/contact.json"),
        r#"{"body":"Say hello","menus":{"main":{"weight":1,"label":"Contact"},"footer":{"weight":5}}}"#,
    );
    write_json(
        &root.join("common/pages/services.json"),
        r#"{"body":"What we do"}"#,
    );
    write_json(
        &root.join("common/pages/apiaries/chilukwa/index.json"),
        r#"{"body":"The Chilukwa apiary"}"#,
    );
    write_json(
        &root.join("common/pages/apiaries/zyimba.json"),
        r#"{"body":"The Zyimba apiary"}"#,
    );

    // Landing pages for the reserved listing slugs
    write_json(
        &root.join("common/landing/tags/index.json"),
        r#"{"body":"All tags"}"#,
    );
    write_json(
        &root.join("common/landing/category/index.json"),
        r#"{"body":"All categories"}"#,
    );
    write_json(
        &root.join("common/landing/blog/index.json"),
        r#"{"body":"The blog","menus":{"main":{"weight":0,"label":"Blog"}}}"#,
    );

    // Posts: 4 across 2 categories
    let posts = root.join("user-data/@testuser/posts");
    write_json(
        &posts.join("harvesting/image/20210101000000_tagone,tagtwo,tagthree_harvest-time.json"),
        r#"{"body":"Harvest time"}"#,
    );
    write_json(
        &posts.join("harvesting/regular/20210101030000__s.json"),
        r#"{"body":"Shortest title"}"#,
    );
    write_json(
        &posts.join("uncategorized/quote/20210101020000_tagone,tagtwo_tested-quote.json"),
        r#"{"body":"A tested quote"}"#,
    );
    write_json(
        &posts.join("uncategorized/regular/20210101010000_tagone_beekeeping-basics.json"),
        r#"{"body":"Beekeeping basics"}"#,
    );

    tmp
}
