//! Per-section index builders.
//!
//! Four builders run in dependency order — categories, pages (+ menus),
//! posts, then the composite tag/tag2post/cat2post indexes, which derive
//! from the post index. [`build_all`] constructs everything in memory and
//! returns it; persistence is the facade's job, so a failure anywhere here
//! leaves no cache file behind.

use crate::index::{IndexError, SiteLayout};
use crate::menus;
use crate::naming;
use crate::scan;
use crate::types::{
    BLOG_INDEX_KEY, CAT_INDEX_KEY, CatToPost, CONTENT_FILE_EXT, Element, Index, MenuIndex,
    Section, TAG_INDEX_KEY, TagToPost,
};

/// Everything one rebuild pass produces.
#[derive(Debug)]
pub struct BuiltIndexes {
    pub categories: Index,
    pub pages: Index,
    pub posts: Index,
    pub tags: Index,
    pub menus: MenuIndex,
    pub tag_to_post: TagToPost,
    pub cat_to_post: CatToPost,
}

/// Run every builder in dependency order.
pub fn build_all(layout: &SiteLayout) -> Result<BuiltIndexes, IndexError> {
    let categories = build_category_index(layout)?;
    let (pages, menus) = build_page_index(layout)?;
    let posts = build_post_index(layout)?;
    let (tags, tag_to_post, cat_to_post) = build_composite_indexes(&posts);
    Ok(BuiltIndexes {
        categories,
        pages,
        posts,
        tags,
        menus,
        tag_to_post,
        cat_to_post,
    })
}

/// Categories live flat under `common/categories`; the slug is the file
/// stem.
fn build_category_index(layout: &SiteLayout) -> Result<Index, IndexError> {
    let categories_root = layout.categories_dir();
    let pattern = categories_root.join(format!("*.{CONTENT_FILE_EXT}"));
    let mut index = Index::new();
    for path in scan::glob_match(&pattern.to_string_lossy())? {
        let key = naming::category_slug(&categories_root, &path);
        index.insert(key.clone(), Element::bare(key, &path, Section::Category));
    }
    Ok(index)
}

/// Pages are scanned recursively and processed in lexicographic path order,
/// which is the only determinism guarantee for menu tie-breaking. On top of
/// the scanned files, three landing-page elements are synthesized for the
/// reserved tag, category and blog listing slugs.
fn build_page_index(layout: &SiteLayout) -> Result<(Index, MenuIndex), IndexError> {
    let pages_root = layout.pages_dir();
    let mut files = scan::scan_tree(&pages_root)?;
    files.sort();

    let mut index = Index::new();
    let mut menu_index = MenuIndex::new();
    for path in files {
        let key = naming::page_slug(&pages_root, &path);
        menus::merge_menus(&mut menu_index, menus::extract_menus(&key, &path)?);
        index.insert(key.clone(), Element::bare(key, &path, Section::Page));
    }

    for (key, dir, section) in [
        (TAG_INDEX_KEY, "tags", Section::Tag),
        (CAT_INDEX_KEY, "category", Section::Category),
        (BLOG_INDEX_KEY, "blog", Section::Post),
    ] {
        let path = layout
            .landing_dir()
            .join(dir)
            .join(format!("index.{CONTENT_FILE_EXT}"));
        if path.is_file() {
            menus::merge_menus(&mut menu_index, menus::extract_menus(key, &path)?);
        }
        index.insert(key.to_string(), Element::bare(key, &path, section));
    }

    menus::sort_menus(&mut menu_index);
    Ok((index, menu_index))
}

/// Posts sit at the fixed depth `user-data/{user}/posts/{category}/{kind}`.
/// Date, tags and title come from the filename; category, kind and username
/// from the directory components. Two posts resolving to the same
/// `{year}/{month}/{title}` slug collide silently: the later one wins.
fn build_post_index(layout: &SiteLayout) -> Result<Index, IndexError> {
    let user_data_root = layout.user_data_dir();
    let pattern = user_data_root
        .join("*")
        .join("posts")
        .join("*")
        .join("*")
        .join(format!("*.{CONTENT_FILE_EXT}"));

    let mut index = Index::new();
    for path in scan::glob_match(&pattern.to_string_lossy())? {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let decoded = naming::decode_post_filename(&stem)?;
        let (username, category, kind) = naming::decode_post_path(&user_data_root, &path)?;
        let key = naming::post_slug(&decoded);
        index.insert(
            key.clone(),
            Element {
                key,
                path: path.to_string_lossy().into_owned(),
                section: Section::Post,
                category,
                kind,
                username,
                date: decoded.date,
                tags: decoded.tags,
            },
        );
    }
    Ok(index)
}

/// Derive the tag index and both composite indexes from the post index.
///
/// `tag2post` appends every post carrying a tag; `cat2post` assigns, so
/// only the last-seen post per category survives. That asymmetry matches
/// the original system's observable behavior (see DESIGN.md).
fn build_composite_indexes(posts: &Index) -> (Index, TagToPost, CatToPost) {
    let mut tags = Index::new();
    let mut tag_to_post = TagToPost::new();
    let mut cat_to_post = CatToPost::new();
    for post in posts.values() {
        for tag in &post.tags {
            let tag_key = format!("{TAG_INDEX_KEY}/{tag}");
            tags.entry(tag_key.clone())
                .or_insert_with(|| Element::tag(tag_key.clone()));
            tag_to_post.entry(tag_key).or_default().push(post.key.clone());
        }
        cat_to_post.insert(post.category.clone(), post.key.clone());
    }
    (tags, tag_to_post, cat_to_post)
}
