//! Menu assembly from page front matter.
//!
//! Pages opt into navigation by declaring a `menus` object in their content
//! file:
//!
//! ```json
//! {
//!   "body": "...",
//!   "menus": {
//!     "main":   { "weight": 10, "label": "About us" },
//!     "footer": { "weight": 90 }
//!   }
//! }
//! ```
//!
//! Each named entry becomes one node in that menu, carrying the owning
//! page's key plus every declared label/value pair. The page index builder
//! merges the per-page results by concatenation, then sorts each menu
//! ascending by weight with a stable sort, so pages of equal weight keep
//! the order in which they were discovered.

use crate::index::IndexError;
use crate::types::{ContentFile, MenuIndex, MenuNode};
use std::fs;
use std::path::Path;

/// Read a page's content file and extract its menu declarations.
///
/// Pages with no `menus` object contribute an empty mapping. An unparsable
/// content file is a malformed-content error and aborts the build.
pub fn extract_menus(page_key: &str, file_path: &Path) -> Result<MenuIndex, IndexError> {
    let raw = fs::read_to_string(file_path)?;
    let content: ContentFile =
        serde_json::from_str(&raw).map_err(|source| IndexError::MalformedContent {
            path: file_path.to_path_buf(),
            source,
        })?;

    let mut menus = MenuIndex::new();
    let Some(declared) = content.menus else {
        return Ok(menus);
    };
    for (name, mut entry) in declared {
        let weight = entry
            .remove("weight")
            .and_then(|v| v.as_i64())
            .unwrap_or(0);
        menus.entry(name).or_default().push(MenuNode {
            key: page_key.to_string(),
            weight,
            extra: entry,
        });
    }
    Ok(menus)
}

/// Merge newly extracted menus into the running index: per menu name, the
/// new nodes are appended to any existing sequence.
pub fn merge_menus(into: &mut MenuIndex, new: MenuIndex) {
    for (name, mut nodes) in new {
        into.entry(name).or_default().append(&mut nodes);
    }
}

/// Sort every menu ascending by weight. The sort is stable: equal weights
/// preserve insertion order.
pub fn sort_menus(menus: &mut MenuIndex) {
    for nodes in menus.values_mut() {
        nodes.sort_by_key(|n| n.weight);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use tempfile::TempDir;

    fn node(key: &str, weight: i64) -> MenuNode {
        MenuNode {
            key: key.to_string(),
            weight,
            extra: BTreeMap::new(),
        }
    }

    #[test]
    fn extracts_declared_menus() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("about.json");
        fs::write(
            &path,
            r#"{"body":"x","menus":{"main":{"weight":10,"label":"About us"},"footer":{"weight":90}}}"#,
        )
        .unwrap();

        let menus = extract_menus("about", &path).unwrap();
        assert_eq!(menus.len(), 2);
        let main = &menus["main"][0];
        assert_eq!(main.key, "about");
        assert_eq!(main.weight, 10);
        assert_eq!(main.extra["label"], serde_json::json!("About us"));
        assert_eq!(menus["footer"][0].weight, 90);
    }

    #[test]
    fn page_without_menus_contributes_nothing() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("plain.json");
        fs::write(&path, r#"{"body":"no nav here"}"#).unwrap();
        assert!(extract_menus("plain", &path).unwrap().is_empty());
    }

    #[test]
    fn missing_weight_defaults_to_zero() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("p.json");
        fs::write(&path, r#"{"menus":{"main":{"label":"Home"}}}"#).unwrap();
        let menus = extract_menus("/", &path).unwrap();
        assert_eq!(menus["main"][0].weight, 0);
    }

    #[test]
    fn unparsable_content_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            extract_menus("broken", &path),
            Err(IndexError::MalformedContent { .. })
        ));
    }

    #[test]
    fn merge_appends_per_menu_name() {
        let mut running = MenuIndex::new();
        running.insert("main".into(), vec![node("a", 1)]);

        let mut new = MenuIndex::new();
        new.insert("main".into(), vec![node("b", 2)]);
        new.insert("footer".into(), vec![node("b", 1)]);

        merge_menus(&mut running, new);
        assert_eq!(running["main"].len(), 2);
        assert_eq!(running["main"][1].key, "b");
        assert_eq!(running["footer"].len(), 1);
    }

    #[test]
    fn sort_orders_by_weight() {
        let mut menus = MenuIndex::new();
        menus.insert("main".into(), vec![node("c", 30), node("a", 10), node("b", 20)]);
        sort_menus(&mut menus);
        let keys: Vec<&str> = menus["main"].iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c"]);
    }

    #[test]
    fn sort_is_stable_for_equal_weights() {
        let mut menus = MenuIndex::new();
        menus.insert(
            "main".into(),
            vec![node("first", 5), node("second", 5), node("third", 1)],
        );
        sort_menus(&mut menus);
        let keys: Vec<&str> = menus["main"].iter().map(|n| n.key.as_str()).collect();
        assert_eq!(keys, vec!["third", "first", "second"]);
    }
}
