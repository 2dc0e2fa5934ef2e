//! CLI output formatting — plain-text summaries of index state.
//!
//! Formatting functions return lines instead of printing so they stay
//! testable; `main` does the actual printing.

use crate::index::IndexManager;
use crate::types::Element;

/// One line per index with its entry count, plus menu membership.
pub fn format_summary(manager: &IndexManager) -> Vec<String> {
    let mut lines = vec![
        format!("Categories  {}", manager.categories_index().len()),
        format!("Pages       {}", manager.page_index().len()),
        format!("Posts       {}", manager.posts_index().len()),
        format!("Tags        {}", manager.tag_index().len()),
    ];
    for (name, nodes) in manager.menus_index() {
        lines.push(format!("Menu '{}'   {} entries", name, nodes.len()));
    }
    lines
}

/// Field-per-line dump of one element, empty fields omitted.
pub fn format_element(elem: &Element) -> Vec<String> {
    let mut lines = vec![
        format!("key       {}", elem.key),
        format!("section   {}", elem.section),
    ];
    if !elem.path.is_empty() {
        lines.push(format!("path      {}", elem.path));
    }
    if !elem.category.is_empty() {
        lines.push(format!("category  {}", elem.category));
    }
    if !elem.kind.is_empty() {
        lines.push(format!("type      {}", elem.kind));
    }
    if !elem.username.is_empty() {
        lines.push(format!("username  {}", elem.username));
    }
    if !elem.date.is_empty() {
        lines.push(format!("date      {}", elem.date));
    }
    if !elem.tags.is_empty() {
        lines.push(format!("tags      {}", elem.tags.join(", ")));
    }
    lines
}
