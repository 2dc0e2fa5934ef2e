//! Site configuration loading.
//!
//! A `config.toml` at the site root is optional; every field has a default
//! so a bare content tree works out of the box:
//!
//! ```toml
//! [site]
//! name = "Chilukwa Apiaries"
//! url = "https://example.org"
//! tagline = "Notes from the hives"
//!
//! [content]
//! posts_per_page = 5
//! ```
//!
//! The indexer itself takes explicit paths; config only feeds the CLI
//! (summary headers, pagination).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config.toml: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub content: ContentSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub tagline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSection {
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: usize,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            url: String::new(),
            tagline: String::new(),
        }
    }
}

impl Default for ContentSection {
    fn default() -> Self {
        Self {
            posts_per_page: default_posts_per_page(),
        }
    }
}

fn default_site_name() -> String {
    "A flat-file site".to_string()
}

fn default_posts_per_page() -> usize {
    5
}

/// Load `config.toml` from the site root. A missing file yields defaults;
/// an unparsable one is a configuration error.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    if !path.exists() {
        return Ok(SiteConfig::default());
    }
    Ok(toml::from_str(&fs::read_to_string(path)?)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.name, "A flat-file site");
        assert_eq!(config.content.posts_per_page, 5);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[site]\nname = \"Chilukwa Apiaries\"\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.name, "Chilukwa Apiaries");
        assert!(config.site.url.is_empty());
        assert_eq!(config.content.posts_per_page, 5);
    }

    #[test]
    fn full_file_overrides_everything() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("config.toml"),
            "[site]\nname = \"n\"\nurl = \"https://x\"\ntagline = \"t\"\n[content]\nposts_per_page = 10\n",
        )
        .unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.site.url, "https://x");
        assert_eq!(config.content.posts_per_page, 10);
    }

    #[test]
    fn invalid_toml_is_fatal() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), "not = [valid").unwrap();
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Parse(_))
        ));
    }
}
