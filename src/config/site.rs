//! Site configuration (_config.yml)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Feed
    pub title: String,
    pub description: String,

    // URL
    pub url: String,

    // Directory
    pub posts_dir: String,
    pub inject_dir: String,
    pub public_dir: String,
    pub output_dir: String,

    // Templates
    pub pages: Vec<String>,
    pub post_template: String,
    pub listing_template: String,

    // Writing
    pub new_post_name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            description: "RSS Feed".to_string(),

            url: "http://example.com".to_string(),

            posts_dir: "src/posts".to_string(),
            inject_dir: "src/inject".to_string(),
            public_dir: "public".to_string(),
            output_dir: "dist".to_string(),

            pages: vec!["index.html".to_string(), "about.html".to_string()],
            post_template: "post.html".to_string(),
            listing_template: "posts.html".to_string(),

            new_post_name: ":title.md".to_string(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Base URL without a trailing slash
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.posts_dir, "src/posts");
        assert_eq!(config.output_dir, "dist");
        assert_eq!(config.pages, vec!["index.html", "about.html"]);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
url: https://blog.example.org/
output_dir: public_html
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.base_url(), "https://blog.example.org");
        assert_eq!(config.output_dir, "public_html");
        // Unset fields keep their defaults
        assert_eq!(config.post_template, "post.html");
    }
}
