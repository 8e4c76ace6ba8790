//! Convert posts to bare HTML next to their sources
//!
//! No templates, no listing: each `<name>.md` in the posts directory gets a
//! `<name>.html` sibling holding just the rendered body. Front matter is
//! dropped without being parsed.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

use crate::content::loader::markdown_files;
use crate::content::{FrontMatter, MarkdownRenderer};
use crate::Site;

/// Convert every post; returns the written HTML paths
pub fn run(site: &Site) -> Result<Vec<PathBuf>> {
    let renderer = MarkdownRenderer::new();
    let mut written = Vec::new();

    for path in markdown_files(&site.posts_dir)? {
        let markdown =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let html = renderer.render(FrontMatter::strip(&markdown));

        let output_path = path.with_extension("html");
        fs::write(&output_path, html)
            .with_context(|| format!("writing {}", output_path.display()))?;
        tracing::info!("Converted {:?} -> {:?}", path, output_path);
        written.push(output_path);
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    #[test]
    fn test_convert_writes_siblings() {
        let dir = TempDir::new().unwrap();
        let site = Site::with_config(dir.path(), SiteConfig::default());
        fs::create_dir_all(&site.posts_dir).unwrap();
        fs::write(site.posts_dir.join("a.md"), "---\ntitle: [not yaml\n---\n# A\n\n> q\n").unwrap();
        fs::write(site.posts_dir.join("b.md"), "plain\n").unwrap();

        let written = run(&site).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(
            fs::read_to_string(site.posts_dir.join("a.html")).unwrap(),
            "<h1>A</h1>\n<p> | q</p>\n"
        );
        assert_eq!(
            fs::read_to_string(site.posts_dir.join("b.html")).unwrap(),
            "<p>plain</p>\n"
        );
    }
}
