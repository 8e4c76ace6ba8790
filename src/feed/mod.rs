//! Feed generation: sitemap.xml and rss.xml
//!
//! Runs over the finished output tree, so it can be invoked on its own
//! after a build.

pub mod rss;
pub mod sitemap;

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::helpers::full_url;
use crate::helpers::url::relative_url_path;
use crate::Site;

pub use rss::{render_rss, Channel, RssItem};
pub use sitemap::render_sitemap;

/// Counts of what was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedSummary {
    pub urls: usize,
    pub items: usize,
}

/// Relative `/`-separated paths of every `*.html` file under `root`
pub fn html_pages(root: &Path) -> Result<Vec<String>> {
    let mut pages = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        let path = entry.path();
        let is_html = path.extension().map(|ext| ext == "html").unwrap_or(false);
        if entry.file_type().is_file() && is_html {
            if let Some(relative) = relative_url_path(root, path) {
                pages.push(relative);
            }
        }
    }
    Ok(pages)
}

/// Write `sitemap.xml` and `rss.xml` into the output directory
pub fn run(site: &Site) -> Result<FeedSummary> {
    let base_url = site.config.base_url();
    let pages = html_pages(&site.output_dir)?;

    let sitemap = render_sitemap(base_url, &pages);
    write(&site.output_dir.join("sitemap.xml"), &sitemap)?;

    let now = Utc::now();
    let mut items = Vec::new();
    for page in pages.iter().filter(|p| p.starts_with("posts/")) {
        let path = site.output_dir.join(page);
        let html =
            fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        items.push(RssItem::scrape(&html, full_url(base_url, page), stem, &now));
    }

    let home = format!("{}/", base_url);
    let channel = Channel {
        title: &site.config.title,
        link: &home,
        description: &site.config.description,
    };
    write(&site.output_dir.join("rss.xml"), &render_rss(&channel, &items))?;

    let summary = FeedSummary {
        urls: pages.len(),
        items: items.len(),
    };
    tracing::info!(
        "Generated sitemap.xml ({} urls) and rss.xml ({} items)",
        summary.urls,
        summary.items
    );
    Ok(summary)
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use tempfile::TempDir;

    fn site() -> (TempDir, Site) {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig {
            url: "https://example.com/".to_string(),
            ..SiteConfig::default()
        };
        let site = Site::with_config(dir.path(), config);
        fs::create_dir_all(site.output_dir.join("posts")).unwrap();
        (dir, site)
    }

    #[test]
    fn test_only_posts_become_items() {
        let (_dir, site) = site();
        fs::write(
            site.output_dir.join("posts/a.html"),
            "<title>A</title><p>2025-01-02</p><div id=\"text-post\">hi</div>",
        )
        .unwrap();
        fs::write(site.output_dir.join("about.html"), "<title>About</title>").unwrap();
        fs::write(site.output_dir.join("logo.png"), "png").unwrap();

        let summary = run(&site).unwrap();
        assert_eq!(summary, FeedSummary { urls: 2, items: 1 });

        let sitemap = fs::read_to_string(site.output_dir.join("sitemap.xml")).unwrap();
        assert_eq!(sitemap.matches("<url>").count(), 2);
        assert!(sitemap.contains("<loc>https://example.com/about.html</loc>"));
        assert!(sitemap.contains("<loc>https://example.com/posts/a.html</loc>"));

        let rss = fs::read_to_string(site.output_dir.join("rss.xml")).unwrap();
        assert_eq!(rss.matches("<item>").count(), 1);
        assert!(rss.contains("<link>https://example.com/posts/a.html</link>"));
        assert!(rss.contains("<pubDate>Thu, 02 Jan 2025 00:00:00 +0000</pubDate>"));
        assert!(rss.contains("<link>https://example.com/</link>"));
    }

    #[test]
    fn test_html_pages_sorted_and_relative() {
        let (_dir, site) = site();
        fs::write(site.output_dir.join("posts/b.html"), "").unwrap();
        fs::write(site.output_dir.join("index.html"), "").unwrap();
        fs::write(site.output_dir.join("rss.xml"), "").unwrap();

        let pages = html_pages(&site.output_dir).unwrap();
        assert_eq!(pages, vec!["index.html", "posts/b.html"]);
    }
}
