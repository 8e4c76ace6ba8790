//! sitemap.xml

use crate::helpers::{encode_path, full_url};

/// Build a sitemap listing every page, in the given order
pub fn render_sitemap(base_url: &str, pages: &[String]) -> String {
    let urls: Vec<String> = pages
        .iter()
        .map(|page| format!("  <url><loc>{}</loc></url>", full_url(base_url, &encode_path(page))))
        .collect();

    let mut sitemap = String::new();
    sitemap.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    sitemap.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    sitemap.push_str(&urls.join("\n"));
    sitemap.push_str("\n</urlset>");
    sitemap
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sitemap() {
        let pages = vec!["about.html".to_string(), "posts/hello world.html".to_string()];
        assert_eq!(
            render_sitemap("https://example.com/", &pages),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
             <url><loc>https://example.com/about.html</loc></url>\n  \
             <url><loc>https://example.com/posts/hello%20world.html</loc></url>\n\
             </urlset>"
        );
    }

    #[test]
    fn test_empty_sitemap() {
        let sitemap = render_sitemap("https://example.com", &[]);
        assert!(sitemap.ends_with("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n\n</urlset>"));
    }
}
