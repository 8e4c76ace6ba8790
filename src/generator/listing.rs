//! Listing page: one table per post spliced into the posts container

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::content::Post;

lazy_static! {
    /// The container's inner content runs up to the first `</div>`
    static ref POSTS_CONTAINER: Regex =
        Regex::new(r#"(?s)(<div class="main" id="posts">)(.*?)(</div>)"#).unwrap();
}

/// Markup for a single listing row
pub fn post_table(post: &Post) -> String {
    format!(
        r#"
        <table border="1" cellpadding="0" cellspacing="0" style="width:100%;max-width:800px;table-layout:auto;word-break:break-all;margin:0 auto;">
            <tr>
                <td rowspan="2" style="width:30%;"><img style="width:100%;height:auto;display:block;" align="left" src="{img}" alt="{title}"></td>
                <td style="word-break:break-all;"><a href="{url}">{title} - {date}</a></td>
            </tr>
            <tr>
                <td>{summary}</td>
            </tr>
        </table>
        <br>
        "#,
        img = post.cover,
        title = post.title,
        url = post.url(),
        date = post.date,
        summary = post.summary,
    )
}

/// Replace the posts container's content with one table per post
///
/// `posts` must already be in display order. A template without the
/// container is returned unchanged.
pub fn render_listing(template: &str, posts: &[Post]) -> String {
    let tables: String = posts.iter().map(post_table).collect();
    POSTS_CONTAINER
        .replace_all(template, |caps: &Captures| {
            format!("{}{}{}", &caps[1], tables, &caps[3])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FrontMatter, MarkdownRenderer};
    use std::path::PathBuf;

    fn post(slug: &str, title: &str, published: &str) -> Post {
        let source = format!(
            "---\ntitle: {title}\npublished: {published}\nsummary: about {title}\ncover:\n  image: /img/{slug}.png\n---\nbody\n"
        );
        let (fm, body) = FrontMatter::parse(&source).unwrap();
        Post::from_parts(
            format!("{slug}.html"),
            PathBuf::from(format!("{slug}.md")),
            &fm,
            body,
            &MarkdownRenderer::new(),
        )
    }

    const TEMPLATE: &str = r#"<html><body>
<div class="main" id="posts">
  <p>placeholder row</p>
</div>
<div class="footer">kept</div>
</body></html>"#;

    #[test]
    fn test_post_table() {
        let table = post_table(&post("hello", "Hello", "2025-03-03 15:56:57"));
        assert!(table.contains(r#"src="/img/hello.png" alt="Hello""#));
        assert!(table.contains(r#"<a href="/posts/hello.html">Hello - 2025-03-03</a>"#));
        assert!(table.contains("<td>about Hello</td>"));
        assert!(table.trim_end().ends_with("<br>"));
    }

    #[test]
    fn test_render_listing_replaces_container() {
        let posts = vec![post("b", "Second", "2025-06-15"), post("a", "First", "2024-01-01")];
        let html = render_listing(TEMPLATE, &posts);

        assert!(!html.contains("placeholder row"));
        assert!(html.contains(r#"<div class="main" id="posts">"#));
        assert!(html.contains(r#"<div class="footer">kept</div>"#));
        assert_eq!(html.matches("<table").count(), 2);
        assert_eq!(html.matches("<br>").count(), 2);

        let second = html.find("Second - 2025-06-15").unwrap();
        let first = html.find("First - 2024-01-01").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_render_listing_without_container() {
        let template = "<html><body><div id=\"posts\"></div></body></html>";
        let html = render_listing(template, &[post("a", "A", "2024-01-01")]);
        assert_eq!(html, template);
    }
}
