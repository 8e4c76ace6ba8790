//! Markdown rendering

use lazy_static::lazy_static;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

lazy_static! {
    static ref QUOTE_PARAGRAPH: Regex =
        Regex::new(r"(?s)<blockquote>\s*<p>(.*?)</p>\s*</blockquote>").unwrap();
}

/// Markdown renderer producing the post body HTML
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        // Front matter is split off before rendering, so no metadata blocks
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_HEADING_ATTRIBUTES
            | Options::ENABLE_DEFINITION_LIST;
        Self { options }
    }

    /// Render markdown to HTML, then fold quoted paragraphs
    pub fn render(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, parser);

        rewrite_blockquotes(&html_output)
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// `<blockquote><p>x</p></blockquote>` becomes `<p> | x</p>`
///
/// Only quotes holding exactly one paragraph are folded; a quote with
/// several paragraphs, or other blocks after its paragraph, is left as
/// rendered. A rejected candidate resumes scanning just past its opening
/// tag, so quotes nested in or following it are still folded.
pub fn rewrite_blockquotes(html: &str) -> String {
    const OPEN: &str = "<blockquote>";

    let mut output = String::with_capacity(html.len());
    let mut copied = 0;
    let mut pos = 0;

    while let Some(caps) = QUOTE_PARAGRAPH.captures_at(html, pos) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let inner = inner.as_str();
        if inner.contains("</p>") || inner.contains(OPEN) {
            pos = whole.start() + OPEN.len();
            continue;
        }

        output.push_str(&html[copied..whole.start()]);
        output.push_str("<p> | ");
        output.push_str(inner);
        output.push_str("</p>");
        copied = whole.end();
        pos = whole.end();
    }

    output.push_str(&html[copied..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello World\n\nThis is a *test*.");
        assert!(html.contains("<h1>Hello World</h1>"));
        assert!(html.contains("<p>This is a <em>test</em>.</p>"));
    }

    #[test]
    fn test_render_fenced_code() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {}\n```\n");
        assert!(html.contains(r#"<pre><code class="language-rust">fn main() {}"#));
    }

    #[test]
    fn test_render_table() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }

    #[test]
    fn test_render_nested_lists() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("- one\n  1. inner\n  2. second\n- two\n");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<ol>"));
        assert!(html.contains("<li>inner</li>"));
    }

    #[test]
    fn test_single_paragraph_quote_is_folded() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("> hello\nworld\n");
        assert_eq!(html.trim_end(), "<p> | hello\nworld</p>");
    }

    #[test]
    fn test_multi_paragraph_quote_is_kept() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("> first\n>\n> second\n");
        assert!(html.contains("<blockquote>"));
        assert!(html.contains("<p>first</p>"));
        assert!(html.contains("<p>second</p>"));
        assert!(!html.contains(" | "));
    }

    #[test]
    fn test_rewrite_each_quote() {
        let input = "<blockquote>\n<p>a</p>\n</blockquote>\n<p>mid</p>\n<blockquote><p>b</p></blockquote>";
        assert_eq!(
            rewrite_blockquotes(input),
            "<p> | a</p>\n<p>mid</p>\n<p> | b</p>"
        );
    }

    #[test]
    fn test_quote_after_list_quote_is_folded() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("> intro\n>\n> - item\n\nbetween\n\n> second\n");
        assert!(html.contains("<p>intro</p>"));
        assert!(html.contains("<li>item</li>"));
        assert!(html.contains("<p>between</p>"));
        assert!(html.contains("<p> | second</p>"));
        assert_eq!(html.matches("<blockquote>").count(), 1);
    }

    #[test]
    fn test_rewrite_skips_only_the_mixed_quote() {
        let input = "<blockquote><p>a</p><ul><li>b</li></ul></blockquote><blockquote><p>c</p></blockquote>";
        assert_eq!(
            rewrite_blockquotes(input),
            "<blockquote><p>a</p><ul><li>b</li></ul></blockquote><p> | c</p>"
        );
    }

    #[test]
    fn test_nested_inner_quote_is_folded() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("> outer\n>\n> > inner\n");
        assert!(html.starts_with("<blockquote>\n<p>outer</p>"));
        assert!(html.contains("<p> | inner</p>"));
        assert_eq!(html.matches("<blockquote>").count(), 1);
    }
}
