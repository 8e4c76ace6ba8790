//! HTML helper functions
//!
//! Lightweight lookups over already rendered pages. These read the markup
//! the templates produce; they are not a general HTML parser.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref TITLE: Regex = Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").unwrap();
    static ref PARAGRAPH: Regex = Regex::new(r"(?is)<p(?:\s[^>]*)?>(.*?)</p\s*>").unwrap();
    static ref TAG: Regex = Regex::new(r"(?s)<[^>]*>").unwrap();
}

/// Elements that never have a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// Contents of the first `<title>` element
pub fn title(html: &str) -> Option<String> {
    TITLE.captures(html).map(|caps| caps[1].to_string())
}

/// Text of the first `<p>` element, tags removed and trimmed
pub fn first_paragraph_text(html: &str) -> Option<String> {
    PARAGRAPH
        .captures(html)
        .map(|caps| strip_html(&caps[1]).trim().to_string())
}

/// Outer HTML of the first element carrying `id="<id>"`
///
/// Nested elements of the same name are balanced, so a `<div id=…>`
/// containing other `<div>`s is returned whole.
pub fn element_by_id<'a>(html: &'a str, id: &str) -> Option<&'a str> {
    let open = Regex::new(&format!(
        r#"(?is)<([a-z][a-z0-9-]*)(?:\s[^>]*?)?\sid\s*=\s*(?:"{id}"|'{id}'|{id})(?:[\s/][^>]*)?>"#,
        id = regex::escape(id)
    ))
    .ok()?;

    let caps = open.captures(html)?;
    let whole = caps.get(0)?;
    let name = caps[1].to_ascii_lowercase();

    if VOID_ELEMENTS.contains(&name.as_str()) || whole.as_str().ends_with("/>") {
        return Some(whole.as_str());
    }

    let tags = Regex::new(&format!(r"(?is)<(/?){}\b[^>]*>", regex::escape(&name))).ok()?;
    let mut depth = 1usize;
    for tag in tags.captures_iter(&html[whole.end()..]) {
        let m = tag.get(0)?;
        if !tag[1].is_empty() {
            depth -= 1;
            if depth == 0 {
                let end = whole.end() + m.end();
                return Some(&html[whole.start()..end]);
            }
        } else if !m.as_str().ends_with("/>") {
            depth += 1;
        }
    }

    // Unclosed: everything to the end of the document
    Some(&html[whole.start()..])
}

/// Strip HTML tags from content
pub fn strip_html(html: &str) -> String {
    TAG.replace_all(html, "").into_owned()
}

/// Escape XML special characters
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
