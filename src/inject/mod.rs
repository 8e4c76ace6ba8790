//! Injection pass: shared fragments added to every output page
//!
//! Three fragments live in the inject directory. `head.html` goes right
//! after the opening `<head>` tag, `body.html` right after the opening
//! `<body>` tag and `footer.html` right before `</body>`. Only the first
//! occurrence of each anchor is used and tags match case-insensitively.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use crate::Site;

lazy_static! {
    static ref HEAD_OPEN: Regex = Regex::new(r"(?i)<head[^>]*>").unwrap();
    static ref BODY_OPEN: Regex = Regex::new(r"(?i)<body[^>]*>").unwrap();
    static ref BODY_CLOSE: Regex = Regex::new(r"(?i)</body>").unwrap();
}

/// The three fragments; a missing file is an empty fragment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragments {
    pub head: String,
    pub body: String,
    pub footer: String,
}

impl Fragments {
    /// Read `head.html`, `body.html` and `footer.html` from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        Ok(Self {
            head: read_fragment(&dir.join("head.html"))?,
            body: read_fragment(&dir.join("body.html"))?,
            footer: read_fragment(&dir.join("footer.html"))?,
        })
    }

    /// Insert the fragments into one page
    pub fn apply(&self, html: &str) -> String {
        let html = insert_after(html, &HEAD_OPEN, &self.head);
        let html = insert_after(&html, &BODY_OPEN, &self.body);
        insert_before(&html, &BODY_CLOSE, &self.footer)
    }
}

/// Run the injection pass over every `*.html` file in the output tree
///
/// Returns the number of pages rewritten.
pub fn run(site: &Site) -> Result<usize> {
    let fragments = Fragments::load(&site.inject_dir)?;
    let mut count = 0;

    for entry in WalkDir::new(&site.output_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", site.output_dir.display()))?;
        let path = entry.path();
        if !entry.file_type().is_file() || !is_html(path) {
            continue;
        }

        let html =
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        fs::write(path, fragments.apply(&html))
            .with_context(|| format!("writing {}", path.display()))?;
        tracing::debug!("Injected: {:?}", path);
        count += 1;
    }

    tracing::info!("Injected fragments into {} pages", count);
    Ok(count)
}

fn read_fragment(path: &Path) -> Result<String> {
    if !path.is_file() {
        tracing::debug!("No fragment at {:?}", path);
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

/// `<tag…>` becomes `<tag…>\n<fragment>`
fn insert_after(html: &str, anchor: &Regex, fragment: &str) -> String {
    match anchor.find(html) {
        Some(m) => format!("{}\n{}{}", &html[..m.end()], fragment, &html[m.end()..]),
        None => html.to_string(),
    }
}

/// `</tag>` becomes `<fragment>\n</tag>`
fn insert_before(html: &str, anchor: &Regex, fragment: &str) -> String {
    match anchor.find(html) {
        Some(m) => format!("{}{}\n{}", &html[..m.start()], fragment, &html[m.start()..]),
        None => html.to_string(),
    }
}

fn is_html(path: &Path) -> bool {
    path.extension().map(|ext| ext == "html").unwrap_or(false)
}
