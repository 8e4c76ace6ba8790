//! Content loader - loads posts from the posts directory

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::{Site, SiteError};

/// Loads content from the posts directory
pub struct ContentLoader<'a> {
    site: &'a Site,
    renderer: MarkdownRenderer,
}

impl<'a> ContentLoader<'a> {
    /// Create a new content loader
    pub fn new(site: &'a Site) -> Self {
        Self {
            site,
            renderer: MarkdownRenderer::new(),
        }
    }

    /// Markdown files directly inside the posts directory, by file name
    pub fn post_files(&self) -> Result<Vec<PathBuf>> {
        markdown_files(&self.site.posts_dir)
    }

    /// Load every post, in file-name order
    ///
    /// Any unreadable file or malformed front matter fails the whole load.
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let posts = self
            .post_files()?
            .iter()
            .map(|path| self.load_post(path))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!("Loaded {} posts from {:?}", posts.len(), self.site.posts_dir);
        Ok(posts)
    }

    /// Load a single post from a file
    pub fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading post {}", path.display()))?;
        let (fm, body) = FrontMatter::parse(&content).map_err(|source| SiteError::FrontMatter {
            path: path.to_path_buf(),
            source,
        })?;

        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        let slug = format!("{}.html", stem);

        tracing::debug!("Parsed {:?} -> {}", path, slug);
        Ok(Post::from_parts(
            slug,
            path.to_path_buf(),
            &fm,
            body,
            &self.renderer,
        ))
    }
}

/// `*.md` files directly inside `dir`, sorted by file name
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let path = entry.path();
        if entry.file_type().is_file() && is_markdown_file(path) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md")
        .unwrap_or(false)
}
