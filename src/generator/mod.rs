//! Generator module - copies static pages and renders posts and the listing

pub mod copy;
pub mod listing;

use anyhow::{Context as _, Result};
use std::fs;
use std::path::Path;

use crate::content::loader::ContentLoader;
use crate::content::{sort_newest_first, Post};
use crate::templates;
use crate::{Site, SiteError};

/// Static site generator for one site
pub struct Generator<'a> {
    site: &'a Site,
}

/// Templates read once per build
struct Templates {
    post: String,
    listing: String,
}

impl<'a> Generator<'a> {
    /// Create a new generator
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Copy pages and assets, render every post, then the listing
    ///
    /// Returns the posts in listing order.
    pub fn generate(&self) -> Result<Vec<Post>> {
        fs::create_dir_all(self.site.output_posts_dir()).with_context(|| {
            format!("creating {}", self.site.output_posts_dir().display())
        })?;

        self.copy_site()?;

        let templates = Templates {
            post: read_required(&self.site.post_template())?,
            listing: read_required(&self.site.listing_template())?,
        };

        let mut posts = ContentLoader::new(self.site).load_posts()?;
        for post in &posts {
            self.write_post(post, &templates.post)?;
        }
        tracing::info!("Rendered {} posts", posts.len());

        sort_newest_first(&mut posts);
        self.write_listing(&posts, &templates.listing)?;

        Ok(posts)
    }

    /// Copy the static pages and mirror the public directory
    pub fn copy_site(&self) -> Result<()> {
        for page in self.site.static_pages() {
            if !page.is_file() {
                return Err(SiteError::MissingFile(page).into());
            }
            let name = page.file_name().unwrap_or_default();
            copy::copy_file(&page, &self.site.output_dir.join(name))?;
            tracing::debug!("Copied page: {:?}", page);
        }

        let assets = copy::mirror_dir(&self.site.public_dir, &self.site.output_dir)?;
        tracing::info!(
            "Copied {} pages and {} public files",
            self.site.config.pages.len(),
            assets
        );
        Ok(())
    }

    /// Render a post through the post template into `posts/<slug>`
    fn write_post(&self, post: &Post, template: &str) -> Result<()> {
        let html = templates::render(template, &post.context());
        let output_path = self.site.output_posts_dir().join(&post.slug);
        fs::write(&output_path, html)
            .with_context(|| format!("writing {}", output_path.display()))?;
        tracing::debug!("Generated post: {:?}", output_path);
        Ok(())
    }

    /// Write the listing page; skipped entirely when there are no posts
    fn write_listing(&self, posts: &[Post], template: &str) -> Result<()> {
        if posts.is_empty() {
            tracing::info!("No posts, listing page left untouched");
            return Ok(());
        }

        let html = listing::render_listing(template, posts);
        let name = Path::new(&self.site.config.listing_template)
            .file_name()
            .unwrap_or_default();
        let output_path = self.site.output_dir.join(name);
        fs::write(&output_path, html)
            .with_context(|| format!("writing {}", output_path.display()))?;
        tracing::debug!("Generated listing: {:?}", output_path);
        Ok(())
    }
}

/// Read a template or page that the build cannot do without
fn read_required(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(SiteError::MissingFile(path.to_path_buf()).into());
    }
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
