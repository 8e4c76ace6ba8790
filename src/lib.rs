//! mdpress: a small static blog generator
//!
//! Markdown posts with YAML front matter are rendered through flat
//! `{{{key}}}` HTML templates, collected into a listing page, decorated
//! with shared head/body/footer fragments and finally described by a
//! sitemap and an RSS feed.

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod feed;
pub mod generator;
pub mod helpers;
pub mod inject;
pub mod server;
pub mod templates;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use error::SiteError;

/// A site rooted at a directory, with every path resolved up front
#[derive(Debug, Clone)]
pub struct Site {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Markdown posts
    pub posts_dir: PathBuf,
    /// Injection fragments (head.html, body.html, footer.html)
    pub inject_dir: PathBuf,
    /// Static assets mirrored into the output root
    pub public_dir: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
}

impl Site {
    /// Create a site from a directory, reading `_config.yml` if present
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a site from an already loaded configuration
    pub fn with_config<P: AsRef<Path>>(base_dir: P, config: config::SiteConfig) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let posts_dir = base_dir.join(&config.posts_dir);
        let inject_dir = base_dir.join(&config.inject_dir);
        let public_dir = base_dir.join(&config.public_dir);
        let output_dir = base_dir.join(&config.output_dir);

        Self {
            config,
            base_dir,
            posts_dir,
            inject_dir,
            public_dir,
            output_dir,
        }
    }

    /// Output directory for rendered posts
    pub fn output_posts_dir(&self) -> PathBuf {
        self.output_dir.join("posts")
    }

    /// Path of the single-post template
    pub fn post_template(&self) -> PathBuf {
        self.base_dir.join(&self.config.post_template)
    }

    /// Path of the listing template
    pub fn listing_template(&self) -> PathBuf {
        self.base_dir.join(&self.config.listing_template)
    }

    /// Static pages copied verbatim into the output root
    pub fn static_pages(&self) -> Vec<PathBuf> {
        self.config
            .pages
            .iter()
            .map(|page| self.base_dir.join(page))
            .collect()
    }

    /// Run the full build: copy, render, inject, feed
    pub fn build(&self) -> Result<()> {
        commands::build::run(self)
    }

    /// Remove the output directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
