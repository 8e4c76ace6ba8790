//! Post model

use chrono::NaiveDateTime;
use std::path::PathBuf;

use super::{FrontMatter, MarkdownRenderer};
use crate::helpers::date;
use crate::templates::Context;

/// A blog post
#[derive(Debug, Clone)]
pub struct Post {
    /// Post title
    pub title: String,

    /// `published` exactly as written in the front matter
    pub published: String,

    /// `YYYY-MM-DD` shown to readers
    pub date: String,

    /// Timestamp used to order posts
    pub datetime: NaiveDateTime,

    /// Cover image URL
    pub cover: String,

    /// Summary shown in the listing
    pub summary: String,

    /// Rendered HTML content
    pub content: String,

    /// Output file name, `<stem>.html`
    pub slug: String,

    /// Full source file path
    pub full_source: PathBuf,
}

impl Post {
    /// Build a post from parsed front matter and its markdown body
    pub fn from_parts(
        slug: String,
        full_source: PathBuf,
        fm: &FrontMatter,
        body: &str,
        renderer: &MarkdownRenderer,
    ) -> Self {
        let published = fm.text("published");
        Self {
            title: fm.text("title"),
            date: date::display_date(&published),
            datetime: date::sort_key(&published),
            published,
            cover: fm.cover_image(),
            summary: fm.text("summary"),
            content: renderer.render(body),
            slug,
            full_source,
        }
    }

    /// Values for the post and listing templates
    pub fn context(&self) -> Context {
        let mut context = Context::new();
        context.insert("title", &self.title);
        context.insert("date", &self.date);
        context.insert("img", &self.cover);
        context.insert("img-alt", &self.title);
        // Key spelling is shared with existing templates
        context.insert("summry", &self.summary);
        context.insert("Text", &self.content);
        context.insert("slug", &self.slug);
        context.insert("datetime", date::format_timestamp(&self.datetime));
        context
    }

    /// Site-relative URL of the rendered post
    pub fn url(&self) -> String {
        format!("/posts/{}", self.slug)
    }
}

/// Sort newest first; equal timestamps keep their current order
pub fn sort_newest_first(posts: &mut [Post]) {
    posts.sort_by(|a, b| b.datetime.cmp(&a.datetime));
}
