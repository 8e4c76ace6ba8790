//! Content module - posts, front matter and markdown

mod frontmatter;
pub mod loader;
mod markdown;
mod post;

pub use frontmatter::{value_to_text, FrontMatter};
pub use markdown::{rewrite_blockquotes, MarkdownRenderer};
pub use post::{sort_newest_first, Post};
