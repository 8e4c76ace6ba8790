//! Create a new post

use anyhow::Result;
use chrono::{DateTime, Local};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::PathBuf;

use crate::Site;

/// Scaffold a post in the posts directory and return its path
pub fn create_post(site: &Site, title: &str) -> Result<PathBuf> {
    let now = Local::now();
    let filename = post_file_name(&site.config.new_post_name, title, &now);
    let file_path = site.posts_dir.join(filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    fs::create_dir_all(&site.posts_dir)?;
    fs::write(&file_path, scaffold(title, &now)?)?;
    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}

/// Expand `:title`, `:year`, `:month` and `:day` in the name pattern
fn post_file_name(pattern: &str, title: &str, now: &DateTime<Local>) -> String {
    let slug = slug::slugify(title);
    pattern
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string())
}

/// Front matter with every key the templates read, then an empty body
fn scaffold(title: &str, now: &DateTime<Local>) -> Result<String> {
    let mut cover = Mapping::new();
    cover.insert("image".into(), Value::String(String::new()));

    let mut fm = Mapping::new();
    fm.insert("title".into(), title.into());
    fm.insert(
        "published".into(),
        now.format("%Y-%m-%d %H:%M:%S%:z").to_string().into(),
    );
    fm.insert("summary".into(), Value::String(String::new()));
    fm.insert("cover".into(), Value::Mapping(cover));

    Ok(format!("---\n{}---\n\n", serde_yaml::to_string(&fm)?))
}
