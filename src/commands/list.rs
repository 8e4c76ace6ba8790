//! List posts

use anyhow::Result;

use crate::content::loader::ContentLoader;
use crate::content::sort_newest_first;
use crate::Site;

/// Print posts newest first
pub fn run(site: &Site) -> Result<()> {
    let mut posts = ContentLoader::new(site).load_posts()?;
    sort_newest_first(&mut posts);

    println!("Posts ({}):", posts.len());
    for post in posts {
        let source = post
            .full_source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        println!("  {} - {} [{}]", post.date, post.title, source);
    }

    Ok(())
}
