//! Build the whole site

use anyhow::Result;

use crate::generator::Generator;
use crate::{feed, inject, Site};

/// Copy, render, inject, then write the feeds
///
/// Every stage finishes before the next one starts; the first failure
/// stops the build and leaves the output directory as it is.
pub fn run(site: &Site) -> Result<()> {
    let start = std::time::Instant::now();

    let posts = Generator::new(site).generate()?;
    let pages = inject::run(site)?;
    let summary = feed::run(site)?;

    tracing::info!(
        "Built {} posts, {} pages, {} feed items in {:.2}s",
        posts.len(),
        pages,
        summary.items,
        start.elapsed().as_secs_f64()
    );
    Ok(())
}
