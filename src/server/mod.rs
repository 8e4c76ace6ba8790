//! Preview server for the output directory

use anyhow::Result;
use axum::Router;
use notify_debouncer_mini::{new_debouncer, notify::RecursiveMode};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::Site;

/// Serve the output directory, optionally rebuilding on source changes
pub async fn start(site: &Site, ip: &str, port: u16, watch: bool) -> Result<()> {
    let app = Router::new()
        .fallback_service(ServeDir::new(&site.output_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    if watch {
        println!("Watching for changes...");
        let site = site.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = watch_and_rebuild(&site) {
                tracing::error!("File watcher error: {}", e);
            }
        });
    }
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Everything a build reads, excluding the output directory
fn watched_paths(site: &Site) -> Vec<(PathBuf, RecursiveMode)> {
    let mut paths = vec![
        (site.posts_dir.clone(), RecursiveMode::Recursive),
        (site.inject_dir.clone(), RecursiveMode::Recursive),
        (site.public_dir.clone(), RecursiveMode::Recursive),
        (site.post_template(), RecursiveMode::NonRecursive),
        (site.listing_template(), RecursiveMode::NonRecursive),
        (site.base_dir.join("_config.yml"), RecursiveMode::NonRecursive),
    ];
    paths.extend(
        site.static_pages()
            .into_iter()
            .map(|page| (page, RecursiveMode::NonRecursive)),
    );
    paths.retain(|(path, _)| path.exists());
    paths
}

/// Block on file events and rebuild after each debounced batch
fn watch_and_rebuild(site: &Site) -> Result<()> {
    let (tx, rx) = std::sync::mpsc::channel();
    let mut debouncer = new_debouncer(Duration::from_millis(500), tx)?;

    for (path, mode) in watched_paths(site) {
        debouncer.watcher().watch(&path, mode)?;
        tracing::debug!("Watching: {:?}", path);
    }

    loop {
        match rx.recv() {
            Ok(Ok(events)) => {
                for event in &events {
                    tracing::info!("File changed: {}", event.path.display());
                }
                match rebuild(&site.base_dir) {
                    Ok(()) => tracing::info!("Rebuilt successfully"),
                    Err(e) => tracing::error!("Build failed: {:#}", e),
                }
            }
            Ok(Err(e)) => {
                tracing::error!("Watch error: {:?}", e);
            }
            Err(e) => {
                tracing::error!("Channel error: {:?}", e);
                break;
            }
        }
    }

    Ok(())
}

/// Reload `_config.yml`, then build with the fresh settings
fn rebuild(base_dir: &Path) -> Result<()> {
    Site::new(base_dir)?.build()
}
