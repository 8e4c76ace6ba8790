//! CLI entry point for mdpress

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdpress")]
#[command(version)]
#[command(about = "Build a blog from Markdown posts and flat HTML templates", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Defaults to `build`
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy pages, render posts and the listing, inject fragments, write feeds
    #[command(alias = "b")]
    Build,

    /// Inject head/body/footer fragments into the existing output
    Inject,

    /// Write sitemap.xml and rss.xml for the existing output
    Feed,

    /// Render each post to a bare HTML file next to its source
    Convert,

    /// List posts, newest first
    List,

    /// Create a new post
    New {
        /// Title of the new post
        title: String,
    },

    /// Remove the output directory
    Clean,

    /// Build, then serve the output directory
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Rebuild when sources change
        #[arg(short, long)]
        watch: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdpress=debug,info"
    } else {
        "mdpress=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine site directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let site = mdpress::Site::new(&base_dir)?;

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            tracing::info!("Building site in {:?}", site.base_dir);
            site.build()?;
            println!("Built successfully!");
        }

        Commands::Inject => {
            let pages = mdpress::inject::run(&site)?;
            println!("Injected fragments into {} pages", pages);
        }

        Commands::Feed => {
            let summary = mdpress::feed::run(&site)?;
            println!(
                "Wrote sitemap.xml ({} urls) and rss.xml ({} items)",
                summary.urls, summary.items
            );
        }

        Commands::Convert => {
            let written = mdpress::commands::convert::run(&site)?;
            println!("Converted {} posts", written.len());
        }

        Commands::List => {
            mdpress::commands::list::run(&site)?;
        }

        Commands::New { title } => {
            let path = mdpress::commands::new::create_post(&site, &title)?;
            println!("Created: {}", path.display());
        }

        Commands::Clean => {
            site.clean()?;
            println!("Cleaned successfully!");
        }

        Commands::Server { port, ip, watch } => {
            tracing::info!("Building site...");
            site.build()?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            mdpress::server::start(&site, &ip, port, watch).await?;
        }
    }

    Ok(())
}
