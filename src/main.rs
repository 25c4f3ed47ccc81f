//! Site publisher CLI - mirrors a project tree into a minified publish directory.
//!
//! Usage: site_publisher [--root <DIR>]
//!
//! Performs a full publish of the project tree: the output directory is reset,
//! HTML/CSS/JS files are minified (HTML additionally cache-bust stamped) and
//! every other file is copied verbatim.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use site_publisher::Publisher;
use site_publisher::config::ProjectConfig;

/// Publish a static site into a minified, cache-busted output directory.
#[derive(Parser, Debug)]
#[command(name = "site_publisher")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Project root containing the site sources
    #[arg(long, default_value = ".")]
    root: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("failed to resolve {}", cli.root.display()))?;

    let layout = ProjectConfig::discover(&root).into_layout();
    let publisher = Publisher::new(&root, &layout);
    let summary = publisher.publish()?;

    println!(
        "✓ Published {} files to {}",
        summary.total(),
        publisher.publish_root().display()
    );
    println!(
        "  {} html, {} css, {} js minified, {} copied",
        summary.html, summary.css, summary.js, summary.copied
    );

    Ok(())
}
