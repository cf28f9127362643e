use clap::Parser;
use std::path::PathBuf;

/// Fetch blog posts from configured RSS feeds and write them as one JSON array.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the blogs YAML config
    #[arg(long, default_value = "src/data/blogs.yaml")]
    pub config: PathBuf,

    /// Output JSON path
    #[arg(long, default_value = "src/data/blog-posts.json")]
    pub out: PathBuf,

    /// (Legacy) Single RSS feed URL, bypasses the config file
    #[arg(long)]
    pub url: Option<String>,

    /// (Legacy) Single author to filter, used with --url
    #[arg(long)]
    pub author: Option<String>,
}
