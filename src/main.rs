use blog_feed_aggregator::aggregator::{write_posts, Aggregator};
use blog_feed_aggregator::cli::Args;
use blog_feed_aggregator::config::load_config;
use blog_feed_aggregator::fetcher::Fetcher;
use blog_feed_aggregator::types::{Result, Source};
use clap::Parser;
use tracing::{error, info};

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let sources = match &args.url {
        // Legacy mode: one synthesized source, config file untouched
        Some(url) => vec![Source::legacy(url.clone(), args.author.clone())],
        None => load_config(&args.config)?,
    };

    let fetcher = Fetcher::new()?;
    let aggregator = Aggregator::new(&fetcher);
    let posts = aggregator.run(&sources);

    write_posts(&posts, &args.out)?;
    info!("Wrote {} total posts to {}", posts.len(), args.out.display());

    Ok(())
}
