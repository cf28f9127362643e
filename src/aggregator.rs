use crate::fetcher::FetchFeed;
use crate::parser::parse_feed;
use crate::types::{Post, Result, Source};
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Runs the fetch/parse/merge pipeline over the configured sources.
pub struct Aggregator<'a, F: FetchFeed> {
    fetcher: &'a F,
}

impl<'a, F: FetchFeed> Aggregator<'a, F> {
    pub fn new(fetcher: &'a F) -> Self {
        Self { fetcher }
    }

    /// Fetch and parse every source in order, returning the merged post
    /// list sorted by date descending.
    ///
    /// A source without a URL is skipped with a warning. A fetch or parse
    /// failure is logged against the source id and contributes zero posts;
    /// it never aborts the run.
    pub fn run(&self, sources: &[Source]) -> Vec<Post> {
        let mut all_posts = Vec::new();

        for source in sources {
            let url = match &source.url {
                Some(url) => url,
                None => {
                    warn!("Skipping {}: no URL", source.id);
                    continue;
                }
            };

            match self.collect_source(source, url) {
                Ok(mut posts) => {
                    info!("{}: {} posts", source.id, posts.len());
                    all_posts.append(&mut posts);
                }
                Err(e) => warn!("Error fetching {}: {}", source.id, e),
            }
        }

        sort_by_date_desc(&mut all_posts);
        all_posts
    }

    fn collect_source(&self, source: &Source, url: &str) -> Result<Vec<Post>> {
        let content = self.fetcher.fetch(url)?;
        let mut posts = parse_feed(&content, &source.id, source.authors.as_deref())?;

        // Limit applies in parse order, before the cross-source sort;
        // sorting first would change which posts survive truncation.
        if let Some(limit) = source.limit {
            if limit > 0 {
                posts.truncate(limit);
            }
        }

        Ok(posts)
    }
}

/// Stable sort, newest first. Posts without a date compare as the empty
/// string and therefore sort after every dated post.
pub fn sort_by_date_desc(posts: &mut [Post]) {
    posts.sort_by(|a, b| {
        let a_key = a.date.as_deref().unwrap_or("");
        let b_key = b.date.as_deref().unwrap_or("");
        b_key.cmp(a_key)
    });
}

/// Serialize the merged posts as a pretty-printed JSON array, fully
/// replacing any existing file at `path`.
pub fn write_posts(posts: &[Post], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(posts)?;
    fs::write(path, json)?;
    Ok(())
}
