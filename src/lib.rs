pub mod aggregator;
pub mod cli;
pub mod config;
pub mod fetcher;
pub mod parser;
pub mod types;

pub use aggregator::{sort_by_date_desc, write_posts, Aggregator};
pub use config::load_config;
pub use fetcher::{FetchFeed, Fetcher};
pub use parser::parse_feed;
pub use types::{AggregatorError, Post, Result, Source};
