use serde::{Deserialize, Serialize};

/// One configured feed from the `blogs:` section of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct Source {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Source {
    /// Synthesize a source for the legacy `--url` mode, bypassing config.
    pub fn legacy(url: String, author: Option<String>) -> Self {
        Self {
            id: "custom".to_string(),
            url: Some(url),
            authors: author.map(|a| vec![a]),
            limit: None,
        }
    }
}

/// One normalized blog post extracted from a feed item.
///
/// Absent optional fields serialize as JSON `null` rather than being
/// omitted. `date` holds the RFC 3339 form of the item's `pubDate` when it
/// parses, otherwise the raw `pubDate` string unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub source: String,
    pub title: Option<String>,
    pub url: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
    pub categories: Vec<String>,
    pub description: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AggregatorError {
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed parse error: {0}")]
    Parse(#[from] rss::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AggregatorError>;
