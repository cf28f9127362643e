use crate::types::{Result, Source};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct BlogConfig {
    #[serde(default)]
    blogs: Vec<Source>,
}

/// Load the configured blog sources from a YAML document.
///
/// The document's top-level `blogs:` key holds the source list; a document
/// without that key yields an empty list. An unreadable file or invalid
/// YAML is fatal to the run.
pub fn load_config(path: &Path) -> Result<Vec<Source>> {
    let content = fs::read_to_string(path)?;
    let config: BlogConfig = serde_yaml::from_str(&content)?;

    debug!(
        "Loaded {} blog entries from {}",
        config.blogs.len(),
        path.display()
    );

    Ok(config.blogs)
}
