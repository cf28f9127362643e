use crate::types::{Post, Result};
use chrono::DateTime;
use rss::Channel;
use tracing::debug;

/// Conventional RSS `pubDate` layout, e.g. "Tue, 03 Jun 2025 14:22:00 +0000".
const PUB_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Parse RSS content into normalized posts tagged with `source_id`.
///
/// When `authors` is present and non-empty, only items whose Dublin Core
/// creator matches one of the names (case-insensitively) are kept; items
/// without a creator are dropped under an active filter. Malformed XML is
/// an error; a document without a `<channel>` element yields no posts.
pub fn parse_feed(content: &str, source_id: &str, authors: Option<&[String]>) -> Result<Vec<Post>> {
    let channel = match Channel::read_from(content.as_bytes()) {
        Ok(channel) => channel,
        // read_from hits EOF when a well-formed document has no channel
        Err(rss::Error::Eof) => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    let filter: Vec<String> = authors
        .unwrap_or(&[])
        .iter()
        .map(|a| a.to_lowercase())
        .collect();

    let mut posts = Vec::new();

    for item in channel.items() {
        let creator = item
            .dublin_core_ext()
            .and_then(|dc| dc.creators().first())
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        if !filter.is_empty() {
            match &creator {
                Some(name) if filter.contains(&name.to_lowercase()) => {}
                _ => continue,
            }
        }

        let date = non_empty(item.pub_date()).map(|raw| {
            DateTime::parse_from_str(&raw, PUB_DATE_FORMAT)
                .map(|dt| dt.to_rfc3339())
                .unwrap_or(raw)
        });

        let categories = item
            .categories()
            .iter()
            .map(|c| c.name().trim())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();

        posts.push(Post {
            source: source_id.to_string(),
            title: non_empty(item.title()),
            url: non_empty(item.link()),
            date,
            author: creator,
            categories,
            description: non_empty(item.description()),
        });
    }

    debug!("Parsed {} posts from feed {}", posts.len(), source_id);

    Ok(posts)
}

/// Trimmed element text; whitespace-only or missing text yields `None`.
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
