//! Feed source client.
//!
//! Fetches a syndication document (RSS 2.0 or Atom) over HTTP and flattens it
//! into an ordered list of [`FeedEntry`] values. Every call performs a fresh
//! request; nothing is cached between calls.

use std::time::Duration;

use feed_rs::model::Entry;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::FeedError;
use crate::core::config::FeedsConfig;

/// One syndicated item, reduced to the fields the search engine needs.
///
/// Absent fields are stored as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub title: String,
    pub description: String,
    pub link: String,
}

impl FeedEntry {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            link: link.into(),
        }
    }
}

/// A source of feed entries.
///
/// Implementations block for the duration of the fetch.
pub trait FeedSource: Send + Sync {
    /// Fetch the document at `url` and return its entries in document order.
    fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError>;
}

/// HTTP feed client backed by `reqwest::blocking`.
///
/// The underlying HTTP client is built per fetch: a blocking client must not be
/// created or dropped on an async runtime thread, and fetches always run on a
/// blocking worker.
#[derive(Debug, Clone)]
pub struct HttpFeedClient {
    user_agent: String,
    timeout: Option<Duration>,
}

impl HttpFeedClient {
    /// Create a client from the feeds configuration.
    pub fn new(config: &FeedsConfig) -> Self {
        Self {
            user_agent: config.user_agent.clone(),
            timeout: config.timeout_secs.map(Duration::from_secs),
        }
    }

    fn build_client(&self) -> Result<reqwest::blocking::Client, FeedError> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(&self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build().map_err(|e| FeedError::Client(e.to_string()))
    }
}

impl FeedSource for HttpFeedClient {
    #[instrument(skip(self))]
    fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError> {
        info!("Fetching feed");

        let client = self.build_client()?;
        let response = client.get(url).send().map_err(|e| FeedError::fetch(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().map_err(|e| FeedError::fetch(url, e))?;
        debug!("Received {} bytes", body.len());

        let entries = parse_feed(url, body.as_ref())?;
        info!("Parsed {} entries", entries.len());
        Ok(entries)
    }
}

/// Parse an RSS or Atom document into entries, preserving document order.
///
/// `url` is only used to label errors.
pub fn parse_feed(url: &str, document: &[u8]) -> Result<Vec<FeedEntry>, FeedError> {
    let feed = feed_rs::parser::parse(document).map_err(|e| FeedError::parse(url, e))?;
    Ok(feed.entries.into_iter().map(to_entry).collect())
}

fn to_entry(entry: Entry) -> FeedEntry {
    let link = entry
        .links
        .iter()
        .find(|l| matches!(l.rel.as_deref(), None | Some("alternate")))
        .or_else(|| entry.links.first())
        .map(|l| l.href.clone())
        .unwrap_or_default();

    FeedEntry {
        title: entry.title.map(|t| t.content).unwrap_or_default(),
        description: entry.summary.map(|t| t.content).unwrap_or_default(),
        link,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>freeCodeCamp Programming Tutorials</title>
    <link>https://www.freecodecamp.org/news/</link>
    <description>Learn to code</description>
    <item>
      <title>Learn Python in 2025</title>
      <link>https://www.freecodecamp.org/news/learn-python/</link>
      <description>A beginner friendly guide</description>
    </item>
    <item>
      <title>React Hooks Explained</title>
      <link>https://www.freecodecamp.org/news/react-hooks/</link>
    </item>
  </channel>
</rss>"#;

    const ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>yt:channel:UC8butISFwT-Wl7EV0hUK0BQ</id>
  <title>freeCodeCamp.org</title>
  <updated>2025-01-15T10:00:00+00:00</updated>
  <entry>
    <id>yt:video:abc123</id>
    <title>Full Python Course - 12 Hours</title>
    <link rel="alternate" href="https://www.youtube.com/watch?v=abc123"/>
    <updated>2025-01-15T10:00:00+00:00</updated>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_rss_preserves_order() {
        let entries = parse_feed("test", RSS.as_bytes()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "Learn Python in 2025");
        assert_eq!(entries[0].link, "https://www.freecodecamp.org/news/learn-python/");
        assert_eq!(entries[0].description, "A beginner friendly guide");
        assert_eq!(entries[1].title, "React Hooks Explained");
    }

    #[test]
    fn test_parse_missing_description_is_empty() {
        let entries = parse_feed("test", RSS.as_bytes()).unwrap();
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn test_parse_atom() {
        let entries = parse_feed("test", ATOM.as_bytes()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].title, "Full Python Course - 12 Hours");
        assert_eq!(entries[0].link, "https://www.youtube.com/watch?v=abc123");
    }

    #[test]
    fn test_parse_malformed_document() {
        let result = parse_feed("http://feeds.test/bad", b"<html>not a feed");
        assert!(matches!(result, Err(FeedError::Parse { .. })));
    }

    #[test]
    fn test_fetch_unreachable_host() {
        let client = HttpFeedClient::new(&FeedsConfig::default());
        let result = client.fetch("http://127.0.0.1:1/rss");
        assert!(matches!(result, Err(FeedError::Fetch { .. })));
    }

    #[cfg(feature = "http")]
    fn serve_fixture(status: axum::http::StatusCode, body: &'static str) -> String {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let listener = runtime
            .block_on(tokio::net::TcpListener::bind("127.0.0.1:0"))
            .unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            runtime.block_on(async move {
                let app = axum::Router::new().route(
                    "/rss",
                    axum::routing::get(move || async move { (status, bytes::Bytes::from(body)) }),
                );
                axum::serve(listener, app).await.unwrap();
            });
        });

        format!("http://{}/rss", addr)
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_fetch_from_local_server() {
        let url = serve_fixture(axum::http::StatusCode::OK, RSS);
        let client = HttpFeedClient::new(&FeedsConfig::default());
        let entries = client.fetch(&url).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].title, "React Hooks Explained");
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_fetch_non_success_status() {
        let url = serve_fixture(axum::http::StatusCode::SERVICE_UNAVAILABLE, "");
        let client = HttpFeedClient::new(&FeedsConfig::default());
        let result = client.fetch(&url);
        assert!(matches!(result, Err(FeedError::Status { status: 503, .. })));
    }
}
