//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// FreeCodeCamp news RSS feed.
pub const DEFAULT_NEWS_URL: &str = "https://www.freecodecamp.org/news/rss/";

/// FreeCodeCamp YouTube channel feed.
pub const DEFAULT_VIDEOS_URL: &str =
    "https://www.youtube.com/feeds/videos.xml?channel_id=UC8butISFwT-Wl7EV0hUK0BQ";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Feed sources used by the search tools.
    pub feeds: FeedsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Feed source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedsConfig {
    /// URL of the news feed searched by `fcc_news_search`.
    pub news_url: String,

    /// URL of the video feed searched by `fcc_youtube_search`.
    pub videos_url: String,

    /// Result cap applied when the caller omits `max_results`.
    pub default_max_results: i64,

    /// User-Agent header sent with feed requests.
    pub user_agent: String,

    /// Request timeout in seconds. `None` keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        Self {
            news_url: DEFAULT_NEWS_URL.to_string(),
            videos_url: DEFAULT_VIDEOS_URL.to_string(),
            default_max_results: 3,
            user_agent: format!("feed-mcp-server/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "feed-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            feeds: FeedsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_FEED_NEWS_URL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = parse_flag(&timestamps, true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.feeds = FeedsConfig::from_env();

        config
    }
}

impl FeedsConfig {
    /// Load feed configuration from `MCP_FEED_*` variables.
    pub fn from_env() -> Self {
        let mut feeds = Self::default();

        if let Ok(url) = std::env::var("MCP_FEED_NEWS_URL") {
            info!("News feed overridden: {}", url);
            feeds.news_url = url;
        }

        if let Ok(url) = std::env::var("MCP_FEED_VIDEOS_URL") {
            info!("Video feed overridden: {}", url);
            feeds.videos_url = url;
        }

        if let Ok(raw) = std::env::var("MCP_FEED_DEFAULT_MAX_RESULTS") {
            match raw.parse() {
                Ok(n) => feeds.default_max_results = n,
                Err(_) => warn!(
                    "Ignoring invalid MCP_FEED_DEFAULT_MAX_RESULTS={:?}, using {}",
                    raw, feeds.default_max_results
                ),
            }
        }

        if let Ok(agent) = std::env::var("MCP_FEED_USER_AGENT") {
            feeds.user_agent = agent;
        }

        match std::env::var("MCP_FEED_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse() {
                Ok(secs) => {
                    feeds.timeout_secs = Some(secs);
                    info!("Feed request timeout: {}s", secs);
                }
                Err(_) => warn!("Ignoring invalid MCP_FEED_TIMEOUT_SECS={:?}", raw),
            },
            Err(_) => warn!(
                "MCP_FEED_TIMEOUT_SECS not set - feed requests use the HTTP client's default timeout"
            ),
        }

        feeds
    }
}

fn parse_flag(raw: &str, default: bool) -> bool {
    match raw.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
