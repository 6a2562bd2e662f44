//! YouTube search tool definition.
//!
//! The channel feed carries no description, so only titles are searched.

use std::sync::Arc;

use tracing::info;

use super::{run_search, search_params};
use crate::core::config::FeedsConfig;
use crate::domains::feeds::{FeedSearch, FeedSource, SearchFields};
use crate::domains::tools::{ToolArguments, ToolDescriptor};

/// Searches the FreeCodeCamp YouTube channel by video title.
pub struct FccYoutubeSearchTool;

impl FccYoutubeSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fcc_youtube_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the FreeCodeCamp YouTube channel (RSS) by video title. Returns a list of {title, url} objects in feed order, or a single {message} object when nothing matches.";

    /// Sentinel message returned when nothing matches.
    pub const NO_RESULTS: &'static str = "No videos found";

    pub fn search() -> FeedSearch {
        FeedSearch::new(SearchFields::TitleOnly, Self::NO_RESULTS)
    }

    /// Create the descriptor registered with the tool registry.
    pub fn descriptor(config: &FeedsConfig, source: Arc<dyn FeedSource>) -> ToolDescriptor {
        let url = config.videos_url.clone();
        let search = Self::search();
        let [query, max_results] = search_params(config.default_max_results);

        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, move |args: &ToolArguments| {
            info!("Searching video feed {}", url);
            run_search(source.as_ref(), &url, &search, args)
        })
        .with_tag("feeds")
        .with_param(query)
        .with_param(max_results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::feeds::{FeedEntry, FeedError};
    use crate::domains::tools::{ArgValue, ToolError};
    use serde_json::json;

    struct VideoFeed;

    impl FeedSource for VideoFeed {
        fn fetch(&self, _url: &str) -> Result<Vec<FeedEntry>, FeedError> {
            Ok(vec![
                FeedEntry::new("JavaScript Full Course", "", "https://yt/1"),
                FeedEntry::new("Data Structures", "Taught in JavaScript", "https://yt/2"),
                FeedEntry::new("Advanced JavaScript", "", "https://yt/3"),
            ])
        }
    }

    struct DownFeed;

    impl FeedSource for DownFeed {
        fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError> {
            Err(FeedError::Status {
                url: url.to_string(),
                status: 502,
            })
        }
    }

    fn args(query: &str, max_results: i64) -> ToolArguments {
        let mut args = ToolArguments::new();
        args.insert("query", ArgValue::String(query.to_string()));
        args.insert("max_results", ArgValue::Integer(max_results));
        args
    }

    #[test]
    fn test_title_only() {
        let tool = FccYoutubeSearchTool::descriptor(&FeedsConfig::default(), Arc::new(VideoFeed));
        let value = tool.handler().invoke(&args("JAVASCRIPT", 5)).unwrap();
        assert_eq!(
            value,
            json!([
                { "title": "JavaScript Full Course", "url": "https://yt/1" },
                { "title": "Advanced JavaScript", "url": "https://yt/3" }
            ])
        );
    }

    #[test]
    fn test_cap() {
        let tool = FccYoutubeSearchTool::descriptor(&FeedsConfig::default(), Arc::new(VideoFeed));
        let value = tool.handler().invoke(&args("javascript", 1)).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_feed_error_propagates() {
        let tool = FccYoutubeSearchTool::descriptor(&FeedsConfig::default(), Arc::new(DownFeed));
        let err = tool.handler().invoke(&args("rust", 3)).unwrap_err();
        assert!(matches!(err, ToolError::FeedUnavailable(_)));
    }
}
