//! News search tool definition.

use std::sync::Arc;

use tracing::info;

use super::{run_search, search_params};
use crate::core::config::FeedsConfig;
use crate::domains::feeds::{FeedSearch, FeedSource, SearchFields};
use crate::domains::tools::{ToolArguments, ToolDescriptor};

/// Searches FreeCodeCamp news articles by title and description.
pub struct FccNewsSearchTool;

impl FccNewsSearchTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fcc_news_search";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search the FreeCodeCamp news feed (RSS) by title and description. Returns a list of {title, url} objects in feed order, or a single {message} object when nothing matches.";

    /// Sentinel message returned when nothing matches.
    pub const NO_RESULTS: &'static str = "No results found";

    pub fn search() -> FeedSearch {
        FeedSearch::new(SearchFields::TitleAndDescription, Self::NO_RESULTS)
    }

    /// Create the descriptor registered with the tool registry.
    pub fn descriptor(config: &FeedsConfig, source: Arc<dyn FeedSource>) -> ToolDescriptor {
        let url = config.news_url.clone();
        let search = Self::search();
        let [query, max_results] = search_params(config.default_max_results);

        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, move |args: &ToolArguments| {
            info!("Searching news feed {}", url);
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
    use crate::domains::tools::ArgValue;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingFeed {
        urls: Mutex<Vec<String>>,
    }

    impl FeedSource for RecordingFeed {
        fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(vec![
                FeedEntry::new("Intro to Go", "", "https://news/go"),
                FeedEntry::new("Web basics", "HTML and CSS for Python devs", "https://news/web"),
            ])
        }
    }

    fn args(query: &str, max_results: i64) -> ToolArguments {
        let mut args = ToolArguments::new();
        args.insert("query", ArgValue::String(query.to_string()));
        args.insert("max_results", ArgValue::Integer(max_results));
        args
    }

    #[test]
    fn test_matches_description() {
        let source = Arc::new(RecordingFeed::default());
        let tool = FccNewsSearchTool::descriptor(&FeedsConfig::default(), source.clone());

        let value = tool.handler().invoke(&args("python", 3)).unwrap();
        assert_eq!(value, json!([{ "title": "Web basics", "url": "https://news/web" }]));
    }

    #[test]
    fn test_fetches_configured_url_every_call() {
        let source = Arc::new(RecordingFeed::default());
        let config = FeedsConfig {
            news_url: "http://feeds.test/news".to_string(),
            ..FeedsConfig::default()
        };
        let tool = FccNewsSearchTool::descriptor(&config, source.clone());

        tool.handler().invoke(&args("go", 3)).unwrap();
        tool.handler().invoke(&args("go", 3)).unwrap();
        assert_eq!(
            *source.urls.lock().unwrap(),
            vec!["http://feeds.test/news", "http://feeds.test/news"]
        );
    }

    #[test]
    fn test_no_results_sentinel() {
        let tool = FccNewsSearchTool::descriptor(
            &FeedsConfig::default(),
            Arc::new(RecordingFeed::default()),
        );
        let value = tool.handler().invoke(&args("kotlin", 3)).unwrap();
        assert_eq!(value, json!([{ "message": "No results found" }]));
    }
}
