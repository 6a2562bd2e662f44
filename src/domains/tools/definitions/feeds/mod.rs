//! FreeCodeCamp feed search tools.
//!
//! - `news`: searches article titles and descriptions in the news RSS feed
//! - `youtube`: searches video titles in the channel's Atom feed
//!
//! Both re-fetch their feed on every call.

pub mod news;
pub mod youtube;

pub use news::FccNewsSearchTool;
pub use youtube::FccYoutubeSearchTool;

use serde_json::{Value, json};

use crate::domains::feeds::{FeedSearch, FeedSource};
use crate::domains::tools::{ParamSpec, ParamType, ToolArguments, ToolError};

fn search_params(default_max_results: i64) -> [ParamSpec; 2] {
    [
        ParamSpec::required(
            "query",
            ParamType::String,
            "The search term (e.g. \"python\", \"react\", \"algorithms\").",
        ),
        ParamSpec::optional(
            "max_results",
            ParamType::Integer,
            "Maximum number of results to return.",
            json!(default_max_results),
        ),
    ]
}

fn run_search(
    source: &dyn FeedSource,
    url: &str,
    search: &FeedSearch,
    args: &ToolArguments,
) -> Result<Value, ToolError> {
    let query = args.string("query")?;
    let max_results = args.integer("max_results")?;

    let entries = source.fetch(url)?;
    let hits = search.run(&entries, query, max_results);
    Ok(json!(hits))
}
