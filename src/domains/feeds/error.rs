//! Feed-specific error types.

use thiserror::Error;

/// Errors that can occur while fetching or parsing a feed.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The HTTP request could not be completed.
    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("Feed {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response body is not a valid RSS or Atom document.
    #[error("Failed to parse feed {url}: {message}")]
    Parse { url: String, message: String },

    /// The HTTP client could not be constructed.
    #[error("Feed client error: {0}")]
    Client(String),
}

impl FeedError {
    /// Create a fetch error.
    pub fn fetch(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Fetch {
            url: url.into(),
            message: message.to_string(),
        }
    }

    /// Create a parse error.
    pub fn parse(url: impl Into<String>, message: impl ToString) -> Self {
        Self::Parse {
            url: url.into(),
            message: message.to_string(),
        }
    }
}
