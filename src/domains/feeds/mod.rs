//! Feeds domain module.
//!
//! - `client.rs` - fetches and parses RSS/Atom documents into [`FeedEntry`] values
//! - `search.rs` - case-insensitive, capped search over fetched entries
//! - `error.rs` - feed-specific error types

mod client;
mod error;
mod search;

pub use client::{FeedEntry, FeedSource, HttpFeedClient, parse_feed};
pub use error::FeedError;
pub use search::{FeedSearch, SearchFields, SearchHit};
