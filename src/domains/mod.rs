//! Domains module containing business logic organized by bounded contexts.
//!
//! - **tools**: registry, dispatcher and the tool definitions
//! - **feeds**: feed fetching and search used by the feed tools

pub mod feeds;
pub mod tools;
