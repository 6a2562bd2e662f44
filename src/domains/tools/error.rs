//! Tool-specific error types.

use thiserror::Error;

use crate::domains::feeds::FeedError;

/// Errors raised while populating or querying the tool registry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A tool with the same name is already registered.
    #[error("Tool already registered: {0}")]
    DuplicateTool(String),

    /// No tool is registered under the requested name.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

/// Errors that can occur while validating arguments or running a handler.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The handler rejected the input on domain grounds.
    #[error("{0}")]
    Domain(String),

    /// The external feed could not be fetched or parsed.
    #[error("Feed unavailable: {0}")]
    FeedUnavailable(#[from] FeedError),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new domain error.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::Domain(msg.into())
    }
}
