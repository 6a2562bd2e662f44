//! Tool Registry - name to descriptor mapping.
//!
//! The registry is filled once at start-up and shared read-only afterwards,
//! so lookups need no locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::definitions::{
    AddTool, DivideTool, FccNewsSearchTool, FccSecretMessageTool, FccYoutubeSearchTool,
    MultiplyTool, SubtractTool,
};
use super::{RegistryError, ToolDescriptor};
use crate::core::config::Config;
use crate::domains::feeds::{FeedSource, HttpFeedClient};

/// Tool registry - manages all available tools.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in tool, with feed tools reading
    /// through a real HTTP client.
    pub fn with_default_tools(config: &Config) -> Result<Self, RegistryError> {
        let source: Arc<dyn FeedSource> = Arc::new(HttpFeedClient::new(&config.feeds));
        Self::with_feed_source(config, source)
    }

    /// Create a registry holding every built-in tool, with feed tools reading
    /// through `source`.
    pub fn with_feed_source(
        config: &Config,
        source: Arc<dyn FeedSource>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register(MultiplyTool::descriptor())?;
        registry.register(AddTool::descriptor())?;
        registry.register(SubtractTool::descriptor())?;
        registry.register(DivideTool::descriptor())?;
        registry.register(FccNewsSearchTool::descriptor(&config.feeds, source.clone()))?;
        registry.register(FccYoutubeSearchTool::descriptor(&config.feeds, source))?;
        registry.register(FccSecretMessageTool::descriptor())?;
        Ok(registry)
    }

    /// Register a tool. Fails if the name is already taken.
    pub fn register(&mut self, descriptor: ToolDescriptor) -> Result<(), RegistryError> {
        if self.index.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateTool(descriptor.name));
        }
        debug!(
            "Registering tool {} (handler {})",
            descriptor.name, descriptor.handler_id
        );
        self.index.insert(descriptor.name.clone(), self.tools.len());
        self.tools.push(descriptor);
        Ok(())
    }

    /// Look up a tool by its caller-visible name.
    pub fn lookup(&self, name: &str) -> Result<&ToolDescriptor, RegistryError> {
        self.index
            .get(name)
            .map(|&i| &self.tools[i])
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))
    }

    /// All descriptors, in registration order.
    pub fn descriptors(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::{ToolArguments, ToolError};
    use serde_json::Value;

    fn noop(name: &str) -> ToolDescriptor {
        ToolDescriptor::new(name, "noop", |_: &ToolArguments| -> Result<Value, ToolError> {
            Ok(Value::Null)
        })
    }

    #[test]
    fn test_register_then_lookup() {
        let mut registry = ToolRegistry::new();
        registry.register(noop("first").with_handler_id("first_impl")).unwrap();

        let found = registry.lookup("first").unwrap();
        assert_eq!(found.name, "first");
        assert_eq!(found.handler_id, "first_impl");
    }

    #[test]
    fn test_lookup_unknown() {
        let registry = ToolRegistry::new();
        assert_eq!(
            registry.lookup("missing").unwrap_err(),
            RegistryError::UnknownTool("missing".to_string())
        );
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut registry = ToolRegistry::new();
        registry.register(noop("dup")).unwrap();
        assert_eq!(
            registry.register(noop("dup")).unwrap_err(),
            RegistryError::DuplicateTool("dup".to_string())
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_default_tools() {
        let registry = ToolRegistry::with_default_tools(&Config::default()).unwrap();
        assert_eq!(
            registry.tool_names(),
            vec![
                "multiply",
                "add",
                "subtract",
                "divide",
                "fcc_news_search",
                "fcc_youtube_search",
                "fcc_secret_message",
            ]
        );
        assert_eq!(registry.lookup("add").unwrap().handler_id, "add_numbers");
    }
}
