//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol on top of the tool dispatcher.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` and registered in the
//! [`ToolRegistry`]. The rmcp ToolRouter used by STDIO/TCP and the HTTP
//! transport's `call_tool` both go through the same [`Dispatcher`].
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{config::Config, error::Result as CrateResult};
use crate::domains::tools::{
    Dispatcher, FailureKind, InvocationOutcome, InvocationRequest, ToolRegistry,
    build_tool_router,
};

const INSTRUCTIONS: &str = "Calculator and FreeCodeCamp feed search tools. Use multiply/add/subtract/divide for arithmetic, fcc_news_search for articles and fcc_youtube_search for videos.";

/// The main MCP server handler.
///
/// Cloning is cheap: the registry and dispatcher are shared.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Dispatcher over the read-only tool registry.
    dispatcher: Arc<Dispatcher>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with every built-in tool registered.
    pub fn new(config: Config) -> CrateResult<Self> {
        let registry = ToolRegistry::with_default_tools(&config)?;
        Ok(Self::with_registry(config, registry))
    }

    /// Create a server over an already populated registry.
    pub fn with_registry(config: Config, registry: ToolRegistry) -> Self {
        let dispatcher = Arc::new(Dispatcher::new(Arc::new(registry)));
        info!("{} tools registered", dispatcher.registry().len());

        Self {
            tool_router: build_tool_router::<Self>(dispatcher.clone()),
            config: Arc::new(config),
            dispatcher,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    pub fn dispatcher(&self) -> &Arc<Dispatcher> {
        &self.dispatcher
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<Value> {
        self.dispatcher
            .registry()
            .descriptors()
            .iter()
            .map(|d| d.to_json())
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    ///
    /// Runs the dispatch on a blocking worker because feed tools perform
    /// blocking network I/O.
    #[instrument(skip(self, arguments))]
    pub async fn call_tool(&self, name: &str, arguments: Value) -> InvocationOutcome {
        let Some(request) = InvocationRequest::from_value(name, arguments) else {
            return InvocationOutcome::failure(
                FailureKind::InvalidArguments,
                "arguments must be a JSON object",
            );
        };

        let dispatcher = self.dispatcher.clone();
        match tokio::task::spawn_blocking(move || dispatcher.dispatch(request)).await {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!("Tool task failed: {}", e);
                InvocationOutcome::failure(FailureKind::DomainError, format!("Tool task failed: {}", e))
            }
        }
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
