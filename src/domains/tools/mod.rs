//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are named, typed operations that MCP clients invoke by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `descriptor.rs` - Tool metadata, parameter schema and argument validation
//! - `handlers.rs` - Handler trait and typed argument set
//! - `registry.rs` - Name to descriptor mapping
//! - `dispatcher.rs` - Request to outcome resolution, the single failure boundary
//! - `router.rs` - rmcp ToolRouter generated from the registry
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` with a `descriptor()` constructor
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `ToolRegistry::with_feed_source`
//!
//! The router and the HTTP transport pick it up from the registry.

pub mod definitions;
mod descriptor;
mod dispatcher;
mod error;
mod handlers;
mod registry;
pub mod router;

pub use descriptor::{ParamSpec, ParamType, ToolDescriptor};
pub use dispatcher::{Dispatcher, FailureKind, InvocationError, InvocationOutcome, InvocationRequest};
pub use error::{RegistryError, ToolError};
pub use handlers::{ArgValue, ToolArguments, ToolHandler};
pub use registry::ToolRegistry;
pub use router::{build_tool_router, into_call_result};
