//! Feed MCP Server Library
//!
//! A Model Context Protocol server exposing a small catalogue of tools:
//! four arithmetic operations, two keyword searches over FreeCodeCamp's
//! news and video feeds, and a constant greeting.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, the rmcp server handler and transports
//! - **domains**: business logic
//!   - **feeds**: fetching/parsing RSS and Atom, keyword search
//!   - **tools**: descriptors, registry, argument validation and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use feed_mcp_server::{Config, McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

pub use core::{Config, Error, McpServer, Result};
