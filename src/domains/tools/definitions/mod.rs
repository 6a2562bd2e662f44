//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file and exposes a `descriptor()`
//! constructor used by the registry.

pub mod feeds;
pub mod math;
pub mod secret;

pub use feeds::{FccNewsSearchTool, FccYoutubeSearchTool};
pub use math::{AddTool, DivideTool, MultiplyTool, SubtractTool};
pub use secret::FccSecretMessageTool;
