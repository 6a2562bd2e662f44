//! Secret message tool definition.
//!
//! A static tool with no parameters and no external data.

use serde_json::{Value, json};

use crate::domains::tools::{ToolArguments, ToolDescriptor, ToolError};

/// Returns a fixed motivational message.
pub struct FccSecretMessageTool;

impl FccSecretMessageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "fcc_secret_message";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Returns a secret message of FreeCodeCamp.";

    pub const MESSAGE: &'static str = "Keep exploring! and happy coding!";

    fn handle(_args: &ToolArguments) -> Result<Value, ToolError> {
        Ok(json!(Self::MESSAGE))
    }

    /// Create the descriptor registered with the tool registry.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::handle)
    }
}
