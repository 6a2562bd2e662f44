//! Add tool definition.
//!
//! Exposed as `add` but implemented by `add_numbers`, and takes `x`/`y`
//! rather than `a`/`b`.

use serde_json::Value;

use super::{finite, number_param};
use crate::domains::tools::{ToolArguments, ToolDescriptor, ToolError};

/// Add tool - returns the sum of `x` and `y`.
pub struct AddTool;

impl AddTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "add";

    /// Internal handler identifier.
    pub const HANDLER_ID: &'static str = "add_numbers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Add two numbers.";

    pub fn add_numbers(x: f64, y: f64) -> f64 {
        x + y
    }

    fn handle(args: &ToolArguments) -> Result<Value, ToolError> {
        finite(Self::add_numbers(args.number("x")?, args.number("y")?))
    }

    /// Create the descriptor registered with the tool registry.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::handle)
            .with_handler_id(Self::HANDLER_ID)
            .with_tag("math")
            .with_tag("arithmetic")
            .with_param(number_param("x", "The first number."))
            .with_param(number_param("y", "The second number."))
    }
}
