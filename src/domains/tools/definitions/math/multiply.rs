//! Multiply tool definition.

use serde_json::Value;

use super::{finite, number_param};
use crate::domains::tools::{ToolArguments, ToolDescriptor, ToolError};

/// Multiply tool - returns the product of `a` and `b`.
pub struct MultiplyTool;

impl MultiplyTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "multiply";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Multiply two numbers. Example: multiply(3, 4) returns 12.";

    pub fn execute(a: f64, b: f64) -> f64 {
        a * b
    }

    fn handle(args: &ToolArguments) -> Result<Value, ToolError> {
        finite(Self::execute(args.number("a")?, args.number("b")?))
    }

    /// Create the descriptor registered with the tool registry.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::handle)
            .with_param(number_param("a", "The first number."))
            .with_param(number_param("b", "The second number."))
    }
}
