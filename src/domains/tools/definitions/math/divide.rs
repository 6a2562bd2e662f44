//! Divide tool definition.

use serde_json::Value;

use super::{finite, number_param};
use crate::domains::tools::{ToolArguments, ToolDescriptor, ToolError};

/// Divide tool - returns `a / b`, rejecting a zero divisor.
pub struct DivideTool;

impl DivideTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "divide";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Divide two numbers. Fails when the divisor is zero instead of returning infinity.";

    pub fn execute(a: f64, b: f64) -> Result<f64, ToolError> {
        if b == 0.0 {
            return Err(ToolError::domain("Cannot divide by zero."));
        }
        Ok(a / b)
    }

    fn handle(args: &ToolArguments) -> Result<Value, ToolError> {
        finite(Self::execute(args.number("a")?, args.number("b")?)?)
    }

    /// Create the descriptor registered with the tool registry.
    pub fn descriptor() -> ToolDescriptor {
        ToolDescriptor::new(Self::NAME, Self::DESCRIPTION, Self::handle)
            .with_param(number_param("a", "The dividend (number being divided)."))
            .with_param(number_param("b", "The divisor (number to divide by)."))
    }
}
