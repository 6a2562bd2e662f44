//! Arithmetic tools.
//!
//! Pure computations over two numbers. `divide` rejects a zero divisor and
//! every tool rejects a result that overflows `f64`.

pub mod add;
pub mod divide;
pub mod multiply;
pub mod subtract;

pub use add::AddTool;
pub use divide::DivideTool;
pub use multiply::MultiplyTool;
pub use subtract::SubtractTool;

use serde_json::Value;

use crate::domains::tools::{ParamSpec, ParamType, ToolError};

pub(crate) fn number_param(name: &str, description: &str) -> ParamSpec {
    ParamSpec::required(name, ParamType::Number, description)
}

/// Wrap an arithmetic result, rejecting overflow to infinity or NaN.
///
/// `serde_json` would otherwise encode a non-finite float as `null`.
pub(crate) fn finite(value: f64) -> Result<Value, ToolError> {
    if !value.is_finite() {
        return Err(ToolError::domain("Result is out of range."));
    }
    Ok(Value::from(value))
}
