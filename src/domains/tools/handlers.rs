//! Tool handler trait and the typed argument set handlers receive.

use std::collections::HashMap;

use serde_json::Value;

use super::ToolError;

/// A validated, type-coerced argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Number(f64),
    Integer(i64),
    String(String),
    Boolean(bool),
}

impl ArgValue {
    fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Integer(_) => "integer",
            Self::String(_) => "string",
            Self::Boolean(_) => "boolean",
        }
    }
}

/// The argument set a handler is invoked with.
///
/// Built by the dispatcher after validation, so every parameter declared in the
/// tool's schema is present (explicitly or through its default) with the
/// declared type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolArguments {
    values: HashMap<String, ArgValue>,
}

impl ToolArguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ArgValue) {
        self.values.insert(name.into(), value);
    }

    pub fn get(&self, name: &str) -> Option<&ArgValue> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn number(&self, name: &str) -> Result<f64, ToolError> {
        match self.require(name)? {
            ArgValue::Number(n) => Ok(*n),
            ArgValue::Integer(i) => Ok(*i as f64),
            other => Err(mismatch(name, "number", other)),
        }
    }

    pub fn integer(&self, name: &str) -> Result<i64, ToolError> {
        match self.require(name)? {
            ArgValue::Integer(i) => Ok(*i),
            other => Err(mismatch(name, "integer", other)),
        }
    }

    pub fn string(&self, name: &str) -> Result<&str, ToolError> {
        match self.require(name)? {
            ArgValue::String(s) => Ok(s),
            other => Err(mismatch(name, "string", other)),
        }
    }

    pub fn boolean(&self, name: &str) -> Result<bool, ToolError> {
        match self.require(name)? {
            ArgValue::Boolean(b) => Ok(*b),
            other => Err(mismatch(name, "boolean", other)),
        }
    }

    fn require(&self, name: &str) -> Result<&ArgValue, ToolError> {
        self.values
            .get(name)
            .ok_or_else(|| ToolError::invalid_arguments(format!("missing parameter '{}'", name)))
    }
}

fn mismatch(name: &str, expected: &str, found: &ArgValue) -> ToolError {
    ToolError::invalid_arguments(format!(
        "parameter '{}' is a {}, expected {}",
        name,
        found.type_name(),
        expected
    ))
}

/// Executable logic behind a tool.
///
/// Handlers may block (feed tools perform network I/O); async transports call
/// them from a blocking worker.
pub trait ToolHandler: Send + Sync {
    fn invoke(&self, arguments: &ToolArguments) -> Result<Value, ToolError>;
}

impl<F> ToolHandler for F
where
    F: Fn(&ToolArguments) -> Result<Value, ToolError> + Send + Sync,
{
    fn invoke(&self, arguments: &ToolArguments) -> Result<Value, ToolError> {
        self(arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_accessors() {
        let mut args = ToolArguments::new();
        args.insert("a", ArgValue::Number(1.5));
        args.insert("n", ArgValue::Integer(3));
        args.insert("q", ArgValue::String("rust".into()));
        args.insert("flag", ArgValue::Boolean(true));

        assert_eq!(args.number("a").unwrap(), 1.5);
        assert_eq!(args.number("n").unwrap(), 3.0);
        assert_eq!(args.integer("n").unwrap(), 3);
        assert_eq!(args.string("q").unwrap(), "rust");
        assert!(args.boolean("flag").unwrap());
    }

    #[test]
    fn test_missing_and_mismatched() {
        let mut args = ToolArguments::new();
        args.insert("q", ArgValue::String("rust".into()));

        assert!(matches!(args.number("a"), Err(ToolError::InvalidArguments(_))));
        assert!(matches!(args.integer("q"), Err(ToolError::InvalidArguments(_))));
    }

    #[test]
    fn test_closure_handler() {
        let handler = |args: &ToolArguments| -> Result<Value, ToolError> {
            Ok(serde_json::json!(args.len()))
        };
        let result = handler.invoke(&ToolArguments::new()).unwrap();
        assert_eq!(result, serde_json::json!(0));
    }
}
