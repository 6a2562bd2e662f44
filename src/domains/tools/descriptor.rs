//! Tool descriptors: caller-visible metadata, parameter schema and handler
//! binding for one tool.

use std::fmt;
use std::sync::Arc;

use serde_json::{Map, Value, json};

use super::{ArgValue, ToolArguments, ToolError, ToolHandler};

/// Semantic type of a tool parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Number,
    Integer,
    String,
    Boolean,
}

impl ParamType {
    /// JSON Schema type name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Boolean => "boolean",
        }
    }

    /// Convert a raw JSON value to this type.
    ///
    /// Numeric and boolean parameters also accept their string spellings
    /// (`"3.5"`, `"7"`, `"true"`). Integral floats such as `3.0` are accepted
    /// as integers.
    pub fn coerce(&self, value: &Value) -> Option<ArgValue> {
        match (self, value) {
            (Self::Number, Value::Number(n)) => n.as_f64().map(ArgValue::Number),
            (Self::Number, Value::String(s)) => s
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(ArgValue::Number),
            (Self::Integer, Value::Number(n)) => n
                .as_i64()
                .or_else(|| {
                    n.as_f64()
                        .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                        .map(|f| f as i64)
                })
                .map(ArgValue::Integer),
            (Self::Integer, Value::String(s)) => s.trim().parse::<i64>().ok().map(ArgValue::Integer),
            (Self::String, Value::String(s)) => Some(ArgValue::String(s.clone())),
            (Self::Boolean, Value::Bool(b)) => Some(ArgValue::Boolean(*b)),
            (Self::Boolean, Value::String(s)) => match s.to_ascii_lowercase().as_str() {
                "true" => Some(ArgValue::Boolean(true)),
                "false" => Some(ArgValue::Boolean(false)),
                _ => None,
            },
            _ => None,
        }
    }
}

/// One entry of a tool's parameter schema.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: String,
    pub param_type: ParamType,
    pub description: String,
    pub required: bool,
    pub default: Option<Value>,
}

impl ParamSpec {
    /// A parameter the caller must supply.
    pub fn required(
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: description.into(),
            required: true,
            default: None,
        }
    }

    /// An optional parameter that falls back to `default` when absent.
    pub fn optional(
        name: impl Into<String>,
        param_type: ParamType,
        description: impl Into<String>,
        default: Value,
    ) -> Self {
        Self {
            name: name.into(),
            param_type,
            description: description.into(),
            required: false,
            default: Some(default),
        }
    }

    fn to_schema(&self) -> Value {
        let mut schema = json!({
            "type": self.param_type.as_str(),
            "description": self.description,
        });
        if let (Some(default), Some(obj)) = (&self.default, schema.as_object_mut()) {
            obj.insert("default".to_string(), default.clone());
        }
        schema
    }
}

/// Immutable description of a tool together with the handler that runs it.
///
/// `name` is what callers see; `handler_id` identifies the implementation and
/// may differ (the `add` tool is served by `add_numbers`).
#[derive(Clone)]
pub struct ToolDescriptor {
    pub name: String,
    pub handler_id: String,
    pub description: String,
    pub tags: Vec<String>,
    pub params: Vec<ParamSpec>,
    handler: Arc<dyn ToolHandler>,
}

impl ToolDescriptor {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        handler: impl ToolHandler + 'static,
    ) -> Self {
        let name = name.into();
        Self {
            handler_id: name.clone(),
            name,
            description: description.into(),
            tags: Vec::new(),
            params: Vec::new(),
            handler: Arc::new(handler),
        }
    }

    pub fn with_handler_id(mut self, handler_id: impl Into<String>) -> Self {
        self.handler_id = handler_id.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    pub fn with_param(mut self, param: ParamSpec) -> Self {
        self.params.push(param);
        self
    }

    pub fn handler(&self) -> &dyn ToolHandler {
        self.handler.as_ref()
    }

    /// Validate a raw argument object against the parameter schema.
    ///
    /// Schema parameters are checked in declaration order, then unknown keys;
    /// the first offending parameter is reported. `null` counts as absent.
    pub fn validate(&self, raw: &Map<String, Value>) -> Result<ToolArguments, ToolError> {
        let mut arguments = ToolArguments::new();

        for param in &self.params {
            let value = match raw.get(&param.name).filter(|v| !v.is_null()) {
                Some(value) => value,
                None => match &param.default {
                    Some(default) if !param.required => default,
                    _ => {
                        return Err(ToolError::invalid_arguments(format!(
                            "missing required parameter '{}'",
                            param.name
                        )));
                    }
                },
            };

            let coerced = param.param_type.coerce(value).ok_or_else(|| {
                ToolError::invalid_arguments(format!(
                    "parameter '{}' expects {}, got {}",
                    param.name,
                    param.param_type.as_str(),
                    value
                ))
            })?;
            arguments.insert(param.name.clone(), coerced);
        }

        if let Some(unknown) = raw
            .keys()
            .find(|key| !self.params.iter().any(|p| &p.name == *key))
        {
            return Err(ToolError::invalid_arguments(format!(
                "unknown parameter '{}'",
                unknown
            )));
        }

        Ok(arguments)
    }

    /// JSON Schema for the tool input, as advertised in `tools/list`.
    ///
    /// Built from `params` rather than derived with `schemars`: parameter
    /// lists and defaults (such as the configured `max_results`) are only
    /// known at runtime.
    pub fn input_schema(&self) -> Map<String, Value> {
        let properties: Map<String, Value> = self
            .params
            .iter()
            .map(|p| (p.name.clone(), p.to_schema()))
            .collect();
        let required: Vec<Value> = self
            .params
            .iter()
            .filter(|p| p.required)
            .map(|p| Value::String(p.name.clone()))
            .collect();

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            schema.insert("required".to_string(), Value::Array(required));
        }
        schema.insert("additionalProperties".to_string(), json!(false));
        schema
    }

    /// Metadata as listed over the HTTP transport.
    pub fn to_json(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "tags": self.tags,
            "inputSchema": self.input_schema(),
        })
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("handler_id", &self.handler_id)
            .field("tags", &self.tags)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
