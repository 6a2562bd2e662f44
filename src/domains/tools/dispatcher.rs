//! Dispatcher - resolves an invocation request to an outcome.
//!
//! This is the only place handler failures are translated into
//! [`InvocationOutcome::Failure`]; transports never see a raw [`ToolError`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{info, instrument, warn};

use super::{ToolError, ToolRegistry};

/// A single tool call as delivered by a transport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationRequest {
    /// The name of the tool to execute.
    pub tool_name: String,

    /// The arguments to pass to the tool.
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

impl InvocationRequest {
    pub fn new(tool_name: impl Into<String>, arguments: Map<String, Value>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments,
        }
    }

    /// Build a request from an arbitrary JSON value.
    ///
    /// `null` is treated as an empty argument object; any other non-object
    /// value yields `None`.
    pub fn from_value(tool_name: impl Into<String>, arguments: Value) -> Option<Self> {
        match arguments {
            Value::Object(map) => Some(Self::new(tool_name, map)),
            Value::Null => Some(Self::new(tool_name, Map::new())),
            _ => None,
        }
    }
}

/// Machine-readable failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    UnknownTool,
    InvalidArguments,
    DomainError,
    FeedUnavailable,
}

/// Failure details carried by an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationError {
    pub kind: FailureKind,
    pub message: String,
}

/// Result of one dispatch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum InvocationOutcome {
    Success { value: Value },
    Failure { error: InvocationError },
}

impl InvocationOutcome {
    pub fn success(value: Value) -> Self {
        Self::Success { value }
    }

    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure {
            error: InvocationError {
                kind,
                message: message.into(),
            },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The failure kind, if this is a failure.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error } => Some(error.kind),
        }
    }
}

impl From<ToolError> for InvocationOutcome {
    fn from(err: ToolError) -> Self {
        let kind = match &err {
            ToolError::InvalidArguments(_) => FailureKind::InvalidArguments,
            ToolError::Domain(_) => FailureKind::DomainError,
            ToolError::FeedUnavailable(_) => FailureKind::FeedUnavailable,
        };
        Self::failure(kind, err.to_string())
    }
}

/// Stateless dispatcher over a read-only registry.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: Arc<ToolRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Resolve, validate and execute one invocation.
    ///
    /// Blocks for as long as the handler does.
    #[instrument(skip_all, fields(tool = %request.tool_name))]
    pub fn dispatch(&self, request: InvocationRequest) -> InvocationOutcome {
        let descriptor = match self.registry.lookup(&request.tool_name) {
            Ok(d) => d,
            Err(e) => {
                warn!("{}", e);
                return InvocationOutcome::failure(FailureKind::UnknownTool, request.tool_name);
            }
        };

        let outcome = descriptor
            .validate(&request.arguments)
            .and_then(|args| descriptor.handler().invoke(&args))
            .map_or_else(InvocationOutcome::from, InvocationOutcome::success);

        match &outcome {
            InvocationOutcome::Success { .. } => info!("Tool call succeeded"),
            InvocationOutcome::Failure { error } => {
                warn!("Tool call failed ({:?}): {}", error.kind, error.message)
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Config;
    use crate::domains::feeds::{FeedEntry, FeedError, FeedSource};
    use serde_json::json;

    struct StaticFeed(Vec<FeedEntry>);

    impl FeedSource for StaticFeed {
        fn fetch(&self, _url: &str) -> Result<Vec<FeedEntry>, FeedError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenFeed;

    impl FeedSource for BrokenFeed {
        fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>, FeedError> {
            Err(FeedError::fetch(url, "connection refused"))
        }
    }

    fn dispatcher_with(source: impl FeedSource + 'static) -> Dispatcher {
        let registry = ToolRegistry::with_feed_source(&Config::default(), Arc::new(source)).unwrap();
        Dispatcher::new(Arc::new(registry))
    }

    fn dispatcher() -> Dispatcher {
        dispatcher_with(StaticFeed(vec![
            FeedEntry::new("Learn Python", "", "https://news/python"),
            FeedEntry::new("Rust for beginners", "systems programming", "https://news/rust"),
        ]))
    }

    fn call(dispatcher: &Dispatcher, name: &str, args: Value) -> InvocationOutcome {
        dispatcher.dispatch(InvocationRequest::from_value(name, args).unwrap())
    }

    #[test]
    fn test_multiply() {
        let outcome = call(&dispatcher(), "multiply", json!({ "a": 3, "b": 4 }));
        assert_eq!(outcome, InvocationOutcome::success(json!(12.0)));
    }

    #[test]
    fn test_add_uses_x_and_y() {
        let d = dispatcher();
        assert_eq!(
            call(&d, "add", json!({ "x": 5, "y": 3 })),
            InvocationOutcome::success(json!(8.0))
        );
        assert_eq!(
            call(&d, "add", json!({ "a": 5, "b": 3 })).failure_kind(),
            Some(FailureKind::InvalidArguments)
        );
    }

    #[test]
    fn test_divide() {
        let d = dispatcher();
        for (a, b) in [(1.0, 4.0), (-9.0, 3.0), (7.5, -2.5)] {
            assert_eq!(
                call(&d, "divide", json!({ "a": a, "b": b })),
                InvocationOutcome::success(json!(a / b))
            );
        }
    }

    #[test]
    fn test_divide_by_zero_is_domain_error() {
        let outcome = call(&dispatcher(), "divide", json!({ "a": 1, "b": 0 }));
        assert_eq!(outcome.failure_kind(), Some(FailureKind::DomainError));
    }

    #[test]
    fn test_overflow_is_domain_error() {
        let d = dispatcher();
        for (name, args) in [
            ("divide", json!({ "a": 1e308, "b": 1e-10 })),
            ("multiply", json!({ "a": 1e308, "b": 10 })),
            ("add", json!({ "x": 1.7e308, "y": 1.7e308 })),
            ("subtract", json!({ "a": -1.7e308, "b": 1.7e308 })),
        ] {
            assert_eq!(
                call(&d, name, args),
                InvocationOutcome::failure(FailureKind::DomainError, "Result is out of range."),
                "{name}"
            );
        }
    }

    #[test]
    fn test_unknown_tool() {
        let outcome = call(&dispatcher(), "modulo", json!({}));
        assert_eq!(
            outcome,
            InvocationOutcome::failure(FailureKind::UnknownTool, "modulo")
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let d = dispatcher();
        assert_eq!(
            call(&d, "subtract", json!({ "a": 1 })).failure_kind(),
            Some(FailureKind::InvalidArguments)
        );
        assert_eq!(
            call(&d, "subtract", json!({ "a": "one", "b": 2 })).failure_kind(),
            Some(FailureKind::InvalidArguments)
        );
    }

    #[test]
    fn test_numeric_strings_are_coerced() {
        let outcome = call(&dispatcher(), "subtract", json!({ "a": "10", "b": 3 }));
        assert_eq!(outcome, InvocationOutcome::success(json!(7.0)));
    }

    #[test]
    fn test_news_search_default_cap() {
        let outcome = call(&dispatcher(), "fcc_news_search", json!({ "query": "" }));
        let InvocationOutcome::Success { value } = outcome else {
            panic!("expected success");
        };
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_news_search_no_results_is_success() {
        let outcome = call(&dispatcher(), "fcc_news_search", json!({ "query": "cobol" }));
        assert_eq!(
            outcome,
            InvocationOutcome::success(json!([{ "message": "No results found" }]))
        );
    }

    #[test]
    fn test_feed_failure() {
        let d = dispatcher_with(BrokenFeed);
        let outcome = call(&d, "fcc_youtube_search", json!({ "query": "rust" }));
        assert_eq!(outcome.failure_kind(), Some(FailureKind::FeedUnavailable));
    }

    #[test]
    fn test_outcome_serialization() {
        let success = serde_json::to_value(InvocationOutcome::success(json!(8.0))).unwrap();
        assert_eq!(success, json!({ "status": "success", "value": 8.0 }));

        let failure = serde_json::to_value(InvocationOutcome::failure(
            FailureKind::DomainError,
            "Cannot divide by zero.",
        ))
        .unwrap();
        assert_eq!(
            failure,
            json!({
                "status": "failure",
                "error": { "kind": "domain_error", "message": "Cannot divide by zero." }
            })
        );
    }

    #[test]
    fn test_non_object_arguments_rejected() {
        assert!(InvocationRequest::from_value("add", json!([1, 2])).is_none());
        assert!(InvocationRequest::from_value("add", Value::Null).is_some());
    }
}
