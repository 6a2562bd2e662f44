//! Tool Router - builds the rmcp ToolRouter from the registry.
//!
//! Every registered descriptor becomes one dynamic route whose handler goes
//! through the shared [`Dispatcher`], so STDIO/TCP and HTTP callers get the
//! same validation and the same failure mapping.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, ToolRouter},
    model::{CallToolResult, Content, Meta, Tool},
};
use serde_json::{Value, json};

use super::{Dispatcher, FailureKind, InvocationOutcome, InvocationRequest, ToolDescriptor};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(dispatcher: Arc<Dispatcher>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    dispatcher
        .registry()
        .descriptors()
        .iter()
        .fold(ToolRouter::new(), |router, descriptor| {
            router.with_route(create_route(dispatcher.clone(), descriptor))
        })
}

/// Create a Tool model for a descriptor (metadata).
pub fn to_tool(descriptor: &ToolDescriptor) -> Tool {
    Tool {
        name: descriptor.name.clone().into(),
        description: Some(descriptor.description.clone().into()),
        input_schema: Arc::new(descriptor.input_schema()),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: tags_meta(descriptor),
        title: None,
    }
}

/// Tags travel in `_meta` since the MCP tool model has no tag field.
fn tags_meta(descriptor: &ToolDescriptor) -> Option<Meta> {
    if descriptor.tags.is_empty() {
        return None;
    }
    let mut meta = serde_json::Map::new();
    meta.insert("tags".to_string(), json!(descriptor.tags));
    Some(Meta(meta))
}

/// Create a ToolRoute for STDIO/TCP transport.
fn create_route<S>(dispatcher: Arc<Dispatcher>, descriptor: &ToolDescriptor) -> ToolRoute<S>
where
    S: Send + Sync + 'static,
{
    let name = descriptor.name.clone();
    ToolRoute::new_dyn(to_tool(descriptor), move |ctx: ToolCallContext<'_, S>| {
        let request = InvocationRequest::new(name.clone(), ctx.arguments.clone().unwrap_or_default());
        let dispatcher = dispatcher.clone();
        async move {
            // Handlers may block on network I/O.
            let outcome = tokio::task::spawn_blocking(move || dispatcher.dispatch(request))
                .await
                .map_err(|e| McpError::internal_error(format!("Tool task failed: {}", e), None))?;
            into_call_result(outcome)
        }
        .boxed()
    })
}

/// Map an outcome onto the MCP result shape.
///
/// Caller mistakes (unknown tool, bad arguments) become protocol errors;
/// execution failures become a tool result flagged `isError`.
pub fn into_call_result(outcome: InvocationOutcome) -> Result<CallToolResult, McpError> {
    match outcome {
        InvocationOutcome::Success { value } => {
            Ok(CallToolResult::success(vec![Content::text(render(&value))]))
        }
        InvocationOutcome::Failure { error } => match error.kind {
            FailureKind::UnknownTool | FailureKind::InvalidArguments => Err(McpError::invalid_params(
                error.message,
                Some(json!({ "kind": error.kind })),
            )),
            FailureKind::DomainError | FailureKind::FeedUnavailable => {
                Ok(CallToolResult::error(vec![Content::text(error.message)]))
            }
        },
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
