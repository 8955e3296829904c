use humanlayer_tool::*;
use serde_json::json;
use std::sync::Arc;

struct EchoTool;

impl ToolDyn for EchoTool {
    fn name(&self) -> &str {
        "echo"
    }
    fn description(&self) -> &str {
        "Echoes input"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({"type": "object"})
    }
    fn call(&self, input: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move { Ok(json!({"echoed": input})) })
    }
}

struct FailingTool;

impl ToolDyn for FailingTool {
    fn name(&self) -> &str {
        "fail"
    }
    fn description(&self) -> &str {
        "Always fails"
    }
    fn input_schema(&self) -> serde_json::Value {
        json!({"type": "object"})
    }
    fn call(&self, _input: serde_json::Value) -> ToolFuture<'_> {
        Box::pin(async move { Err(ToolError::InvalidInput("nope".into())) })
    }
}

fn _assert_send_sync<T: Send + Sync>() {}

#[test]
fn tool_dyn_is_object_safe() {
    _assert_send_sync::<Arc<dyn ToolDyn>>();
    let _: Box<dyn ToolDyn> = Box::new(EchoTool);
}

#[tokio::test]
async fn register_and_execute_tool() {
    let mut registry = ToolRegistry::new();
    assert!(registry.register(EchoTool).is_none());

    let result = registry.execute("echo", json!({"x": 1})).await.unwrap();
    assert_eq!(result, json!({"echoed": {"x": 1}}));
}

#[tokio::test]
async fn execute_unknown_tool_is_not_found() {
    let registry = ToolRegistry::new();
    let err = registry.execute("missing", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::NotFound(name) if name == "missing"));
}

#[tokio::test]
async fn tool_errors_propagate() {
    let mut registry = ToolRegistry::new();
    registry.register(FailingTool);
    let err = registry.execute("fail", json!({})).await.unwrap_err();
    assert!(matches!(err, ToolError::InvalidInput(_)));
}

#[test]
fn same_name_replaces_previous_registration() {
    let mut registry = ToolRegistry::new();
    registry.register(EchoTool);
    let replaced = registry.register(EchoTool);
    assert!(replaced.is_some());
    assert_eq!(registry.len(), 1);
}

#[test]
fn definitions_sorted_by_name() {
    let mut registry = ToolRegistry::new();
    registry.register(FailingTool);
    registry.register(EchoTool);
    let names: Vec<String> = registry.definitions().into_iter().map(|d| d.name).collect();
    assert_eq!(names, vec!["echo", "fail"]);
    assert!(registry.contains("echo"));
    assert!(!registry.is_empty());
}

#[test]
fn definition_carries_description_and_schema() {
    let def = EchoTool.definition();
    assert_eq!(def.description, "Echoes input");
    assert_eq!(def.input_schema, json!({"type": "object"}));
}
