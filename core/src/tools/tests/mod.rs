pub mod types_tests;

// Test utilities
use crate::protocol::FunctionCall;
use crate::tools::{HandlerRegistry, ToolError, ToolResult};
use serde_json::Value;

/// Test helper to build a function call with JSON arguments
pub fn call_with(name: &str, args: Value) -> FunctionCall {
    FunctionCall::new(name, args.to_string())
}

/// Test helper to run a call through the built-in handlers
pub fn handle(name: &str, arguments: &str) -> Result<ToolResult, ToolError> {
    let handlers = HandlerRegistry::new();
    let handler = handlers
        .get(name)
        .unwrap_or_else(|| panic!("No handler for {}", name));
    handler.handle(&FunctionCall::new(name, arguments))
}

/// Test helper to pull the reason out of a malformed-arguments error
pub fn malformed_reason(result: Result<ToolResult, ToolError>) -> String {
    match result {
        Err(ToolError::MalformedArgs { reason, .. }) => reason,
        Ok(result) => panic!("Expected MalformedArgs, got {:?}", result),
    }
}
