//! Core MCP types and data structures

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// JSON-RPC 2.0 Request
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<Value>,
    pub method: String,
    pub params: Option<Value>,
}

/// JSON-RPC 2.0 Response
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
}

impl JsonRpcResponse {
    /// Build a success response for the given request id
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Build an error response for the given request id
    pub fn failure(id: Option<Value>, error: McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(error),
        }
    }
}

/// MCP error information (JSON-RPC style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpError {
    /// Error code (JSON-RPC style)
    pub code: i32,
    /// Error message
    pub message: String,
    /// Additional error data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            data: None,
        }
    }
}

/// MCP tool definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpTool {
    /// Tool name (unique identifier)
    pub name: String,
    /// Human-readable description
    pub description: String,
    /// JSON schema for input validation
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

/// MCP tool execution result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct McpToolResult {
    /// Result content
    pub content: Vec<McpContent>,
    /// Whether this is an error result
    #[serde(rename = "isError")]
    pub is_error: Option<bool>,
}

impl McpToolResult {
    /// Successful result carrying a single text block
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![McpContent::Text { text: text.into() }],
            is_error: Some(false),
        }
    }

    /// Failed result carrying a single text block
    pub fn error_text(text: impl Into<String>) -> Self {
        Self {
            content: vec![McpContent::Text { text: text.into() }],
            is_error: Some(true),
        }
    }
}

/// Content types for MCP responses
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum McpContent {
    /// Plain text content
    #[serde(rename = "text")]
    Text { text: String },
}

/// Common error types
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Invalid tool name: {0}")]
    InvalidToolName(String),
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
    #[error("Tool not found: {0}")]
    ToolNotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_response_success_shape() {
        let response = JsonRpcResponse::success(Some(json!(7)), json!({"ok": true}));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["id"], 7);
        assert_eq!(value["result"]["ok"], true);
        // error must be omitted entirely, not serialized as null
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_response_failure_shape() {
        let response = JsonRpcResponse::failure(
            Some(json!("abc")),
            McpError::new(-32601, "Method not found"),
        );
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["error"]["code"], -32601);
        assert_eq!(value["error"]["message"], "Method not found");
        assert!(value.get("result").is_none());
    }

    #[test]
    fn test_tool_result_serialization() {
        let result = McpToolResult::text("pong");
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["isError"], false);
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][0]["text"], "pong");
    }
}
