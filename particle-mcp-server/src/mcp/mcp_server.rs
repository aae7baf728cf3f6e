//! stdio JSON-RPC server loop and method dispatch

use particle_mcp_protocol::protocol::{capabilities, error_codes, methods};
use particle_mcp_protocol::tools::get_all_tools;
use particle_mcp_protocol::{
    JsonRpcResponse, McpError, PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION,
};
use serde_json::{json, Value};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use super::mcp_tools::execute_tool;
use crate::particle::ParticleClient;

/// Serve MCP over stdin/stdout until the host closes the stream
///
/// One request per line in, one response per line out. stdout carries only
/// protocol frames; all logging goes to stderr.
pub async fn run_stdio_server(client: ParticleClient) -> anyhow::Result<()> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();
    let mut stdout = tokio::io::stdout();

    info!("Particle MCP server ready on stdio");

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        if let Some(response) = handle_line(&line, &client).await {
            stdout.write_all(response.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
    }

    info!("Host disconnected (stdin closed)");
    Ok(())
}

/// Handle one line from the host
///
/// Returns `None` when no response should be written (notifications).
pub async fn handle_line(line: &str, client: &ParticleClient) -> Option<String> {
    debug!("MCP server received: {}", line.trim());

    let request: Value = match serde_json::from_str(line.trim()) {
        Ok(request) => request,
        Err(e) => {
            error!("Failed to parse JSON-RPC request: {}", e);
            let response = JsonRpcResponse::failure(
                None,
                McpError::new(error_codes::PARSE_ERROR, format!("Parse error: {}", e)),
            );
            return serialize_response(response);
        }
    };

    // Notifications carry no id and get no response
    if request.get("id").is_none() {
        let method = request
            .get("method")
            .and_then(|m| m.as_str())
            .unwrap_or("unknown");
        match method {
            "notifications/initialized" => {
                info!("Host initialization notification received - connection ready");
            }
            other => {
                warn!("Unknown notification method: {}", other);
            }
        }
        return None;
    }

    let response = handle_json_rpc_request(request, client).await;
    serialize_response(response)
}

fn serialize_response(response: JsonRpcResponse) -> Option<String> {
    match serde_json::to_string(&response) {
        Ok(text) => {
            debug!("MCP server sending: {}", text);
            Some(text)
        }
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            None
        }
    }
}

/// Dispatch a parsed JSON-RPC request to its handler
pub async fn handle_json_rpc_request(request: Value, client: &ParticleClient) -> JsonRpcResponse {
    let id = request.get("id").cloned();

    let method = match request.get("method").and_then(|m| m.as_str()) {
        Some(m) => m,
        None => {
            return JsonRpcResponse::failure(
                id,
                McpError::new(error_codes::INVALID_REQUEST, "Missing method field"),
            );
        }
    };

    let params = request.get("params").cloned().unwrap_or(json!({}));

    match method {
        methods::INITIALIZE => JsonRpcResponse::success(id, handle_initialize_request()),
        methods::TOOLS_LIST => JsonRpcResponse::success(id, handle_tools_list_request()),
        methods::TOOLS_CALL => handle_tool_call_request(id, params, client).await,
        methods::PING => {
            // Answered locally, the network is never touched
            let result = json!({
                "content": [{
                    "type": "text",
                    "text": "pong"
                }],
                "isError": false
            });
            JsonRpcResponse::success(id, result)
        }
        other => JsonRpcResponse::failure(
            id,
            McpError::new(
                error_codes::METHOD_NOT_FOUND,
                format!("Method '{}' not found", other),
            ),
        ),
    }
}

/// Handle MCP initialize request
fn handle_initialize_request() -> Value {
    info!("Handling MCP initialize request");

    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": capabilities::server_capabilities(),
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION
        }
    })
}

/// Handle tools/list request
fn handle_tools_list_request() -> Value {
    debug!("Handling tools list request");

    json!({
        "tools": get_all_tools()
    })
}

/// Handle tools/call request
async fn handle_tool_call_request(
    id: Option<Value>,
    params: Value,
    client: &ParticleClient,
) -> JsonRpcResponse {
    let tool_name = match params.get("name").and_then(|n| n.as_str()) {
        Some(name) => name,
        None => {
            return JsonRpcResponse::failure(
                id,
                McpError::new(error_codes::INVALID_PARAMS, "Tool name is required"),
            );
        }
    };

    let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

    info!("Handling MCP tool '{}'", tool_name);

    match execute_tool(tool_name, arguments, client).await {
        Ok(result) => match serde_json::to_value(&result) {
            Ok(value) => JsonRpcResponse::success(id, value),
            Err(e) => JsonRpcResponse::failure(
                id,
                McpError::new(
                    error_codes::INTERNAL_ERROR,
                    format!("Failed to serialize tool result: {}", e),
                ),
            ),
        },
        Err(error) => JsonRpcResponse::failure(id, error),
    }
}
