//! Tool execution: mapping the registered tools onto Particle API calls

use particle_mcp_protocol::error_codes;
use particle_mcp_protocol::validation::ToolValidator;
use particle_mcp_protocol::{McpError, McpToolResult, ParticleTool};
use particle_mcp_protocol::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use serde_json::Value;
use tracing::debug;

use crate::error::AdapterError;
use crate::particle::ParticleClient;

/// Execute a named tool against the Particle Cloud
///
/// Unknown tool names and invalid arguments are rejected here, before any
/// network call. Remote and transport failures come back as the tool's
/// payload with `isError` set, carrying the `{code, message}` envelope.
pub async fn execute_tool(
    name: &str,
    arguments: Value,
    client: &ParticleClient,
) -> Result<McpToolResult, McpError> {
    let tool = ParticleTool::from_str(name).map_err(|_| {
        McpError::new(
            error_codes::METHOD_NOT_FOUND,
            format!("Tool '{}' not found", name),
        )
    })?;

    ToolValidator::validate_tool_params(name, &arguments)
        .map_err(|e| McpError::new(error_codes::INVALID_PARAMS, e.to_string()))?;

    debug!("Executing tool '{}'", name);

    let outcome = match tool {
        ParticleTool::ListDevices => client.list_devices().await,
        ParticleTool::ListProductDevices => {
            let product_id = str_arg(&arguments, "product_id")?;
            let page = uint_arg(&arguments, "page", DEFAULT_PAGE);
            let per_page = uint_arg(&arguments, "per_page", DEFAULT_PER_PAGE);
            client
                .list_product_devices(product_id, page, per_page)
                .await
        }
        ParticleTool::RenameDevice => {
            let device_id = str_arg(&arguments, "device_id")?;
            let name = str_arg(&arguments, "name")?;
            client.rename_device(device_id, name).await
        }
        ParticleTool::AddDeviceNotes => {
            let device_id = str_arg(&arguments, "device_id")?;
            let notes = str_arg(&arguments, "notes")?;
            client.add_device_notes(device_id, notes).await
        }
        ParticleTool::PingDevice => {
            let device_id = str_arg(&arguments, "device_id")?;
            client.ping_device(device_id).await
        }
        ParticleTool::GetLastKnownVitals => {
            let device_id = str_arg(&arguments, "device_id")?;
            client.last_known_vitals(device_id).await
        }
        ParticleTool::ListOrganizations => client.list_organizations().await,
        ParticleTool::ListOrganizationProducts => {
            let org_id = str_arg(&arguments, "org_id")?;
            client.list_organization_products(org_id).await
        }
        ParticleTool::ListProductFirmware => {
            let product_id = str_arg(&arguments, "product_id")?;
            client.list_product_firmware(product_id).await
        }
        ParticleTool::CallFunction => {
            let device_id = str_arg(&arguments, "device_id")?;
            let function_name = str_arg(&arguments, "function_name")?;
            let argument = arguments
                .get("argument")
                .and_then(|v| v.as_str())
                .unwrap_or("");
            client
                .call_function(device_id, function_name, argument)
                .await
        }
    };

    match outcome {
        Ok(body) => Ok(McpToolResult::text(format_json(&body))),
        Err(err @ (AdapterError::RemoteApi { .. } | AdapterError::Transport(_))) => {
            Ok(McpToolResult::error_text(format_json(&err.envelope())))
        }
        Err(AdapterError::InvalidArgument(message)) => {
            Err(McpError::new(error_codes::INVALID_PARAMS, message))
        }
        Err(AdapterError::Configuration(message)) => {
            Err(McpError::new(error_codes::INTERNAL_ERROR, message))
        }
    }
}

/// Required string argument, already checked by the validator
fn str_arg<'a>(arguments: &'a Value, name: &str) -> Result<&'a str, McpError> {
    arguments
        .get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| {
            McpError::new(
                error_codes::INVALID_PARAMS,
                format!("{} is required", name),
            )
        })
}

/// Optional positive-integer argument with a default
fn uint_arg(arguments: &Value, name: &str, default: u64) -> u64 {
    arguments.get(name).and_then(|v| v.as_u64()).unwrap_or(default)
}

fn format_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
