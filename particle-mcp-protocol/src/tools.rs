//! MCP tool definitions organized by category

use crate::types::{McpTool, ProtocolError};
use serde_json::json;

/// Tool categories for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolCategory {
    Devices,
    Diagnostics,
    Organizations,
    Firmware,
}

impl ToolCategory {
    /// Get all tool categories
    pub fn all() -> Vec<ToolCategory> {
        vec![
            ToolCategory::Devices,
            ToolCategory::Diagnostics,
            ToolCategory::Organizations,
            ToolCategory::Firmware,
        ]
    }

    /// Get tools for this category
    pub fn tools(&self) -> Vec<McpTool> {
        match self {
            ToolCategory::Devices => device_tools(),
            ToolCategory::Diagnostics => diagnostics_tools(),
            ToolCategory::Organizations => organization_tools(),
            ToolCategory::Firmware => firmware_tools(),
        }
    }
}

/// The closed set of operations the server exposes
///
/// Adding or removing a tool is a compile-time-checked change: the match
/// arms in `as_str`/`from_str` and the server's dispatch must all be updated
/// together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleTool {
    ListDevices,
    ListProductDevices,
    RenameDevice,
    AddDeviceNotes,
    PingDevice,
    GetLastKnownVitals,
    ListOrganizations,
    ListOrganizationProducts,
    ListProductFirmware,
    CallFunction,
}

impl ParticleTool {
    /// Get all registered tools
    pub fn all() -> Vec<ParticleTool> {
        vec![
            ParticleTool::ListDevices,
            ParticleTool::ListProductDevices,
            ParticleTool::RenameDevice,
            ParticleTool::AddDeviceNotes,
            ParticleTool::PingDevice,
            ParticleTool::GetLastKnownVitals,
            ParticleTool::ListOrganizations,
            ParticleTool::ListOrganizationProducts,
            ParticleTool::ListProductFirmware,
            ParticleTool::CallFunction,
        ]
    }

    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ParticleTool::ListDevices => "list_devices",
            ParticleTool::ListProductDevices => "list_product_devices",
            ParticleTool::RenameDevice => "rename_device",
            ParticleTool::AddDeviceNotes => "add_device_notes",
            ParticleTool::PingDevice => "ping_device",
            ParticleTool::GetLastKnownVitals => "get_last_known_vitals",
            ParticleTool::ListOrganizations => "list_organizations",
            ParticleTool::ListOrganizationProducts => "list_organization_products",
            ParticleTool::ListProductFirmware => "list_product_firmware",
            ParticleTool::CallFunction => "call_function",
        }
    }

    /// Parse from string representation
    pub fn from_str(s: &str) -> Result<ParticleTool, ProtocolError> {
        match s {
            "list_devices" => Ok(ParticleTool::ListDevices),
            "list_product_devices" => Ok(ParticleTool::ListProductDevices),
            "rename_device" => Ok(ParticleTool::RenameDevice),
            "add_device_notes" => Ok(ParticleTool::AddDeviceNotes),
            "ping_device" => Ok(ParticleTool::PingDevice),
            "get_last_known_vitals" => Ok(ParticleTool::GetLastKnownVitals),
            "list_organizations" => Ok(ParticleTool::ListOrganizations),
            "list_organization_products" => Ok(ParticleTool::ListOrganizationProducts),
            "list_product_firmware" => Ok(ParticleTool::ListProductFirmware),
            "call_function" => Ok(ParticleTool::CallFunction),
            _ => Err(ProtocolError::ToolNotFound(s.to_string())),
        }
    }
}

/// Get all available MCP tools
pub fn get_all_tools() -> Vec<McpTool> {
    let mut tools = Vec::new();
    for category in ToolCategory::all() {
        tools.extend(category.tools());
    }
    tools
}

/// Get tool by name
pub fn get_tool_by_name(name: &str) -> Option<McpTool> {
    get_all_tools().into_iter().find(|tool| tool.name == name)
}

/// Device listing and management commands
fn device_tools() -> Vec<McpTool> {
    vec![
        McpTool {
            name: "list_devices".to_string(),
            description: "List all Particle devices in your account".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        McpTool {
            name: "list_product_devices".to_string(),
            description: "List devices in a specific product, one page at a time".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "string",
                        "description": "The ID or slug of the product"
                    },
                    "page": {
                        "type": "number",
                        "description": "Page number for paginated results (default: 1)"
                    },
                    "per_page": {
                        "type": "number",
                        "description": "Number of devices per page (default: 25)"
                    }
                },
                "required": ["product_id"]
            }),
        },
        McpTool {
            name: "rename_device".to_string(),
            description: "Rename a device".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "device_id": {
                        "type": "string",
                        "description": "The ID of the device to rename"
                    },
                    "name": {
                        "type": "string",
                        "description": "The new name for the device"
                    }
                },
                "required": ["device_id", "name"]
            }),
        },
        McpTool {
            name: "add_device_notes".to_string(),
            description: "Attach notes to a device".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "device_id": {
                        "type": "string",
                        "description": "The ID of the device"
                    },
                    "notes": {
                        "type": "string",
                        "description": "The notes to store on the device"
                    }
                },
                "required": ["device_id", "notes"]
            }),
        },
    ]
}

/// Device health and vitals commands
fn diagnostics_tools() -> Vec<McpTool> {
    vec![
        McpTool {
            name: "ping_device".to_string(),
            description: "Ping a device to check whether it is online".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "device_id": {
                        "type": "string",
                        "description": "The ID of the device to ping"
                    }
                },
                "required": ["device_id"]
            }),
        },
        McpTool {
            name: "get_last_known_vitals".to_string(),
            description: "Fetch the last known diagnostic vitals reported by a device".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "device_id": {
                        "type": "string",
                        "description": "The ID of the device"
                    }
                },
                "required": ["device_id"]
            }),
        },
    ]
}

/// Organization commands
fn organization_tools() -> Vec<McpTool> {
    vec![
        McpTool {
            name: "list_organizations".to_string(),
            description: "List all organizations your account belongs to".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
        },
        McpTool {
            name: "list_organization_products".to_string(),
            description: "List the products owned by an organization".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "org_id": {
                        "type": "string",
                        "description": "The ID or slug of the organization"
                    }
                },
                "required": ["org_id"]
            }),
        },
    ]
}

/// Firmware and device function commands
fn firmware_tools() -> Vec<McpTool> {
    vec![
        McpTool {
            name: "list_product_firmware".to_string(),
            description: "List the firmware versions uploaded to a product".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "product_id": {
                        "type": "string",
                        "description": "The ID or slug of the product"
                    }
                },
                "required": ["product_id"]
            }),
        },
        McpTool {
            name: "call_function".to_string(),
            description: "Call a cloud function exposed by a device's firmware".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "device_id": {
                        "type": "string",
                        "description": "The ID of the device"
                    },
                    "function_name": {
                        "type": "string",
                        "description": "The name of the function to call"
                    },
                    "argument": {
                        "type": "string",
                        "description": "Argument to pass to the function (optional)"
                    }
                },
                "required": ["device_id", "function_name"]
            }),
        },
    ]
}
