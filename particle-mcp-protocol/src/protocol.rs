//! MCP protocol constants and error codes

/// Standard JSON-RPC error codes
pub mod error_codes {
    /// Parse error - Invalid JSON
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid request - JSON is not a valid request
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method not found
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid params
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error
    pub const INTERNAL_ERROR: i32 = -32603;

    /// Application-specific error codes (start from -32000)
    /// Tool execution failed
    pub const TOOL_EXECUTION_ERROR: i32 = -32000;
    /// Tool not available
    pub const TOOL_NOT_AVAILABLE: i32 = -32001;
    /// Remote API returned a non-2xx status
    pub const REMOTE_API_ERROR: i32 = -32010;
    /// Network-level failure reaching the remote API
    pub const TRANSPORT_ERROR: i32 = -32011;
}

/// Standard MCP methods
pub mod methods {
    /// Initialize the MCP connection
    pub const INITIALIZE: &str = "initialize";
    /// List available tools
    pub const TOOLS_LIST: &str = "tools/list";
    /// Call a specific tool
    pub const TOOLS_CALL: &str = "tools/call";
    /// Ping for connectivity testing
    pub const PING: &str = "ping";
}

/// MCP capability definitions
pub mod capabilities {
    use serde_json::{json, Value};

    /// Server capabilities
    pub fn server_capabilities() -> Value {
        json!({
            "tools": {
                "listChanged": false
            }
        })
    }
}

/// Protocol version constraints
pub const MIN_SUPPORTED_VERSION: &str = "2024-11-05";
pub const MAX_SUPPORTED_VERSION: &str = "2024-11-05";

/// Particle Cloud REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.particle.io";

/// Timeout configurations (in seconds)
pub const DEFAULT_REQUEST_TIMEOUT: u64 = 10;

/// Pagination defaults for product device listings
pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PER_PAGE: u64 = 25;
