pub mod mcp_server;
pub mod mcp_tools;


pub use mcp_server::{handle_json_rpc_request, handle_line, run_stdio_server};
pub use mcp_tools::execute_tool;
