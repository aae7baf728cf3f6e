//! Particle MCP Protocol
//!
//! This crate provides shared protocol definitions for the Model Context
//! Protocol (MCP) surface of the Particle Cloud tool server.
//!
//! # Features
//!
//! - **Shared Tool Definitions**: All Particle Cloud tools defined in one place
//! - **Type Safety**: A closed tool enumeration prevents name mismatches
//! - **Validation**: Input validation for tool parameters
//! - **Versioning**: Protocol version management
//!
//! # Example
//!
//! ```rust
//! use particle_mcp_protocol::{tools::get_all_tools, PROTOCOL_VERSION};
//!
//! let tools = get_all_tools();
//! println!("Protocol version: {}", PROTOCOL_VERSION);
//! ```

pub mod protocol;
pub mod tools;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use protocol::*;
pub use tools::{get_all_tools, ParticleTool, ToolCategory};
pub use types::*;

/// Current MCP protocol version
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Particle MCP server information
pub const SERVER_NAME: &str = "particle-cloud";
pub const SERVER_VERSION: &str = "1.0.0";
