//! Particle Cloud MCP server
//!
//! A thin adapter that exposes a subset of the Particle Cloud REST API as
//! MCP tools. Each tool is a single pass-through HTTP call: no local state,
//! no caching, no retries. The host speaks newline-delimited JSON-RPC 2.0
//! over stdin/stdout; the adapter speaks HTTPS with a bearer token to the
//! Particle Cloud.

pub mod config;
pub mod error;
pub mod mcp;
pub mod particle;

pub use config::ParticleConfig;
pub use error::AdapterError;
pub use particle::ParticleClient;
