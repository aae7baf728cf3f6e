//! Adapter error taxonomy

use particle_mcp_protocol::error_codes;
use particle_mcp_protocol::ProtocolError;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors produced by the tool adapter
///
/// Configuration problems are fatal at startup. Argument problems are
/// surfaced to the caller before any network call. Remote and transport
/// failures are surfaced after exactly one attempt; nothing is retried.
#[derive(Error, Debug)]
pub enum AdapterError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Particle API returned {status}: {message}")]
    RemoteApi { status: u16, message: String },
    #[error("transport error: {0}")]
    Transport(String),
}

impl AdapterError {
    /// The `{code, message}` envelope reported to the MCP caller
    ///
    /// Remote failures carry the HTTP status as the code; everything else
    /// uses the JSON-RPC style application codes.
    pub fn envelope(&self) -> Value {
        match self {
            AdapterError::RemoteApi { status, message } => json!({
                "code": status,
                "message": message,
            }),
            AdapterError::Transport(message) => json!({
                "code": error_codes::TRANSPORT_ERROR,
                "message": message,
            }),
            AdapterError::InvalidArgument(message) => json!({
                "code": error_codes::INVALID_PARAMS,
                "message": message,
            }),
            AdapterError::Configuration(message) => json!({
                "code": error_codes::INTERNAL_ERROR,
                "message": message,
            }),
        }
    }
}

impl From<ProtocolError> for AdapterError {
    fn from(err: ProtocolError) -> Self {
        AdapterError::InvalidArgument(err.to_string())
    }
}

impl From<reqwest::Error> for AdapterError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdapterError::Transport(format!("request timed out: {}", err))
        } else if err.is_connect() {
            AdapterError::Transport(format!("connection failed: {}", err))
        } else {
            AdapterError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_api_envelope_carries_http_status() {
        let err = AdapterError::RemoteApi {
            status: 401,
            message: "The access token provided is invalid.".to_string(),
        };
        let envelope = err.envelope();

        assert_eq!(envelope["code"], 401);
        assert_eq!(
            envelope["message"],
            "The access token provided is invalid."
        );
    }

    #[test]
    fn test_transport_envelope_uses_application_code() {
        let err = AdapterError::Transport("connection refused".to_string());
        let envelope = err.envelope();

        assert_eq!(envelope["code"], error_codes::TRANSPORT_ERROR);
    }

    #[test]
    fn test_protocol_error_maps_to_invalid_argument() {
        let err: AdapterError =
            ProtocolError::InvalidParameters("device_id is required".to_string()).into();
        assert!(matches!(err, AdapterError::InvalidArgument(_)));
    }
}
