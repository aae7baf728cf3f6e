//! Process-scoped configuration
//!
//! The access token and API base are read once at startup and injected into
//! the adapter at construction. Nothing here is mutable after startup.

use std::env;
use std::time::Duration;

use particle_mcp_protocol::{DEFAULT_API_BASE, DEFAULT_REQUEST_TIMEOUT};

use crate::error::AdapterError;

/// Configuration for the Particle Cloud connection
#[derive(Debug, Clone)]
pub struct ParticleConfig {
    /// Pre-obtained bearer token presented on every request
    pub access_token: String,
    /// Base URL of the Particle Cloud REST API
    pub api_base: String,
    /// Ceiling on any single HTTP request
    pub request_timeout: Duration,
}

impl ParticleConfig {
    /// Build a configuration, rejecting an empty token
    pub fn new(
        access_token: impl Into<String>,
        api_base: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, AdapterError> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(AdapterError::Configuration(
                "access token must not be empty".to_string(),
            ));
        }

        // A trailing slash would produce double slashes in request paths
        let api_base = api_base.into().trim_end_matches('/').to_string();

        Ok(Self {
            access_token,
            api_base,
            request_timeout,
        })
    }

    /// Load configuration from environment variables
    ///
    /// `PARTICLE_ACCESS_TOKEN` is required; a missing or empty value is a
    /// fatal startup error. `PARTICLE_API_BASE` and
    /// `PARTICLE_REQUEST_TIMEOUT_SECS` fall back to defaults.
    pub fn from_env() -> Result<Self, AdapterError> {
        Self::from_vars(
            env::var("PARTICLE_ACCESS_TOKEN").ok(),
            env::var("PARTICLE_API_BASE").ok(),
            env::var("PARTICLE_REQUEST_TIMEOUT_SECS").ok(),
        )
    }

    /// Build configuration from already-resolved variable values
    fn from_vars(
        access_token: Option<String>,
        api_base: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, AdapterError> {
        let access_token = access_token.ok_or_else(|| {
            AdapterError::Configuration(
                "PARTICLE_ACCESS_TOKEN environment variable is not set. \
                 Add it to the environment or a .env file."
                    .to_string(),
            )
        })?;

        let api_base = api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let timeout_secs = match timeout_secs {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                AdapterError::Configuration(format!(
                    "PARTICLE_REQUEST_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    raw
                ))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT,
        };

        Self::new(access_token, api_base, Duration::from_secs(timeout_secs))
    }
}
