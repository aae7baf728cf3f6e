//! HTTP client for the Particle Cloud REST API
//!
//! Every operation is a single request: one URL, the bearer token, one
//! attempt. A 2xx response yields the decoded JSON body unmodified; a
//! non-2xx response yields the HTTP status plus the remote error message;
//! a network-level failure yields a transport error. Nothing is retried.

use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::config::ParticleConfig;
use crate::error::AdapterError;

/// Client for the Particle Cloud REST API
pub struct ParticleClient {
    http: reqwest::Client,
    api_base: String,
    access_token: String,
}

impl ParticleClient {
    /// Build a client from process configuration
    pub fn new(config: &ParticleConfig) -> Result<Self, AdapterError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| {
                AdapterError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            access_token: config.access_token.clone(),
        })
    }

    /// List all devices in the account
    pub async fn list_devices(&self) -> Result<Value, AdapterError> {
        self.request(Method::GET, "/v1/devices", &[], None).await
    }

    /// List one page of devices belonging to a product
    pub async fn list_product_devices(
        &self,
        product_id: &str,
        page: u64,
        per_page: u64,
    ) -> Result<Value, AdapterError> {
        let path = format!("/v1/products/{}/devices", product_id);
        let query = [
            ("page", page.to_string()),
            ("per_page", per_page.to_string()),
        ];
        self.request(Method::GET, &path, &query, None).await
    }

    /// Rename a device
    pub async fn rename_device(
        &self,
        device_id: &str,
        name: &str,
    ) -> Result<Value, AdapterError> {
        let path = format!("/v1/devices/{}", device_id);
        self.request(Method::PUT, &path, &[], Some(json!({ "name": name })))
            .await
    }

    /// Attach notes to a device
    pub async fn add_device_notes(
        &self,
        device_id: &str,
        notes: &str,
    ) -> Result<Value, AdapterError> {
        let path = format!("/v1/devices/{}", device_id);
        self.request(Method::PUT, &path, &[], Some(json!({ "notes": notes })))
            .await
    }

    /// Ping a device to check whether it is online
    pub async fn ping_device(&self, device_id: &str) -> Result<Value, AdapterError> {
        let path = format!("/v1/devices/{}/ping", device_id);
        self.request(Method::PUT, &path, &[], None).await
    }

    /// Fetch the last known vitals reported by a device
    pub async fn last_known_vitals(&self, device_id: &str) -> Result<Value, AdapterError> {
        let path = format!("/v1/diagnostics/{}/last", device_id);
        self.request(Method::GET, &path, &[], None).await
    }

    /// List the organizations the account belongs to
    pub async fn list_organizations(&self) -> Result<Value, AdapterError> {
        self.request(Method::GET, "/v1/orgs", &[], None).await
    }

    /// List the products owned by an organization
    pub async fn list_organization_products(
        &self,
        org_id: &str,
    ) -> Result<Value, AdapterError> {
        let path = format!("/v1/orgs/{}/products", org_id);
        self.request(Method::GET, &path, &[], None).await
    }

    /// List the firmware versions uploaded to a product
    pub async fn list_product_firmware(
        &self,
        product_id: &str,
    ) -> Result<Value, AdapterError> {
        let path = format!("/v1/products/{}/firmware", product_id);
        self.request(Method::GET, &path, &[], None).await
    }

    /// Call a cloud function on a device
    pub async fn call_function(
        &self,
        device_id: &str,
        function_name: &str,
        argument: &str,
    ) -> Result<Value, AdapterError> {
        let path = format!("/v1/devices/{}/{}", device_id, function_name);
        self.request(Method::POST, &path, &[], Some(json!({ "arg": argument })))
            .await
    }

    /// Issue a single request and decode the JSON response
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Value, AdapterError> {
        let url = format!("{}{}", self.api_base, path);
        debug!("{} {}", method, url);

        let mut builder = self
            .http
            .request(method, &url)
            .bearer_auth(&self.access_token);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        if !status.is_success() {
            warn!("Particle API returned {} for {}", status, path);
            return Err(AdapterError::RemoteApi {
                status: status.as_u16(),
                message: extract_error_message(&body_text),
            });
        }

        serde_json::from_str(&body_text).map_err(|e| {
            AdapterError::Transport(format!("invalid JSON in Particle API response: {}", e))
        })
    }
}

/// Pull a human-readable message out of a Particle error body
///
/// Error bodies are not uniform across endpoints: OAuth failures use
/// `error_description`, most REST failures use `error`, some device routes
/// use `info`. Fall back to the raw body when none match.
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        for key in ["error_description", "error", "info"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
    }
    body.trim().to_string()
}
