//! Input validation utilities for MCP tools

use crate::types::ProtocolError;
use serde_json::Value;

/// Validate tool parameters
pub struct ToolValidator;

impl ToolValidator {
    /// Validate parameters for any tool by name
    ///
    /// Validation happens before any network call: a tool whose parameters
    /// fail here must never reach the remote API.
    pub fn validate_tool_params(tool_name: &str, params: &Value) -> Result<(), ProtocolError> {
        match tool_name {
            "list_devices" | "list_organizations" => Ok(()), // No parameters to validate
            "list_product_devices" => Self::validate_list_product_devices_params(params),
            "rename_device" => Self::validate_rename_device_params(params),
            "add_device_notes" => Self::validate_add_device_notes_params(params),
            "ping_device" | "get_last_known_vitals" => {
                Self::get_identifier_param(params, "device_id").map(|_| ())
            }
            "list_organization_products" => {
                Self::get_identifier_param(params, "org_id").map(|_| ())
            }
            "list_product_firmware" => {
                Self::get_identifier_param(params, "product_id").map(|_| ())
            }
            "call_function" => Self::validate_call_function_params(params),
            _ => Ok(()), // Unknown names are rejected by the dispatcher, not here
        }
    }

    /// Validate list_product_devices parameters
    fn validate_list_product_devices_params(params: &Value) -> Result<(), ProtocolError> {
        Self::get_identifier_param(params, "product_id")?;

        // Pagination values are optional, but must be positive integers if present
        Self::validate_optional_page_param(params, "page")?;
        Self::validate_optional_page_param(params, "per_page")?;
        Ok(())
    }

    /// Validate rename_device parameters
    fn validate_rename_device_params(params: &Value) -> Result<(), ProtocolError> {
        Self::get_identifier_param(params, "device_id")?;
        Self::get_string_param(params, "name")?;
        Ok(())
    }

    /// Validate add_device_notes parameters
    fn validate_add_device_notes_params(params: &Value) -> Result<(), ProtocolError> {
        Self::get_identifier_param(params, "device_id")?;
        Self::get_string_param(params, "notes")?;
        Ok(())
    }

    /// Validate call_function parameters
    fn validate_call_function_params(params: &Value) -> Result<(), ProtocolError> {
        Self::get_identifier_param(params, "device_id")?;
        let function_name = Self::get_string_param(params, "function_name")?;
        validate_function_name(function_name)?;

        // Argument is optional, but must be a string if present
        if let Some(argument) = params.get("argument") {
            if !argument.is_string() {
                return Err(ProtocolError::InvalidParameters(
                    "argument must be a string".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Helper to get a required, non-empty string parameter
    fn get_string_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, ProtocolError> {
        let value = params
            .get(name)
            .and_then(|v| v.as_str())
            .ok_or_else(|| ProtocolError::InvalidParameters(format!("{} is required", name)))?;

        if value.is_empty() {
            return Err(ProtocolError::InvalidParameters(format!(
                "{} must not be empty",
                name
            )));
        }
        Ok(value)
    }

    /// Helper to get a required identifier parameter (device, org, product)
    fn get_identifier_param<'a>(params: &'a Value, name: &str) -> Result<&'a str, ProtocolError> {
        let value = Self::get_string_param(params, name)?;
        validate_identifier(name, value)?;
        Ok(value)
    }

    /// Helper to validate an optional positive-integer pagination parameter
    fn validate_optional_page_param(params: &Value, name: &str) -> Result<(), ProtocolError> {
        if let Some(value) = params.get(name) {
            let number = value.as_u64().ok_or_else(|| {
                ProtocolError::InvalidParameters(format!("{} must be a positive integer", name))
            })?;
            if number == 0 {
                return Err(ProtocolError::InvalidParameters(format!(
                    "{} must be a positive integer",
                    name
                )));
            }
        }
        Ok(())
    }
}

/// Validate an identifier used in a request path (device ID, org ID or slug,
/// product ID or slug)
pub fn validate_identifier(name: &str, value: &str) -> Result<(), ProtocolError> {
    if value.is_empty() {
        return Err(ProtocolError::InvalidParameters(format!(
            "{} cannot be empty",
            name
        )));
    }

    if value.len() > 64 {
        return Err(ProtocolError::InvalidParameters(format!(
            "{} cannot be longer than 64 characters",
            name
        )));
    }

    // Identifiers are substituted into URL paths; restrict to characters that
    // cannot alter the path structure
    if !value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ProtocolError::InvalidParameters(format!(
            "{} can only contain alphanumeric characters, underscores, and hyphens",
            name
        )));
    }

    Ok(())
}

/// Validate a device cloud function name
pub fn validate_function_name(function_name: &str) -> Result<(), ProtocolError> {
    if function_name.is_empty() {
        return Err(ProtocolError::InvalidParameters(
            "function_name cannot be empty".to_string(),
        ));
    }

    if function_name.len() > 64 {
        return Err(ProtocolError::InvalidParameters(
            "function_name cannot be longer than 64 characters".to_string(),
        ));
    }

    if !function_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ProtocolError::InvalidParameters(
            "function_name can only contain alphanumeric characters and underscores".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_identifier() {
        // Valid identifiers
        assert!(validate_identifier("device_id", "e00fce68deadbeef12345678").is_ok());
        assert!(validate_identifier("org_id", "acme-corp").is_ok());
        assert!(validate_identifier("product_id", "12345").is_ok());

        // Invalid identifiers
        assert!(validate_identifier("device_id", "").is_err());
        assert!(validate_identifier("device_id", "id with spaces").is_err());
        assert!(validate_identifier("device_id", "id/../../secrets").is_err());
        assert!(validate_identifier("device_id", &"x".repeat(65)).is_err());
    }

    #[test]
    fn test_validate_function_name() {
        assert!(validate_function_name("setLedState").is_ok());
        assert!(validate_function_name("reset_counter").is_ok());

        assert!(validate_function_name("").is_err());
        assert!(validate_function_name("bad/name").is_err());
        assert!(validate_function_name("bad name").is_err());
    }

    #[test]
    fn test_parameterless_tools_accept_empty_params() {
        assert!(ToolValidator::validate_tool_params("list_devices", &json!({})).is_ok());
        assert!(ToolValidator::validate_tool_params("list_organizations", &json!({})).is_ok());
    }

    #[test]
    fn test_missing_identifier_rejected() {
        let result = ToolValidator::validate_tool_params("get_last_known_vitals", &json!({}));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("device_id"));

        let result = ToolValidator::validate_tool_params("list_organization_products", &json!({}));
        assert!(result.unwrap_err().to_string().contains("org_id"));

        let result = ToolValidator::validate_tool_params("list_product_firmware", &json!({}));
        assert!(result.unwrap_err().to_string().contains("product_id"));
    }

    #[test]
    fn test_empty_identifier_rejected() {
        let result = ToolValidator::validate_tool_params(
            "get_last_known_vitals",
            &json!({"device_id": ""}),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rename_device_requires_name() {
        let result = ToolValidator::validate_tool_params(
            "rename_device",
            &json!({"device_id": "e00fce68deadbeef12345678"}),
        );
        assert!(result.unwrap_err().to_string().contains("name"));

        assert!(ToolValidator::validate_tool_params(
            "rename_device",
            &json!({"device_id": "e00fce68deadbeef12345678", "name": "garage-sensor"}),
        )
        .is_ok());
    }

    #[test]
    fn test_pagination_params_validated() {
        // Valid with defaults omitted
        assert!(ToolValidator::validate_tool_params(
            "list_product_devices",
            &json!({"product_id": "12345"}),
        )
        .is_ok());

        // Valid with explicit pagination
        assert!(ToolValidator::validate_tool_params(
            "list_product_devices",
            &json!({"product_id": "12345", "page": 2, "per_page": 50}),
        )
        .is_ok());

        // Zero and non-numeric pages rejected
        assert!(ToolValidator::validate_tool_params(
            "list_product_devices",
            &json!({"product_id": "12345", "page": 0}),
        )
        .is_err());
        assert!(ToolValidator::validate_tool_params(
            "list_product_devices",
            &json!({"product_id": "12345", "per_page": "lots"}),
        )
        .is_err());
    }

    #[test]
    fn test_call_function_argument_optional_but_typed() {
        let params = json!({
            "device_id": "e00fce68deadbeef12345678",
            "function_name": "setLedState"
        });
        assert!(ToolValidator::validate_tool_params("call_function", &params).is_ok());

        let params = json!({
            "device_id": "e00fce68deadbeef12345678",
            "function_name": "setLedState",
            "argument": 42
        });
        assert!(ToolValidator::validate_tool_params("call_function", &params).is_err());
    }
}
