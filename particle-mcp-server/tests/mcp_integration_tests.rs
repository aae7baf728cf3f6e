//! Integration tests for the MCP dispatch path
//!
//! Drives the same entry point the stdio loop uses, line in / line out,
//! with the Particle Cloud replaced by a local stub.

use serde_json::{json, Value};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use particle_mcp_server::config::ParticleConfig;
use particle_mcp_server::mcp::handle_line;
use particle_mcp_server::particle::ParticleClient;

fn stub_client(api_base: &str) -> ParticleClient {
    let config = ParticleConfig::new("test-token", api_base, Duration::from_secs(1)).unwrap();
    ParticleClient::new(&config).unwrap()
}

async fn roundtrip(line: &str, client: &ParticleClient) -> Value {
    let response = handle_line(line, client)
        .await
        .expect("expected a response line");
    serde_json::from_str(&response).unwrap()
}

#[tokio::test]
async fn test_full_session_flow() {
    let server = MockServer::start().await;
    let orgs = json!([{"id": "org1", "name": "Acme"}]);

    Mock::given(method("GET"))
        .and(path("/v1/orgs"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(orgs.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());

    // initialize
    let init = roundtrip(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test_client","version":"1.0.0"}}}"#,
        &client,
    )
    .await;
    assert_eq!(init["jsonrpc"], "2.0");
    assert_eq!(init["id"], 1);
    assert_eq!(init["result"]["protocolVersion"], "2024-11-05");
    assert_eq!(init["result"]["serverInfo"]["name"], "particle-cloud");

    // initialized notification gets no response
    let notification = handle_line(
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        &client,
    )
    .await;
    assert!(notification.is_none());

    // tools/list
    let list = roundtrip(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#, &client).await;
    let tools = list["result"]["tools"].as_array().unwrap();
    assert!(!tools.is_empty());
    let names: Vec<&str> = tools
        .iter()
        .map(|tool| tool["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"list_organizations"));

    // tools/call
    let call = roundtrip(
        r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"list_organizations","arguments":{}}}"#,
        &client,
    )
    .await;
    assert_eq!(call["id"], 3);
    assert_eq!(call["result"]["isError"], false);

    let text = call["result"]["content"][0]["text"].as_str().unwrap();
    let body: Value = serde_json::from_str(text).unwrap();
    assert_eq!(body, orgs);
}

#[tokio::test]
async fn test_parse_error_response() {
    let server = MockServer::start().await;
    let client = stub_client(&server.uri());

    let response = roundtrip("this is not json", &client).await;

    assert_eq!(response["error"]["code"], -32700);
    assert!(response["id"].is_null());
}

#[tokio::test]
async fn test_unknown_tool_call_is_protocol_error() {
    let server = MockServer::start().await;
    let client = stub_client(&server.uri());

    let response = roundtrip(
        r#"{"jsonrpc":"2.0","id":9,"method":"tools/call","params":{"name":"flash_firmware","arguments":{}}}"#,
        &client,
    )
    .await;

    assert_eq!(response["error"]["code"], -32601);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("flash_firmware"));
}

#[tokio::test]
async fn test_invalid_argument_is_protocol_error_and_skips_network() {
    let server = MockServer::start().await;
    // Any request reaching the stub fails the test
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());

    let response = roundtrip(
        r#"{"jsonrpc":"2.0","id":10,"method":"tools/call","params":{"name":"list_product_firmware","arguments":{}}}"#,
        &client,
    )
    .await;

    assert_eq!(response["error"]["code"], -32602);
    assert!(response["error"]["message"]
        .as_str()
        .unwrap()
        .contains("product_id"));
}

#[tokio::test]
async fn test_remote_failure_is_tool_payload_not_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/orgs/acme-corp/products"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": "Organization not found"
        })))
        .mount(&server)
        .await;

    let client = stub_client(&server.uri());

    let response = roundtrip(
        r#"{"jsonrpc":"2.0","id":11,"method":"tools/call","params":{"name":"list_organization_products","arguments":{"org_id":"acme-corp"}}}"#,
        &client,
    )
    .await;

    // The call itself succeeds at the protocol level
    assert!(response.get("error").is_none());
    assert_eq!(response["result"]["isError"], true);

    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    let envelope: Value = serde_json::from_str(text).unwrap();
    assert_eq!(envelope["code"], 404);
    assert_eq!(envelope["message"], "Organization not found");
}
