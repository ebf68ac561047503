//! Shared fixtures for the mock-provider integration tests.

#![allow(dead_code)]

use std::time::Duration;

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use snaprotate_core::{AccessToken, ApiClient, Credentials};

pub const TOKEN_PATH: &str = "/auth/realms/contabo/protocol/openid-connect/token";
pub const TEST_TOKEN: &str = "test-access-token";

/// Client pointed at the mock server for both auth and compute endpoints.
pub fn client_for(server: &MockServer) -> ApiClient {
    client_with_timeout(server, Duration::from_secs(5))
}

pub fn client_with_timeout(server: &MockServer, timeout: Duration) -> ApiClient {
    ApiClient::with_endpoints(format!("{}{}", server.uri(), TOKEN_PATH), server.uri(), timeout)
        .expect("client should build")
}

pub fn credentials() -> Credentials {
    Credentials::new("client-1", "client-secret", "ops-user", "ops-password")
}

pub fn token() -> AccessToken {
    AccessToken::new(TEST_TOKEN, Some(300))
}

pub fn rotation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date")
}

pub fn snapshots_path(instance_id: &str) -> String {
    format!("/v1/compute/instances/{}/snapshots", instance_id)
}

pub fn snapshot_path(instance_id: &str, snapshot_id: &str) -> String {
    format!("{}/{}", snapshots_path(instance_id), snapshot_id)
}

/// Provider-shaped `{ "data": [...] }` listing of snapshot ids.
pub fn snapshot_list(instance_id: &str, ids: &[&str]) -> serde_json::Value {
    let data: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            json!({
                "tenantId": "DE",
                "customerId": "54321",
                "snapshotId": id,
                "name": format!("old-{}", id),
                "description": "Snapshot created from script at Feb-29-2024",
                "instanceId": instance_id,
                "createdDate": "2024-02-29T03:00:00.000Z"
            })
        })
        .collect();
    json!({ "data": data, "_pagination": { "size": 10, "totalElements": ids.len() } })
}

/// Mount a token endpoint that accepts any password grant.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TEST_TOKEN,
            "expires_in": 300,
            "refresh_expires_in": 1800,
            "token_type": "Bearer"
        })))
        .expect(1)
        .mount(server)
        .await;
}

/// Mount the snapshot listing for one instance.
pub async fn mount_snapshot_list(server: &MockServer, instance_id: &str, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path(snapshots_path(instance_id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(snapshot_list(instance_id, ids)))
        .expect(1)
        .mount(server)
        .await;
}

/// `METHOD /path` of every non-GET request the server saw, in arrival order.
pub async fn mutations(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .expect("request recording is enabled")
        .iter()
        .filter(|r| r.method.to_string() != "GET")
        .filter(|r| r.url.path() != TOKEN_PATH)
        .map(|r| format!("{} {}", r.method, r.url.path()))
        .collect()
}
