//! API client for the Contabo compute REST API.
//!
//! This module provides the `ApiClient` struct: one method per endpoint the
//! rotation needs, each authorised by an explicitly passed `AccessToken`.

use std::time::Duration;

use reqwest::{header, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::auth::{AccessToken, Credentials};
use crate::models::{Instance, ListResponse, NewSnapshot, Snapshot, TokenResponse};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// OpenID Connect token endpoint for the password grant
pub const AUTH_URL: &str =
    "https://auth.contabo.com/auth/realms/contabo/protocol/openid-connect/token";

/// Base URL for the compute API
pub const API_BASE_URL: &str = "https://api.contabo.com";

/// HTTP request timeout in seconds.
/// Snapshot creation is accepted asynchronously by the provider, so no call
/// should legitimately take longer than this.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Header the provider requires on every compute API call
const REQUEST_ID_HEADER: &str = "x-request-id";

/// API client for the provider.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    auth_url: String,
    api_base_url: String,
}

impl ApiClient {
    /// Create a client against the public provider endpoints
    pub fn new() -> Result<Self, ApiError> {
        Self::with_endpoints(
            AUTH_URL,
            API_BASE_URL,
            Duration::from_secs(REQUEST_TIMEOUT_SECS),
        )
    }

    /// Create a client against explicit endpoints with a request timeout
    pub fn with_endpoints(
        auth_url: impl Into<String>,
        api_base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        let api_base_url: String = api_base_url.into();

        Ok(Self {
            client,
            auth_url: auth_url.into(),
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Exchange credentials for a bearer token (password grant)
    pub async fn request_token(&self, credentials: &Credentials) -> Result<AccessToken, ApiError> {
        let response = self
            .client
            .post(&self.auth_url)
            .header(header::ACCEPT, "application/json")
            .form(&[
                ("client_id", credentials.client_id()),
                ("client_secret", credentials.client_secret()),
                ("grant_type", "password"),
                ("username", credentials.api_user()),
                ("password", credentials.api_password()),
            ])
            .send()
            .await?;

        let response = Self::check_response(response, StatusCode::OK).await?;
        let token: TokenResponse = response.json().await?;

        debug!(
            expires_in = ?token.expires_in,
            token_type = token.token_type.as_deref().unwrap_or("unknown"),
            "Token response received"
        );

        token
            .access_token
            .filter(|t| !t.is_empty())
            .map(|t| AccessToken::new(t, token.expires_in))
            .ok_or_else(|| {
                ApiError::InvalidResponse("token response carried no access_token".to_string())
            })
    }

    /// Attach the bearer token and a fresh request id.
    fn authorized(builder: RequestBuilder, token: &AccessToken) -> RequestBuilder {
        builder
            .bearer_auth(token.secret())
            .header(REQUEST_ID_HEADER, Uuid::new_v4().to_string())
    }

    /// Check that the response carries exactly the status the endpoint promises.
    async fn check_response(
        response: Response,
        expected: StatusCode,
    ) -> Result<Response, ApiError> {
        let status = response.status();
        if status == expected {
            Ok(response)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, expected, &body))
        }
    }

    async fn get_list<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &AccessToken,
    ) -> Result<Vec<T>, ApiError> {
        let response = Self::authorized(self.client.get(url), token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        let response = Self::check_response(response, StatusCode::OK).await?;
        let text = response.text().await?;
        let parsed: ListResponse<T> = serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("{}: {}", url, e)))?;
        Ok(parsed.data)
    }

    fn instances_url(&self) -> String {
        format!("{}/v1/compute/instances", self.api_base_url)
    }

    fn snapshots_url(&self, instance_id: &str) -> String {
        format!("{}/{}/snapshots", self.instances_url(), instance_id)
    }

    // ===== Compute Endpoints =====

    /// List every compute instance on the account, in provider order
    pub async fn list_instances(&self, token: &AccessToken) -> Result<Vec<Instance>, ApiError> {
        self.get_list(&self.instances_url(), token).await
    }

    /// List the snapshots currently held for one instance
    pub async fn list_snapshots(
        &self,
        token: &AccessToken,
        instance_id: &str,
    ) -> Result<Vec<Snapshot>, ApiError> {
        self.get_list(&self.snapshots_url(instance_id), token).await
    }

    /// Delete one snapshot. The provider answers 204 with an empty body.
    pub async fn delete_snapshot(
        &self,
        token: &AccessToken,
        instance_id: &str,
        snapshot_id: &str,
    ) -> Result<(), ApiError> {
        let url = format!("{}/{}", self.snapshots_url(instance_id), snapshot_id);
        let response = Self::authorized(self.client.delete(&url), token)
            .header(header::ACCEPT, "application/json")
            .send()
            .await?;

        Self::check_response(response, StatusCode::NO_CONTENT).await?;
        Ok(())
    }

    /// Create a snapshot. Returns the created snapshot when the provider echoes it back.
    pub async fn create_snapshot(
        &self,
        token: &AccessToken,
        instance_id: &str,
        snapshot: &NewSnapshot,
    ) -> Result<Option<Snapshot>, ApiError> {
        let response = Self::authorized(self.client.post(self.snapshots_url(instance_id)), token)
            .form(snapshot)
            .send()
            .await?;

        let response = Self::check_response(response, StatusCode::CREATED).await?;
        let text = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ListResponse<Snapshot>>(&text) {
            Ok(parsed) => Ok(parsed.data.into_iter().next()),
            Err(e) => {
                debug!(instance_id, error = %e, "Create response body not parsed");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_strip_trailing_slash() {
        let client = ApiClient::with_endpoints(
            "http://auth.local/token",
            "http://api.local/",
            Duration::from_secs(5),
        )
        .expect("client should build");

        assert_eq!(client.instances_url(), "http://api.local/v1/compute/instances");
        assert_eq!(
            client.snapshots_url("100"),
            "http://api.local/v1/compute/instances/100/snapshots"
        );
    }
}
