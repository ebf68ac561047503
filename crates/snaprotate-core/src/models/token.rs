use serde::Deserialize;

/// Password-grant response from the OpenID Connect token endpoint.
///
/// No `Debug` derive: the access token must never reach a log line.
#[derive(Clone, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
}
