use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::api::ApiClient;
use crate::rotation::RotateError;

use super::{AccessToken, Credentials};

/// The one authenticated session of a run.
///
/// Holds the only live token; rotation calls borrow it read-only.
#[derive(Debug, Clone)]
pub struct Session {
    token: AccessToken,
    username: String,
    created_at: DateTime<Utc>,
}

impl Session {
    /// Authenticate with the provider and hold the resulting token
    pub async fn authenticate(
        client: &ApiClient,
        credentials: &Credentials,
    ) -> Result<Self, RotateError> {
        match client.request_token(credentials).await {
            Ok(token) => {
                info!(
                    username = credentials.api_user(),
                    expires_in = ?token.expires_in(),
                    "Token received"
                );
                Ok(Self {
                    token,
                    username: credentials.api_user().to_string(),
                    created_at: Utc::now(),
                })
            }
            Err(e) => {
                error!(username = credentials.api_user(), error = %e, "Token request failed");
                Err(RotateError::Auth(e))
            }
        }
    }

    pub fn token(&self) -> &AccessToken {
        &self.token
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
