// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Login and registration against the people service.
//!
//! The login call is the one place a credential is minted; the caller
//! hands the returned token to the session, which owns persisting it.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ClientError, ClientResult};
use crate::gateway::Gateway;

// =============================================================================
// Wire types
// =============================================================================

/// Login request body.
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    /// Account username.
    pub username: String,
    /// Account password, sent in the clear over the transport; the
    /// endpoint is expected to sit behind TLS.
    pub password: String,
}

/// Login response body.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer credential issued for this session.
    pub token: String,
}

/// Registration request body.
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    /// Desired username.
    pub username: String,
    /// Account password.
    pub password: String,
    /// Display name.
    pub name: String,
}

// =============================================================================
// Operations
// =============================================================================

impl Gateway {
    /// Exchanges a username and password for a bearer credential.
    ///
    /// Runs unauthenticated. A 401 from this endpoint means the supplied
    /// credentials were wrong, not that a session expired, so it maps to
    /// [`ClientError::InvalidCredentials`] rather than the expiry variant.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<String> {
        let url = format!("{}/people/login", self.config().services.people_base_url);
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self.post_json_public(&url, &request).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ClientError::InvalidCredentials);
        }

        let response = Self::ensure_success(response).await?;
        let body: LoginResponse = response.json().await?;

        info!(username = %username, "Login succeeded");
        Ok(body.token)
    }

    /// Registers a new account.
    ///
    /// Runs unauthenticated and does not log the new account in; the
    /// caller follows up with [`Gateway::login`].
    pub async fn register(&self, request: &RegisterRequest) -> ClientResult<()> {
        let url = format!("{}/people/register", self.config().services.people_base_url);

        let response = self.post_json_public(&url, request).await?;
        Self::ensure_success(response).await?;

        info!(username = %request.username, "Registration succeeded");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_wire_shape() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "s3cret".to_string(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["username"], "alice");
        assert_eq!(json["password"], "s3cret");
    }

    #[test]
    fn test_login_response_decodes_token() {
        let body: LoginResponse = serde_json::from_str(r#"{ "token": "abc.def.ghi" }"#).unwrap();

        assert_eq!(body.token, "abc.def.ghi");
    }

    #[test]
    fn test_login_response_ignores_extra_fields() {
        let body: LoginResponse =
            serde_json::from_str(r#"{ "token": "t", "issuedAt": 1700000000 }"#).unwrap();

        assert_eq!(body.token, "t");
    }
}
