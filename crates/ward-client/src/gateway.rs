// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Shared HTTP gateway.
//!
//! The gateway owns the connection pool, the endpoint configuration, and
//! the credential store. Every authenticated call reads the credential
//! fresh from the store at send time rather than caching it, so a logout
//! or credential rotation in another part of the process takes effect on
//! the very next request.

use std::sync::Arc;

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use ward_core::config::ClientConfig;
use ward_store::CredentialStore;

use crate::error::{ClientError, ClientResult};

/// Correlation header attached to every outgoing request.
const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Maximum error body length carried into [`ClientError::Upstream`].
const MAX_ERROR_BODY: usize = 512;

// =============================================================================
// Gateway
// =============================================================================

/// HTTP gateway to the backend services.
#[derive(Debug, Clone)]
pub struct Gateway {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
    store: Arc<dyn CredentialStore>,
}

impl Gateway {
    /// Creates a gateway from configuration and a credential store.
    pub fn new(config: Arc<ClientConfig>, store: Arc<dyn CredentialStore>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            http,
            config,
            store,
        })
    }

    /// Returns the endpoint configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // =========================================================================
    // Credential handling
    // =========================================================================

    /// Reads the credential from the store and formats the bearer value.
    ///
    /// Reads fresh on every call; the gateway never caches the token.
    pub(crate) fn bearer(&self) -> ClientResult<String> {
        match self.store.get() {
            Some(token) => Ok(format!("Bearer {}", token)),
            None => Err(ClientError::NotLoggedIn),
        }
    }

    // =========================================================================
    // Request helpers
    // =========================================================================

    /// Attaches the correlation id header to a request.
    fn with_request_id(builder: RequestBuilder) -> RequestBuilder {
        builder.header(REQUEST_ID_HEADER, Uuid::now_v7().to_string())
    }

    /// Sends an authenticated GET and decodes the JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ClientResult<T> {
        let bearer = self.bearer()?;
        let response = Self::with_request_id(self.http.get(url))
            .header(AUTHORIZATION, bearer)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Sends an authenticated GET, treating empty bodies as an empty list.
    ///
    /// Some reporting endpoints answer `204 No Content` or an empty body
    /// when no rows match the query.
    pub(crate) async fn get_json_or_empty<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> ClientResult<Vec<T>> {
        let bearer = self.bearer()?;
        let response = Self::with_request_id(self.http.get(url))
            .header(AUTHORIZATION, bearer)
            .send()
            .await?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(Vec::new());
        }

        let response = Self::ensure_success(response).await?;
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "Failed to decode list response");
            ClientError::upstream(200, format!("Malformed response body: {}", e))
        })
    }

    /// Sends an authenticated POST with a JSON body and decodes the reply.
    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bearer = self.bearer()?;
        let response = Self::with_request_id(self.http.post(url))
            .header(AUTHORIZATION, bearer)
            .json(body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Sends an authenticated POST with a JSON body, discarding the reply.
    pub(crate) async fn post_json_unit<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<()> {
        let bearer = self.bearer()?;
        let response = Self::with_request_id(self.http.post(url))
            .header(AUTHORIZATION, bearer)
            .json(body)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Sends an authenticated PUT with a JSON body and decodes the reply.
    pub(crate) async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bearer = self.bearer()?;
        let response = Self::with_request_id(self.http.put(url))
            .header(AUTHORIZATION, bearer)
            .json(body)
            .send()
            .await?;

        let response = Self::ensure_success(response).await?;
        Ok(response.json().await?)
    }

    /// Sends an authenticated DELETE, discarding the reply.
    pub(crate) async fn delete(&self, url: &str) -> ClientResult<()> {
        let bearer = self.bearer()?;
        let response = Self::with_request_id(self.http.delete(url))
            .header(AUTHORIZATION, bearer)
            .send()
            .await?;

        Self::ensure_success(response).await?;
        Ok(())
    }

    /// Sends an unauthenticated POST with a JSON body.
    ///
    /// Used by the login and register endpoints, which by definition run
    /// before any credential exists.
    pub(crate) async fn post_json_public<B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> ClientResult<Response> {
        let response = Self::with_request_id(self.http.post(url))
            .json(body)
            .send()
            .await?;
        Ok(response)
    }

    // =========================================================================
    // Status mapping
    // =========================================================================

    /// Maps non-success responses to [`ClientError`].
    pub(crate) async fn ensure_success(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let err = Self::map_error_status(status, body);

        if err.is_session_expired() {
            warn!(status = status.as_u16(), "Credential rejected by backend");
        } else {
            debug!(status = status.as_u16(), "Backend call failed");
        }

        Err(err)
    }

    /// Maps an error status and body to the corresponding error variant.
    ///
    /// 401 and 403 both mean the stored credential is no longer accepted;
    /// the distinction does not matter to the caller, who reacts to either
    /// by logging out.
    pub(crate) fn map_error_status(status: StatusCode, body: String) -> ClientError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ClientError::session_expired(status.as_u16())
            }
            _ => {
                let mut message = body;
                message.truncate(MAX_ERROR_BODY);
                ClientError::upstream(status.as_u16(), message)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ward_store::MemoryStore;

    fn gateway(store: MemoryStore) -> Gateway {
        Gateway::new(Arc::new(ClientConfig::default()), Arc::new(store)).unwrap()
    }

    #[test]
    fn test_bearer_requires_stored_credential() {
        let gw = gateway(MemoryStore::new());

        assert!(matches!(gw.bearer(), Err(ClientError::NotLoggedIn)));
    }

    #[test]
    fn test_bearer_formats_stored_token() {
        let gw = gateway(MemoryStore::with_token("abc.def.ghi"));

        assert_eq!(gw.bearer().unwrap(), "Bearer abc.def.ghi");
    }

    #[test]
    fn test_bearer_reads_fresh_per_call() {
        let store = Arc::new(MemoryStore::with_token("first"));
        let gw = Gateway::new(Arc::new(ClientConfig::default()), store.clone()).unwrap();

        assert_eq!(gw.bearer().unwrap(), "Bearer first");

        store.set("second").unwrap();
        assert_eq!(gw.bearer().unwrap(), "Bearer second");

        store.remove().unwrap();
        assert!(matches!(gw.bearer(), Err(ClientError::NotLoggedIn)));
    }

    #[test]
    fn test_map_error_status_session_expiry() {
        let err = Gateway::map_error_status(StatusCode::UNAUTHORIZED, String::new());
        assert!(matches!(err, ClientError::SessionExpired { status: 401 }));

        let err = Gateway::map_error_status(StatusCode::FORBIDDEN, String::new());
        assert!(matches!(err, ClientError::SessionExpired { status: 403 }));
    }

    #[test]
    fn test_map_error_status_upstream() {
        let err = Gateway::map_error_status(StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string());

        match err {
            ClientError::Upstream { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_map_error_status_truncates_body() {
        let long = "x".repeat(10_000);
        let err = Gateway::map_error_status(StatusCode::BAD_GATEWAY, long);

        match err {
            ClientError::Upstream { message, .. } => assert_eq!(message.len(), MAX_ERROR_BODY),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
