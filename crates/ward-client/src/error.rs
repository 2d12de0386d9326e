// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Client error types.
//!
//! Every backend call funnels its failures into [`ClientError`], which
//! carries enough structure for the caller to decide between retrying,
//! surfacing a message, or tearing the session down.

use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

// =============================================================================
// ClientError
// =============================================================================

/// Error type for backend service calls.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No credential is stored; the call requires authentication.
    #[error("Not logged in")]
    NotLoggedIn,

    /// The login endpoint rejected the supplied username or password.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// The backend rejected the stored credential (401/403). The caller
    /// should log the session out.
    #[error("Session expired: status {status}")]
    SessionExpired {
        /// HTTP status that triggered the expiry.
        status: u16,
    },

    /// The backend returned a non-success status other than 401/403.
    #[error("Upstream error {status}: {message}")]
    Upstream {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated for logging.
        message: String,
    },

    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates an upstream error from a status and body.
    pub fn upstream(status: u16, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Creates a session-expired error.
    pub fn session_expired(status: u16) -> Self {
        Self::SessionExpired { status }
    }

    // =========================================================================
    // Properties
    // =========================================================================

    /// Returns `true` if the stored credential was rejected and the
    /// session should be cleared.
    pub fn is_session_expired(&self) -> bool {
        matches!(self, ClientError::SessionExpired { .. })
    }

    /// Returns a user-friendly error message.
    ///
    /// This message is safe to show to end users and does not expose
    /// internal implementation details.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::NotLoggedIn => "로그인이 필요합니다".to_string(),
            ClientError::InvalidCredentials => {
                "아이디 또는 비밀번호가 올바르지 않습니다".to_string()
            }
            ClientError::SessionExpired { .. } => {
                "세션이 만료되었습니다. 다시 로그인해주세요".to_string()
            }
            ClientError::Upstream { .. } => "서버 오류가 발생했습니다".to_string(),
            ClientError::Transport(_) => "서버에 연결할 수 없습니다".to_string(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
