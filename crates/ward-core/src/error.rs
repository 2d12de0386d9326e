// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Token decode error types.

use thiserror::Error;

/// Errors produced while decoding a bearer token.
///
/// These errors never escape the session boundary: callers convert them to
/// a logged-out state rather than propagating them into views.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token is not a syntactically valid JWT.
    #[error("Malformed token: {message}")]
    Malformed {
        /// Error message from the underlying decoder.
        message: String,
    },

    /// The token payload decoded but is missing the subject claim.
    #[error("Token payload has no subject")]
    MissingSubject,
}

impl TokenError {
    /// Creates a malformed-token error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        TokenError::malformed(err.to_string())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = TokenError::malformed("bad segment count");
        assert!(err.to_string().contains("bad segment count"));
    }
}
