// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Fixtures
//!
//! Forged bearer credentials for known actors. The session decodes
//! tokens without verifying signatures, so the signing key here is
//! arbitrary; what matters is the payload shape.

use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

/// Signing key for forged tokens. Never verified.
const SIGNING_KEY: &[u8] = b"ward-integration-test-key";

/// Forges a token with an arbitrary payload.
pub fn forge_token(payload: &Value) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        payload,
        &EncodingKey::from_secret(SIGNING_KEY),
    )
    .expect("Failed to forge token")
}

// =============================================================================
// Token Fixtures
// =============================================================================

/// Fixture providing credentials for standard actors.
pub struct TokenFixtures;

impl TokenFixtures {
    /// An administrator with the plural roles claim.
    pub fn admin() -> String {
        forge_token(&json!({ "sub": "admin-001", "roles": ["ADMIN"] }))
    }

    /// A regular user with the plural roles claim.
    pub fn user() -> String {
        forge_token(&json!({ "sub": "user-001", "roles": ["USER"] }))
    }

    /// A user carrying only the legacy singular role claim.
    pub fn legacy_user() -> String {
        forge_token(&json!({ "sub": "user-002", "role": "USER" }))
    }

    /// A user carrying both role claim shapes with distinct values.
    pub fn dual_claim_user() -> String {
        forge_token(&json!({ "sub": "user-003", "role": "AUDITOR", "roles": ["USER"] }))
    }

    /// A user with no role claims at all.
    pub fn roleless() -> String {
        forge_token(&json!({ "sub": "user-004" }))
    }

    /// The allow-listed reserved actor.
    pub fn reserved(subject: &str) -> String {
        forge_token(&json!({ "sub": subject, "roles": ["USER"] }))
    }

    /// A token whose expiry timestamp is in the past. Decoding still
    /// succeeds; expiry is the backend's call.
    pub fn expired_admin() -> String {
        let exp = (Utc::now() - Duration::hours(2)).timestamp();
        forge_token(&json!({ "sub": "admin-001", "roles": ["ADMIN"], "exp": exp }))
    }

    /// A token missing the subject claim.
    pub fn missing_subject() -> String {
        forge_token(&json!({ "roles": ["ADMIN"] }))
    }

    /// A string that is not a token at all.
    pub fn garbage() -> String {
        "not-a-credential".to_string()
    }
}
