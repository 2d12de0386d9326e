// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Unverified bearer token decoding.
//!
//! The console never holds the signing secret, so tokens are decoded
//! without signature or expiry validation. A token the server would
//! reject still produces claims here; the server remains the authority
//! and answers 401 on the next API call.

use chrono::DateTime;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;
use tracing::debug;

use crate::claims::{Claims, RoleSet};
use crate::error::TokenError;

// =============================================================================
// Raw Payload
// =============================================================================

/// The token payload as issued, before role-shape normalization.
#[derive(Debug, Deserialize)]
struct RawClaims {
    /// Subject identifier.
    sub: Option<String>,

    /// Singular role claim (older token shape).
    #[serde(default)]
    role: Option<String>,

    /// Plural roles claim.
    #[serde(default)]
    roles: Option<Vec<String>>,

    /// Expiration time (Unix timestamp).
    #[serde(default)]
    exp: Option<i64>,
}

// =============================================================================
// Decoding
// =============================================================================

/// Decodes a bearer token into normalized [`Claims`].
///
/// The singular `role` and plural `roles` claims are resolved into the
/// union `RoleSet`; a token carrying neither yields an empty set.
///
/// # Errors
///
/// Returns [`TokenError::Malformed`] for anything that is not a
/// syntactically valid JWT, and [`TokenError::MissingSubject`] when the
/// payload has no `sub` claim. Callers treat both identically to an
/// absent credential.
pub fn decode_token(token: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();
    // The alg header is informational here; accept whatever the issuer used.
    validation.algorithms = vec![
        Algorithm::HS256,
        Algorithm::HS384,
        Algorithm::HS512,
        Algorithm::RS256,
        Algorithm::RS384,
        Algorithm::RS512,
        Algorithm::ES256,
        Algorithm::ES384,
        Algorithm::PS256,
        Algorithm::PS384,
        Algorithm::PS512,
        Algorithm::EdDSA,
    ];

    let data =
        decode::<RawClaims>(token, &DecodingKey::from_secret(&[]), &validation).map_err(|e| {
            debug!(error = %e, "Bearer token failed to decode");
            TokenError::from(e)
        })?;
    let raw = data.claims;

    let subject_id = raw.sub.ok_or_else(|| {
        debug!("Bearer token payload has no subject");
        TokenError::MissingSubject
    })?;

    let mut roles = RoleSet::from_roles(raw.roles.unwrap_or_default());
    if let Some(role) = raw.role {
        roles.add(role);
    }

    Ok(Claims {
        subject_id,
        roles,
        expires_at: raw.exp.and_then(|ts| DateTime::from_timestamp(ts, 0)),
    })
}

// =============================================================================
// Tests
// =============================================================================
