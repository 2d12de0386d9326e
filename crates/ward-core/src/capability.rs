// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Capability predicates.
//!
//! Pure boolean functions of claims. All predicates are total: a missing
//! claims value is an ordinary logged-out state and answers `false`, never
//! an error. Decisions are recomputed on every check; nothing here caches
//! across claims changes.

use crate::claims::Claims;

/// Returns `true` if the claims carry the given role.
pub fn has_role(claims: Option<&Claims>, role: &str) -> bool {
    claims.is_some_and(|c| c.roles().contains(role))
}

/// Returns `true` if the claims carry any of the given roles.
pub fn has_any_of(claims: Option<&Claims>, roles: &[&str]) -> bool {
    claims.is_some_and(|c| c.roles().contains_any(roles))
}

/// Returns `true` if the subject matches a configured allow-listed
/// identifier.
///
/// This grants a capability to one specific actor outside the role
/// system; because it bypasses role-based access control the comparison
/// is an exact match against explicit configuration, never inferred.
pub fn is_reserved_identity(claims: Option<&Claims>, reserved_id: &str) -> bool {
    claims.is_some_and(|c| c.subject_id() == reserved_id)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn admin_claims() -> Claims {
        Claims::new("u1", vec!["ADMIN".to_string()])
    }

    #[test]
    fn test_has_role() {
        let claims = admin_claims();

        assert!(has_role(Some(&claims), "ADMIN"));
        assert!(!has_role(Some(&claims), "USER"));
    }

    #[test]
    fn test_has_any_of() {
        let claims = admin_claims();

        assert!(has_any_of(Some(&claims), &["USER", "ADMIN"]));
        assert!(!has_any_of(Some(&claims), &["USER", "OPERATOR"]));
    }

    #[test]
    fn test_is_reserved_identity_exact_match() {
        let claims = admin_claims();

        assert!(is_reserved_identity(Some(&claims), "u1"));
        assert!(!is_reserved_identity(Some(&claims), "u10"));
        assert!(!is_reserved_identity(Some(&claims), "U1"));
    }

    #[test]
    fn test_predicates_false_on_null_claims() {
        assert!(!has_role(None, "ADMIN"));
        assert!(!has_any_of(None, &["ADMIN", "USER"]));
        assert!(!is_reserved_identity(None, "u1"));
    }
}
