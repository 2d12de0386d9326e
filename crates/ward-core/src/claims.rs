// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Normalized identity claims.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// RoleSet
// =============================================================================

/// A set of role names carried by a credential.
///
/// Tokens issued by the people service are inconsistent about claim shape:
/// some carry a singular `role`, some a plural `roles` array. The decoder
/// resolves both into a single `RoleSet` so downstream code never branches
/// on which shape was present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSet {
    roles: HashSet<String>,
}

impl RoleSet {
    /// Creates an empty role set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a role set from a list of role names.
    pub fn from_roles(roles: impl IntoIterator<Item = String>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }

    /// Adds a role to the set.
    pub fn add(&mut self, role: impl Into<String>) {
        self.roles.insert(role.into());
    }

    /// Returns `true` if the set contains the given role.
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Returns `true` if the set contains any of the given roles.
    pub fn contains_any(&self, roles: &[&str]) -> bool {
        roles.iter().any(|r| self.roles.contains(*r))
    }

    /// Returns the number of roles in the set.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// Returns an iterator over the role names.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(|s| s.as_str())
    }
}

impl FromIterator<String> for RoleSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_roles(iter)
    }
}

// =============================================================================
// Claims
// =============================================================================

/// Decoded identity attributes of the current actor.
///
/// This is a read-only view derived from a bearer token. It is produced
/// exactly once per decode; the raw `role`/`roles` claim shapes are a
/// private detail of the decoder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (typically the username).
    pub subject_id: String,

    /// Normalized role set.
    pub roles: RoleSet,

    /// Expiration time, if the token carried one.
    ///
    /// Expiry is not enforced locally; the server rejects stale tokens
    /// with 401 on the next API call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Claims {
    /// Creates claims for a subject with the given roles.
    pub fn new(subject_id: impl Into<String>, roles: impl IntoIterator<Item = String>) -> Self {
        Self {
            subject_id: subject_id.into(),
            roles: RoleSet::from_roles(roles),
            expires_at: None,
        }
    }

    /// Returns the subject identifier.
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    /// Returns the role set.
    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    /// Returns `true` if the claims carry the given role.
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Sets the expiration time.
    pub fn with_expires_at(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_set_contains() {
        let roles = RoleSet::from_roles(vec!["ADMIN".to_string(), "USER".to_string()]);

        assert!(roles.contains("ADMIN"));
        assert!(roles.contains("USER"));
        assert!(!roles.contains("admin"));
        assert_eq!(roles.len(), 2);
    }

    #[test]
    fn test_role_set_contains_any() {
        let roles = RoleSet::from_roles(vec!["USER".to_string()]);

        assert!(roles.contains_any(&["ADMIN", "USER"]));
        assert!(!roles.contains_any(&["ADMIN", "OPERATOR"]));
        assert!(!roles.contains_any(&[]));
    }

    #[test]
    fn test_role_set_empty() {
        let roles = RoleSet::new();
        assert!(roles.is_empty());
        assert!(!roles.contains("ADMIN"));
    }

    #[test]
    fn test_claims_has_role() {
        let claims = Claims::new("u1", vec!["ADMIN".to_string()]);

        assert_eq!(claims.subject_id(), "u1");
        assert!(claims.has_role("ADMIN"));
        assert!(!claims.has_role("USER"));
    }
}
