// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! People service operations.
//!
//! The people listing backs the administrative view; the route guard
//! keeps non-admins out, but the backend enforces the same rule and
//! answers 403 for a non-admin credential.

use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::gateway::Gateway;

// =============================================================================
// Wire types
// =============================================================================

/// A person record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    /// Backend identifier.
    pub id: i64,
    /// Account username.
    pub username: String,
    /// Display name.
    pub name: String,
    /// Roles granted to this account.
    #[serde(default)]
    pub roles: Vec<String>,
}

// =============================================================================
// Operations
// =============================================================================

impl Gateway {
    /// Lists all people.
    pub async fn list_people(&self) -> ClientResult<Vec<Person>> {
        let url = format!("{}/people", self.config().services.people_base_url);
        self.get_json(&url).await
    }

    /// Deletes a person by id.
    pub async fn delete_person(&self, id: i64) -> ClientResult<()> {
        let url = format!("{}/people/{}", self.config().services.people_base_url, id);
        self.delete(&url).await
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_decodes_with_roles() {
        let person: Person = serde_json::from_str(
            r#"{ "id": 7, "username": "alice", "name": "Alice", "roles": ["ADMIN"] }"#,
        )
        .unwrap();

        assert_eq!(person.id, 7);
        assert_eq!(person.roles, vec!["ADMIN"]);
    }

    #[test]
    fn test_person_roles_default_to_empty() {
        let person: Person =
            serde_json::from_str(r#"{ "id": 8, "username": "bob", "name": "Bob" }"#).unwrap();

        assert!(person.roles.is_empty());
    }
}
