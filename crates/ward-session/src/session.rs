// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Session state.
//!
//! The session is the sole owner of the credential store's logical
//! meaning: every mutation goes through [`Session::set_credential`] so
//! the stored token and the derived claims can never diverge. Views and
//! guards only read.

use std::sync::Arc;

use tracing::{debug, info, warn};

use ward_core::claims::Claims;
use ward_core::token::decode_token;
use ward_store::CredentialStore;

use crate::error::SessionResult;

// =============================================================================
// Session
// =============================================================================

/// Single source of truth for the current actor.
///
/// # Lifecycle
///
/// A session starts unresolved. [`Session::initialize`] performs the one
/// initial read of the credential store and sets `resolved` as its
/// terminal step; the flag never reverts. Guards consult `is_resolved`
/// to avoid making routing decisions before the stored credential has
/// been read.
#[derive(Debug)]
pub struct Session {
    store: Arc<dyn CredentialStore>,
    credential: Option<String>,
    claims: Option<Claims>,
    resolved: bool,
}

impl Session {
    /// Creates an unresolved session over the given store.
    ///
    /// No storage is read until [`Session::initialize`] runs.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        Self {
            store,
            credential: None,
            claims: None,
            resolved: false,
        }
    }

    /// Performs the initial credential check.
    ///
    /// Reads the store once. A stored credential that fails to decode is
    /// removed (self-healing against corrupted state) and the session
    /// comes up logged out. Setting `resolved` is the terminal step: it
    /// must happen after the read and decode, otherwise dependents
    /// observing `resolved` early would route on stale data.
    ///
    /// Calling this on an already-resolved session is a no-op.
    pub fn initialize(&mut self) {
        if self.resolved {
            return;
        }

        if let Some(token) = self.store.get() {
            match decode_token(&token) {
                Ok(claims) => {
                    debug!(subject = %claims.subject_id(), "Restored session from stored credential");
                    self.credential = Some(token);
                    self.claims = Some(claims);
                }
                Err(e) => {
                    warn!(error = %e, "Stored credential failed to decode; clearing it");
                    if let Err(e) = self.store.remove() {
                        warn!(error = %e, "Failed to clear corrupted credential");
                    }
                }
            }
        }

        // Terminal step of initialization.
        self.resolved = true;
    }

    /// Convenience constructor: create and resolve in one call.
    pub fn initialized(store: Arc<dyn CredentialStore>) -> Self {
        let mut session = Self::new(store);
        session.initialize();
        session
    }

    /// Test-only constructor: a resolved session holding a credential
    /// whose claims never materialized. The normal mutation paths keep
    /// credential and claims consistent, so rotted state like this can
    /// only be injected directly.
    #[cfg(test)]
    pub(crate) fn resolved_without_claims(
        store: Arc<dyn CredentialStore>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            store,
            credential: Some(token.into()),
            claims: None,
            resolved: true,
        }
    }

    /// Replaces or clears the current credential.
    ///
    /// `None` clears the store and the claims. `Some` writes the store
    /// and decodes; a token that fails to decode is treated the same way
    /// as at startup and removed again, so store and claims stay
    /// consistent on every path.
    pub fn set_credential(&mut self, token: Option<String>) -> SessionResult<()> {
        match token {
            Some(token) => {
                self.store.set(&token)?;
                match decode_token(&token) {
                    Ok(claims) => {
                        info!(subject = %claims.subject_id(), "Credential set");
                        self.credential = Some(token);
                        self.claims = Some(claims);
                    }
                    Err(e) => {
                        warn!(error = %e, "New credential failed to decode; clearing it");
                        // Drop the in-memory state first so a failing
                        // store removal cannot leave the session
                        // claiming a credential it no longer trusts.
                        self.credential = None;
                        self.claims = None;
                        self.store.remove()?;
                    }
                }
            }
            None => {
                self.store.remove()?;
                self.credential = None;
                self.claims = None;
            }
        }
        Ok(())
    }

    /// Clears the session. Idempotent.
    ///
    /// This is the only place credentials are invalidated client-side.
    pub fn logout(&mut self) -> SessionResult<()> {
        if self.credential.is_some() {
            info!("Logging out");
        }
        self.set_credential(None)
    }

    /// Returns `true` once the initial credential check has completed.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// Returns `true` if a credential is present.
    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// Returns the derived claims, if the credential decoded.
    pub fn claims(&self) -> Option<&Claims> {
        self.claims.as_ref()
    }

    /// Returns the raw credential, if present.
    pub fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    /// Returns the underlying store handle.
    ///
    /// Gateway clients use this to read the token fresh at call time;
    /// they must not mutate through it.
    pub fn store(&self) -> Arc<dyn CredentialStore> {
        self.store.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde_json::json;
    use ward_store::MemoryStore;

    fn forge(payload: serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(b"session-test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn test_new_session_is_unresolved() {
        let session = Session::new(Arc::new(MemoryStore::new()));

        assert!(!session.is_resolved());
        assert!(!session.is_authenticated());
        assert!(session.claims().is_none());
    }

    #[test]
    fn test_initialize_empty_store() {
        let mut session = Session::new(Arc::new(MemoryStore::new()));
        session.initialize();

        assert!(session.is_resolved());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_initialize_with_stored_credential() {
        let token = forge(json!({ "sub": "u1", "roles": ["ADMIN"] }));
        let store = Arc::new(MemoryStore::with_token(&token));
        let session = Session::initialized(store);

        assert!(session.is_resolved());
        assert!(session.is_authenticated());
        assert_eq!(session.claims().unwrap().subject_id(), "u1");
    }

    #[test]
    fn test_initialize_self_heals_corrupt_credential() {
        let store = Arc::new(MemoryStore::with_token("not-a-jwt"));
        let session = Session::initialized(store.clone());

        assert!(session.is_resolved());
        assert!(!session.is_authenticated());
        assert!(session.claims().is_none());
        // The corrupted token was removed from the store.
        assert!(store.get().is_none());
    }

    #[test]
    fn test_initialize_is_one_shot() {
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::initialized(store.clone());

        // A credential appearing in the store after resolution is not
        // picked up by a second initialize call.
        store.set("late-token").unwrap();
        session.initialize();

        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_set_credential_roundtrip() {
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::initialized(store.clone());

        let token = forge(json!({ "sub": "u1", "roles": ["USER"] }));
        session.set_credential(Some(token.clone())).unwrap();

        assert!(session.is_authenticated());
        assert_eq!(store.get().as_deref(), Some(token.as_str()));

        let direct = ward_core::decode_token(&token).unwrap();
        assert_eq!(session.claims(), Some(&direct));
    }

    #[test]
    fn test_set_credential_none_clears() {
        let token = forge(json!({ "sub": "u1" }));
        let store = Arc::new(MemoryStore::with_token(&token));
        let mut session = Session::initialized(store.clone());

        session.set_credential(None).unwrap();

        assert!(!session.is_authenticated());
        assert!(session.claims().is_none());
        assert!(store.get().is_none());
    }

    #[test]
    fn test_live_decode_failure_self_heals() {
        let store = Arc::new(MemoryStore::new());
        let mut session = Session::initialized(store.clone());

        session.set_credential(Some("garbage".to_string())).unwrap();

        // Store and claims agree: both empty.
        assert!(!session.is_authenticated());
        assert!(session.claims().is_none());
        assert!(store.get().is_none());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let token = forge(json!({ "sub": "u1" }));
        let mut session = Session::initialized(Arc::new(MemoryStore::with_token(&token)));

        session.logout().unwrap();
        let after_once = (session.is_authenticated(), session.claims().cloned());

        session.logout().unwrap();
        let after_twice = (session.is_authenticated(), session.claims().cloned());

        assert_eq!(after_once, after_twice);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_resolved_survives_logout() {
        let mut session = Session::initialized(Arc::new(MemoryStore::new()));
        session.logout().unwrap();

        assert!(session.is_resolved());
    }

    /// A store that accepts writes but refuses removals.
    #[derive(Debug, Default)]
    struct StuckStore {
        slot: std::sync::Mutex<Option<String>>,
    }

    impl CredentialStore for StuckStore {
        fn get(&self) -> Option<String> {
            self.slot.lock().unwrap().clone()
        }

        fn set(&self, token: &str) -> ward_store::StoreResult<()> {
            *self.slot.lock().unwrap() = Some(token.to_string());
            Ok(())
        }

        fn remove(&self) -> ward_store::StoreResult<()> {
            Err(ward_store::StoreError::Remove {
                path: "credential".into(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            })
        }
    }

    #[test]
    fn test_remove_failure_still_clears_session() {
        let token = forge(json!({ "sub": "u1", "roles": ["USER"] }));
        let store = Arc::new(StuckStore::default());
        store.set(&token).unwrap();
        let mut session = Session::initialized(store);

        // The bad token is written, fails to decode, and the cleanup
        // removal fails. The error propagates, but the session must not
        // keep claiming the previous credential.
        let result = session.set_credential(Some("garbage".to_string()));

        assert!(result.is_err());
        assert!(!session.is_authenticated());
        assert!(session.claims().is_none());
    }
}
