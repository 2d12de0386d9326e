// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Route guards.
//!
//! Guards are pure functions of session state evaluated on every
//! navigation attempt. What used to be scattered null checks is an
//! explicit three-way outcome consumed uniformly by the router.

use tracing::debug;

use ward_core::capability::has_role;

use crate::route::Route;
use crate::session::Session;

// =============================================================================
// GuardOutcome
// =============================================================================

/// The decision a guard makes for a protected view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The view may render.
    Render,
    /// Navigate to the given route instead.
    Redirect(Route),
    /// Render nothing yet.
    ///
    /// Produced while the session is unresolved. Redirecting here would
    /// bounce a logged-in user to the login view before the stored
    /// credential has been read.
    Defer,
}

// =============================================================================
// Guard
// =============================================================================

/// A gatekeeper for a protected view.
pub trait Guard {
    /// Evaluates the guard against the current session.
    fn evaluate(&self, session: &Session) -> GuardOutcome;
}

// =============================================================================
// AuthenticatedGuard
// =============================================================================

/// Requires a resolved, authenticated session.
#[derive(Debug, Clone)]
pub struct AuthenticatedGuard {
    login: Route,
}

impl AuthenticatedGuard {
    /// Creates a guard redirecting unauthenticated users to `/login`.
    pub fn new() -> Self {
        Self {
            login: Route::Login,
        }
    }
}

impl Default for AuthenticatedGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Guard for AuthenticatedGuard {
    fn evaluate(&self, session: &Session) -> GuardOutcome {
        if !session.is_resolved() {
            return GuardOutcome::Defer;
        }
        if !session.is_authenticated() {
            debug!("Unauthenticated navigation attempt");
            return GuardOutcome::Redirect(self.login);
        }
        GuardOutcome::Render
    }
}

// =============================================================================
// RoleGuard
// =============================================================================

/// Requires a role on top of an inner guard.
///
/// The inner guard is consulted first; the role check only runs once the
/// inner guard would render. A missing or undecodable credential sends
/// the user to login, while a merely insufficient role set redirects to
/// the fallback route, distinguishing "wrong permissions" from "not
/// logged in".
#[derive(Debug, Clone)]
pub struct RoleGuard<G> {
    inner: G,
    required: String,
    fallback: Route,
}

impl<G: Guard> RoleGuard<G> {
    /// Creates a role guard over an inner guard.
    pub fn new(inner: G, required: impl Into<String>) -> Self {
        Self {
            inner,
            required: required.into(),
            fallback: Route::Devices,
        }
    }

    /// Sets the route for users lacking the required role.
    pub fn with_fallback(mut self, fallback: Route) -> Self {
        self.fallback = fallback;
        self
    }
}

impl<G: Guard> Guard for RoleGuard<G> {
    fn evaluate(&self, session: &Session) -> GuardOutcome {
        match self.inner.evaluate(session) {
            GuardOutcome::Render => {}
            other => return other,
        }

        if session.credential().is_none() {
            return GuardOutcome::Redirect(Route::Login);
        }

        match session.claims() {
            Some(claims) if has_role(Some(claims), &self.required) => GuardOutcome::Render,
            Some(claims) => {
                debug!(
                    subject = %claims.subject_id(),
                    required = %self.required,
                    "Role missing; redirecting to fallback"
                );
                GuardOutcome::Redirect(self.fallback)
            }
            // Credential present but undecodable: treat as not logged in.
            None => GuardOutcome::Redirect(Route::Login),
        }
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
    use std::sync::Arc;
    use ward_store::MemoryStore;

    fn forge(payload: serde_json::Value) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            &payload,
            &EncodingKey::from_secret(b"guard-test-secret"),
        )
        .unwrap()
    }

    fn session_with(payload: serde_json::Value) -> Session {
        Session::initialized(Arc::new(MemoryStore::with_token(forge(payload))))
    }

    #[test]
    fn test_authenticated_guard_defers_while_unresolved() {
        let session = Session::new(Arc::new(MemoryStore::with_token(
            forge(json!({ "sub": "u1" })),
        )));

        // Even a store holding a valid credential defers until resolved.
        assert_eq!(
            AuthenticatedGuard::new().evaluate(&session),
            GuardOutcome::Defer
        );
    }

    #[test]
    fn test_authenticated_guard_redirects_logged_out() {
        let session = Session::initialized(Arc::new(MemoryStore::new()));

        assert_eq!(
            AuthenticatedGuard::new().evaluate(&session),
            GuardOutcome::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_authenticated_guard_renders_logged_in() {
        let session = session_with(json!({ "sub": "u1" }));

        assert_eq!(
            AuthenticatedGuard::new().evaluate(&session),
            GuardOutcome::Render
        );
    }

    #[test]
    fn test_role_guard_renders_with_role() {
        let session = session_with(json!({ "sub": "u1", "roles": ["ADMIN"] }));
        let guard = RoleGuard::new(AuthenticatedGuard::new(), "ADMIN");

        assert_eq!(guard.evaluate(&session), GuardOutcome::Render);
    }

    #[test]
    fn test_role_guard_fallback_without_role() {
        let session = session_with(json!({ "sub": "u1", "roles": ["USER"] }));
        let guard = RoleGuard::new(AuthenticatedGuard::new(), "ADMIN")
            .with_fallback(Route::Devices);

        // Wrong permissions go to the fallback, never to login.
        assert_eq!(
            guard.evaluate(&session),
            GuardOutcome::Redirect(Route::Devices)
        );
    }

    #[test]
    fn test_role_guard_singular_role_claim() {
        let session = session_with(json!({ "sub": "u1", "role": "ADMIN" }));
        let guard = RoleGuard::new(AuthenticatedGuard::new(), "ADMIN");

        assert_eq!(guard.evaluate(&session), GuardOutcome::Render);
    }

    #[test]
    fn test_role_guard_unauthenticated_goes_to_login() {
        let session = Session::initialized(Arc::new(MemoryStore::new()));
        let guard = RoleGuard::new(AuthenticatedGuard::new(), "ADMIN")
            .with_fallback(Route::Devices);

        // The outer guard redirects first; the fallback route is never
        // offered to a logged-out user.
        assert_eq!(
            guard.evaluate(&session),
            GuardOutcome::Redirect(Route::Login)
        );
    }

    #[test]
    fn test_role_guard_defers_while_unresolved() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        let guard = RoleGuard::new(AuthenticatedGuard::new(), "ADMIN");

        assert_eq!(guard.evaluate(&session), GuardOutcome::Defer);
    }
}
