// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! The navigable route surface.
//!
//! The console's views form a closed, small set; unknown paths resolve to
//! the default authenticated route rather than a 404.

use serde::{Deserialize, Serialize};

use crate::guard::{AuthenticatedGuard, Guard, GuardOutcome, RoleGuard};
use crate::session::Session;

// =============================================================================
// Route
// =============================================================================

/// A navigable view of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    /// Login form (public).
    Login,
    /// Registration form (public).
    Register,
    /// Device list; the default view for any logged-in user.
    Devices,
    /// People management (admin only).
    People,
    /// Consumption monitoring charts.
    Monitoring,
    /// Device-to-person assignment management.
    DeviceAssignment,
}

impl Route {
    /// Returns the path for this route.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Register => "/register",
            Route::Devices => "/devices",
            Route::People => "/people",
            Route::Monitoring => "/monitoring-data",
            Route::DeviceAssignment => "/device-assignment",
        }
    }

    /// Parses a path into a route, if it names a known view.
    pub fn parse(path: &str) -> Option<Self> {
        match path {
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/devices" => Some(Route::Devices),
            "/people" => Some(Route::People),
            "/monitoring-data" => Some(Route::Monitoring),
            "/device-assignment" => Some(Route::DeviceAssignment),
            _ => None,
        }
    }

    /// Returns `true` if the route is reachable without a credential.
    pub fn is_public(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }

    /// Returns `true` if the route requires the admin role.
    pub fn is_admin_only(&self) -> bool {
        matches!(self, Route::People)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// The router-facing result of resolving a path against a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Render the view for this route.
    Render(Route),
    /// Navigate to another route instead.
    Redirect(Route),
    /// Render nothing yet; the session is still resolving.
    Defer,
}

// =============================================================================
// RouteTable
// =============================================================================

/// Resolves paths to render/redirect/defer decisions.
///
/// Guards nest with the authenticated guard outermost, so an
/// unauthenticated user is always sent to login rather than to the
/// role-fallback route.
#[derive(Debug, Clone)]
pub struct RouteTable {
    admin_role: String,
    fallback: Route,
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteTable {
    /// Creates a route table with the default admin role and fallback.
    pub fn new() -> Self {
        Self {
            admin_role: "ADMIN".to_string(),
            fallback: Route::Devices,
        }
    }

    /// Sets the role required for admin-only routes.
    pub fn with_admin_role(mut self, role: impl Into<String>) -> Self {
        self.admin_role = role.into();
        self
    }

    /// Sets the fallback route for unauthorized and unmatched paths.
    pub fn with_fallback(mut self, fallback: Route) -> Self {
        self.fallback = fallback;
        self
    }

    /// Returns the fallback route.
    pub fn fallback(&self) -> Route {
        self.fallback
    }

    /// Resolves a path against the current session.
    pub fn resolve(&self, path: &str, session: &Session) -> Resolution {
        // Closed surface: unknown paths fall back to the default
        // authenticated view.
        let route = Route::parse(path).unwrap_or(self.fallback);

        if route.is_public() {
            return Resolution::Render(route);
        }

        let outcome = if route.is_admin_only() {
            RoleGuard::new(AuthenticatedGuard::new(), &self.admin_role)
                .with_fallback(self.fallback)
                .evaluate(session)
        } else {
            AuthenticatedGuard::new().evaluate(session)
        };

        match outcome {
            GuardOutcome::Render => Resolution::Render(route),
            GuardOutcome::Redirect(target) => Resolution::Redirect(target),
            GuardOutcome::Defer => Resolution::Defer,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
