// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Capability-gated navigation.
//!
//! The presenter computes the set of visible links from the current
//! claims and exposes the single logout action. Each link is gated by
//! its own predicate with no ordering dependency between links.

use tracing::warn;

use ward_core::capability::{has_role, is_reserved_identity};
use ward_core::config::AccessConfig;

use crate::error::SessionResult;
use crate::route::Route;
use crate::session::Session;

// =============================================================================
// NavLink
// =============================================================================

/// A single navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    /// Display label.
    pub label: &'static str,
    /// Target route.
    pub target: Route,
}

impl NavLink {
    const PEOPLE: NavLink = NavLink {
        label: "People",
        target: Route::People,
    };
    const DEVICES: NavLink = NavLink {
        label: "Devices",
        target: Route::Devices,
    };
    const MONITORING: NavLink = NavLink {
        label: "Monitoring",
        target: Route::Monitoring,
    };
    const ASSIGNMENT: NavLink = NavLink {
        label: "Assignments",
        target: Route::DeviceAssignment,
    };
}

// =============================================================================
// NavView
// =============================================================================

/// What the navigation bar should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavView {
    /// No bar at all (logged out).
    Hidden,
    /// The visible link set for the current actor.
    Bar(Vec<NavLink>),
    /// The session was broken at render time and has been cleared;
    /// navigate to login.
    RedirectToLogin,
}

// =============================================================================
// NavigationPresenter
// =============================================================================

/// Renders the capability-gated link set and owns the logout action.
#[derive(Debug, Clone)]
pub struct NavigationPresenter {
    admin_role: String,
    reserved_subject: Option<String>,
}

impl NavigationPresenter {
    /// Creates a presenter from access configuration.
    pub fn new(access: &AccessConfig) -> Self {
        Self {
            admin_role: access.admin_role.clone(),
            reserved_subject: access.reserved_subject.clone(),
        }
    }

    /// Computes the navigation view for the current session.
    ///
    /// A credential that is present but produced no claims means decoding
    /// failed after the session settled; rendering a partial bar from
    /// undefined claims is not an option, so the presenter logs the actor
    /// out instead.
    pub fn render(&self, session: &mut Session) -> SessionResult<NavView> {
        if !session.is_authenticated() {
            return Ok(NavView::Hidden);
        }

        if session.claims().is_none() {
            warn!("Credential present but claims missing at render time; forcing logout");
            session.logout()?;
            return Ok(NavView::RedirectToLogin);
        }

        let claims = session.claims();
        let mut links = Vec::new();

        if has_role(claims, &self.admin_role) {
            links.push(NavLink::PEOPLE);
        }
        links.push(NavLink::DEVICES);
        links.push(NavLink::MONITORING);
        if has_role(claims, &self.admin_role)
            || self
                .reserved_subject
                .as_deref()
                .is_some_and(|id| is_reserved_identity(claims, id))
        {
            links.push(NavLink::ASSIGNMENT);
        }

        Ok(NavView::Bar(links))
    }

    /// Clears the session and returns the route to navigate to.
    pub fn logout(&self, session: &mut Session) -> SessionResult<Route> {
        session.logout()?;
        Ok(Route::Login)
    }
}

// =============================================================================
// Tests
// =============================================================================
