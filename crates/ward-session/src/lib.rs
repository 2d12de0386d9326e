// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # ward-session
//!
//! Session lifecycle and capability-gated navigation for the WARD
//! device-management console.
//!
//! This crate owns the answer to "who is the current actor, and have we
//! established that yet":
//!
//! - **Session**: single source of truth for the credential plus derived
//!   claims, with a one-shot `resolved` flag covering the initial store
//!   read
//! - **Guard**: composable gatekeepers producing an explicit
//!   render/redirect/defer outcome per navigation attempt
//! - **Route**: the closed set of navigable views and the resolution of
//!   arbitrary paths against it
//! - **Nav**: the capability-gated link bar and the single client-side
//!   logout point
//!
//! ## Ordering guarantee
//!
//! Guards must never redirect while the session is unresolved: a user
//! with a stored credential would otherwise be bounced to the login view
//! during startup, before the store has been read. [`GuardOutcome::Defer`]
//! exists for exactly that window.

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod guard;
pub mod nav;
pub mod route;
pub mod session;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{SessionError, SessionResult};
pub use guard::{AuthenticatedGuard, Guard, GuardOutcome, RoleGuard};
pub use nav::{NavLink, NavView, NavigationPresenter};
pub use route::{Resolution, Route, RouteTable};
pub use session::Session;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
