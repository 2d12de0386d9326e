// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # WARD Integration Tests
//!
//! This crate provides integration tests for the WARD console client:
//! session lifecycle, route guards, navigation rendering, and credential
//! storage durability.
//!
//! ## Module Structure
//!
//! - [`common`]: Shared test utilities
//!   - `fixtures`: Forged credentials for consistent testing
//!   - `builders`: Builder patterns for constructing test sessions
//!
//! ## Running Tests
//!
//! ```bash
//! # Run all integration tests
//! cargo test -p ward-tests
//!
//! # Run specific test suite
//! cargo test -p ward-tests --test integration_session
//! cargo test -p ward-tests --test integration_routing
//! cargo test -p ward-tests --test integration_nav
//! cargo test -p ward-tests --test integration_client
//! cargo test -p ward-tests --test integration_store
//! ```
//!
//! ## Test Categories
//!
//! ### Session Tests (`integration_session.rs`)
//! - Startup resolution from the credential store
//! - Corrupt credential self-healing
//! - Login and logout transitions
//!
//! ### Routing Tests (`integration_routing.rs`)
//! - Authentication and role guards
//! - Deferred decisions before resolution
//! - Unknown-path fallback
//!
//! ### Navigation Tests (`integration_nav.rs`)
//! - Capability-gated link visibility
//! - Forced logout on broken claims
//!
//! ### Client Tests (`integration_client.rs`)
//! - Pre-flight credential checks and transport error mapping
//!
//! ### Store Tests (`integration_store.rs`)
//! - File-backed credential durability across reopen

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod common;

/// Re-export commonly used items for convenience.
pub mod prelude {
    pub use crate::common::builders::*;
    pub use crate::common::fixtures::*;
}
