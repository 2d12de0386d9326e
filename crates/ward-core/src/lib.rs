// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # ward-core
//!
//! Shared types for the WARD device-management console client.
//!
//! This crate provides the identity model used by every other WARD
//! component:
//!
//! - **Claims**: the normalized, read-only view of a decoded bearer token
//! - **Token**: unverified JWT payload decoding (the console consumes
//!   tokens it cannot verify; validation happens server-side on API calls)
//! - **Capability**: pure predicates mapping claims to access decisions
//! - **Config**: service endpoints and access-control configuration
//!
//! ## Example
//!
//! ```
//! use ward_core::capability::has_role;
//! use ward_core::token::decode_token;
//!
//! // A syntactically invalid token is an error, never a panic.
//! assert!(decode_token("not-a-jwt").is_err());
//!
//! // Predicates are total over missing claims.
//! assert!(!has_role(None, "ADMIN"));
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod capability;
pub mod claims;
pub mod config;
pub mod error;
pub mod token;

// =============================================================================
// Re-exports
// =============================================================================

pub use capability::{has_any_of, has_role, is_reserved_identity};
pub use claims::{Claims, RoleSet};
pub use config::{AccessConfig, ClientConfig, ServiceEndpoints};
pub use error::TokenError;
pub use token::decode_token;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Tests
// =============================================================================
