// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # ward-store
//!
//! Credential storage for the WARD device-management console.
//!
//! The store holds at most one opaque bearer credential and survives
//! process restarts in its durable form. It is deliberately modeled as an
//! injectable trait rather than process-global state so that tests can
//! substitute an in-memory fake:
//!
//! - [`CredentialStore`]: the storage seam (`get`/`set`/`remove`)
//! - [`MemoryStore`]: volatile implementation for tests and tooling
//! - [`FileStore`]: durable implementation with atomic writes
//!
//! All operations are synchronous and atomic from the caller's point of
//! view; the session layer is the only writer.

#![warn(missing_docs)]
#![deny(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod file;
pub mod memory;
pub mod traits;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use traits::CredentialStore;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
