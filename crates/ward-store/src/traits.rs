// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! The credential store seam.

use std::fmt::Debug;

use crate::error::StoreResult;

/// Durable slot for the current bearer credential.
///
/// Holds at most one opaque token string. Implementations must make each
/// operation atomic from the caller's point of view: a concurrent reader
/// observes either the previous or the new value, never a partial write.
///
/// # Ownership
///
/// The session layer is the sole writer. Gateway clients read the token
/// fresh via `get()` at call time but never mutate; all mutation goes
/// through the session so that the stored credential and the derived
/// claims can never diverge.
pub trait CredentialStore: Send + Sync + Debug {
    /// Returns the stored credential, if any.
    ///
    /// An unreadable backing slot is reported as absent rather than an
    /// error; a missing credential is an ordinary logged-out state.
    fn get(&self) -> Option<String>;

    /// Stores a credential, replacing any previous value.
    fn set(&self, token: &str) -> StoreResult<()>;

    /// Removes the stored credential.
    ///
    /// Removing an already-absent credential is a no-op, not an error.
    fn remove(&self) -> StoreResult<()>;
}
