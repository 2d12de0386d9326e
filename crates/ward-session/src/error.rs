// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Session error types.

use thiserror::Error;

/// Result type alias for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors surfaced by session mutations.
///
/// Decode failures are deliberately absent here: a credential that does
/// not decode produces a logged-out state, not an error. Only the backing
/// store can fail a session operation.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The credential store rejected a write or removal.
    #[error("Credential store failure: {0}")]
    Store(#[from] ward_store::StoreError),
}
