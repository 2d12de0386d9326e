// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Test Builders
//!
//! Builder patterns for constructing test sessions over an in-memory
//! credential store.

use std::sync::Arc;

use ward_session::Session;
use ward_store::{CredentialStore, MemoryStore};

// =============================================================================
// SessionBuilder
// =============================================================================

/// Builder for test sessions.
///
/// Defaults to an empty in-memory store and a resolved session; tests
/// exercising the startup window opt out with [`SessionBuilder::unresolved`].
#[derive(Debug, Default)]
pub struct SessionBuilder {
    token: Option<String>,
    unresolved: bool,
}

impl SessionBuilder {
    /// Creates a builder with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with a credential before the session starts.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Leaves the session unresolved, as during the startup window.
    pub fn unresolved(mut self) -> Self {
        self.unresolved = true;
        self
    }

    /// Builds the session together with its backing store.
    ///
    /// The store handle lets tests observe or mutate the persisted
    /// credential behind the session's back.
    pub fn build_with_store(self) -> (Session, Arc<MemoryStore>) {
        let store = match self.token {
            Some(token) => Arc::new(MemoryStore::with_token(token)),
            None => Arc::new(MemoryStore::new()),
        };

        let dyn_store: Arc<dyn CredentialStore> = store.clone();
        let session = if self.unresolved {
            Session::new(dyn_store)
        } else {
            Session::initialized(dyn_store)
        };

        (session, store)
    }

    /// Builds the session, discarding the store handle.
    pub fn build(self) -> Session {
        self.build_with_store().0
    }
}
