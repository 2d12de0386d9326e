// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! In-memory credential store for testing.
//!
//! Volatile implementation of [`CredentialStore`]; the credential is lost
//! when the store is dropped. Primarily intended as the injectable fake
//! for session and guard tests.

use parking_lot::RwLock;

use crate::error::StoreResult;
use crate::traits::CredentialStore;

/// An in-memory credential store.
///
/// Thread-safe via `parking_lot::RwLock`; each operation is atomic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RwLock<Option<String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a credential.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: RwLock::new(Some(token.into())),
        }
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self) -> Option<String> {
        self.slot.read().clone()
    }

    fn set(&self, token: &str) -> StoreResult<()> {
        *self.slot.write() = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> StoreResult<()> {
        *self.slot.write() = None;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        assert!(store.get().is_none());
    }

    #[test]
    fn test_set_and_get() {
        let store = MemoryStore::new();
        store.set("token-1").unwrap();
        assert_eq!(store.get().as_deref(), Some("token-1"));

        // Overwrite replaces the previous value.
        store.set("token-2").unwrap();
        assert_eq!(store.get().as_deref(), Some("token-2"));
    }

    #[test]
    fn test_remove_is_idempotent() {
        let store = MemoryStore::with_token("token");
        store.remove().unwrap();
        assert!(store.get().is_none());

        store.remove().unwrap();
        assert!(store.get().is_none());
    }
}
