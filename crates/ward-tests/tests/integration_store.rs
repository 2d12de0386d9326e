// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! # Store Integration Tests
//!
//! Integration tests for the file-backed credential store:
//!
//! - Durability across store reopen
//! - Interaction with the session lifecycle
//! - Self-healing of corrupted on-disk credentials

use std::sync::Arc;

use ward_session::Session;
use ward_store::{CredentialStore, FileStore};
use ward_tests::prelude::*;

// =============================================================================
// Durability Tests
// =============================================================================

#[test]
fn test_store_credential_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let token = TokenFixtures::user();

    {
        let store = FileStore::new(dir.path());
        store.set(&token).unwrap();
    }

    let store = FileStore::new(dir.path());
    assert_eq!(store.get(), Some(token));
}

#[test]
fn test_store_remove_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let store = FileStore::new(dir.path());
    store.set(&TokenFixtures::user()).unwrap();
    store.remove().unwrap();

    let store = FileStore::new(dir.path());
    assert!(store.get().is_none());
}

// =============================================================================
// Session Interaction Tests
// =============================================================================

#[test]
fn test_store_session_restores_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let token = TokenFixtures::admin();

    // First run: log in.
    {
        let store: Arc<dyn CredentialStore> = Arc::new(FileStore::new(dir.path()));
        let mut session = Session::initialized(store);
        session.set_credential(Some(token.clone())).unwrap();
    }

    // Second run: the credential is restored from disk.
    let store: Arc<dyn CredentialStore> = Arc::new(FileStore::new(dir.path()));
    let session = Session::initialized(store);

    assert!(session.is_authenticated());
    assert_eq!(session.credential(), Some(token.as_str()));
    assert_eq!(session.claims().unwrap().subject_id(), "admin-001");
}

#[test]
fn test_store_corrupted_file_healed_on_startup() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = FileStore::new(dir.path());
        store.set("corrupted-bytes").unwrap();
    }

    let store: Arc<dyn CredentialStore> = Arc::new(FileStore::new(dir.path()));
    let session = Session::initialized(store.clone());

    // Logged out, and the bad file is gone for the next run too.
    assert!(!session.is_authenticated());
    assert!(store.get().is_none());
}

#[test]
fn test_store_logout_clears_disk() {
    let dir = tempfile::tempdir().unwrap();

    let store: Arc<dyn CredentialStore> = Arc::new(FileStore::new(dir.path()));
    let mut session = Session::initialized(store.clone());
    session.set_credential(Some(TokenFixtures::user())).unwrap();
    assert!(store.get().is_some());

    session.logout().unwrap();

    assert!(store.get().is_none());
}
