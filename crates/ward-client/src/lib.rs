// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! HTTP gateway to the WARD backend services.
//!
//! One [`Gateway`] serves all three backend collaborators (people,
//! devices, monitoring). The credential is read fresh from the
//! [`CredentialStore`](ward_store::CredentialStore) on every
//! authenticated call, and a 401/403 from any endpoint surfaces as
//! [`ClientError::SessionExpired`] so the caller can tear the session
//! down.

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod auth;
pub mod devices;
pub mod error;
pub mod gateway;
pub mod monitoring;
pub mod people;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest};
pub use devices::{Assignment, AssignmentRequest, Device, NewDevice};
pub use error::{ClientError, ClientResult};
pub use gateway::Gateway;
pub use monitoring::DailyConsumption;
pub use people::Person;
