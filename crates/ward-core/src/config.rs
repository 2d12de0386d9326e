// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Client configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

// =============================================================================
// ServiceEndpoints
// =============================================================================

/// Base URLs of the backend collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceEndpoints {
    /// People service (also issues credentials at `/people/login`).
    pub people_base_url: String,
    /// Device service.
    pub device_base_url: String,
    /// Monitoring service.
    pub monitoring_base_url: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            people_base_url: "http://localhost:8081".to_string(),
            device_base_url: "http://localhost:8080".to_string(),
            monitoring_base_url: "http://localhost:8082".to_string(),
        }
    }
}

// =============================================================================
// AccessConfig
// =============================================================================

/// Access-control configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AccessConfig {
    /// Role name that unlocks administrative views.
    pub admin_role: String,

    /// Optional allow-listed subject granted the assignment capability
    /// outside the role system. Must be configured explicitly; there is
    /// no default reserved identity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserved_subject: Option<String>,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            admin_role: "ADMIN".to_string(),
            reserved_subject: None,
        }
    }
}

impl AccessConfig {
    /// Sets the admin role name.
    pub fn with_admin_role(mut self, role: impl Into<String>) -> Self {
        self.admin_role = role.into();
        self
    }

    /// Sets the reserved subject.
    pub fn with_reserved_subject(mut self, subject: impl Into<String>) -> Self {
        self.reserved_subject = Some(subject.into());
        self
    }
}

// =============================================================================
// ClientConfig
// =============================================================================

/// Top-level configuration for the WARD console client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend service endpoints.
    pub services: ServiceEndpoints,

    /// Access-control settings.
    pub access: AccessConfig,

    /// Request timeout in seconds for collaborator calls.
    #[serde(with = "duration_secs")]
    pub request_timeout: Duration,
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            services: ServiceEndpoints::default(),
            access: AccessConfig::default(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Sets the service endpoints.
    pub fn with_services(mut self, services: ServiceEndpoints) -> Self {
        self.services = services;
        self
    }

    /// Sets the access configuration.
    pub fn with_access(mut self, access: AccessConfig) -> Self {
        self.access = access;
        self
    }

    /// Sets the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

// =============================================================================
// Tests
// =============================================================================
