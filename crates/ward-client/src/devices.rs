// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Device service operations.
//!
//! Covers the device inventory and the person-to-device assignment
//! endpoints. All calls run authenticated through the shared gateway.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::gateway::Gateway;

// =============================================================================
// Wire types
// =============================================================================

/// A device record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    /// Backend identifier.
    pub id: i64,
    /// Human-readable device name.
    pub name: String,
    /// Manufacturer serial number.
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
}

/// Request body for creating a device.
#[derive(Debug, Serialize)]
pub struct NewDevice {
    /// Human-readable device name.
    pub name: String,
    /// Manufacturer serial number.
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
}

/// A person-to-device assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    /// Backend identifier.
    pub id: i64,
    /// Assigned device.
    #[serde(rename = "deviceId")]
    pub device_id: i64,
    /// Assignee.
    #[serde(rename = "personId")]
    pub person_id: i64,
    /// When the assignment was made.
    #[serde(rename = "assignedAt", default)]
    pub assigned_at: Option<DateTime<Utc>>,
}

/// Request body for creating an assignment.
#[derive(Debug, Serialize)]
pub struct AssignmentRequest {
    /// Device to assign.
    #[serde(rename = "deviceId")]
    pub device_id: i64,
    /// Person receiving the device.
    #[serde(rename = "personId")]
    pub person_id: i64,
}

// =============================================================================
// Operations
// =============================================================================

impl Gateway {
    /// Lists all devices.
    pub async fn list_devices(&self) -> ClientResult<Vec<Device>> {
        let url = format!("{}/devices", self.config().services.device_base_url);
        self.get_json(&url).await
    }

    /// Fetches a single device by id.
    pub async fn get_device(&self, id: i64) -> ClientResult<Device> {
        let url = format!("{}/devices/{}", self.config().services.device_base_url, id);
        self.get_json(&url).await
    }

    /// Creates a device.
    pub async fn create_device(&self, device: &NewDevice) -> ClientResult<Device> {
        let url = format!("{}/devices", self.config().services.device_base_url);
        self.post_json(&url, device).await
    }

    /// Updates a device.
    pub async fn update_device(&self, id: i64, device: &NewDevice) -> ClientResult<Device> {
        let url = format!("{}/devices/{}", self.config().services.device_base_url, id);
        self.put_json(&url, device).await
    }

    /// Deletes a device.
    pub async fn delete_device(&self, id: i64) -> ClientResult<()> {
        let url = format!("{}/devices/{}", self.config().services.device_base_url, id);
        self.delete(&url).await
    }

    /// Lists all assignments.
    pub async fn list_assignments(&self) -> ClientResult<Vec<Assignment>> {
        let url = format!("{}/assignments", self.config().services.device_base_url);
        self.get_json(&url).await
    }

    /// Assigns a device to a person.
    pub async fn assign_device(&self, request: &AssignmentRequest) -> ClientResult<()> {
        let url = format!("{}/assignments", self.config().services.device_base_url);
        self.post_json_unit(&url, request).await
    }

    /// Removes an assignment.
    pub async fn unassign_device(&self, assignment_id: i64) -> ClientResult<()> {
        let url = format!(
            "{}/assignments/{}",
            self.config().services.device_base_url,
            assignment_id
        );
        self.delete(&url).await
    }
}

// =============================================================================
// Tests
// =============================================================================
