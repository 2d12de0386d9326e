// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0
// Copyright (c) 2025 Sylvex. All rights reserved.

//! Monitoring service operations.
//!
//! The reporting endpoints answer `204 No Content` or an empty body when
//! no rows exist for the requested window, so the operations here go
//! through the empty-tolerant decode path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ClientResult;
use crate::gateway::Gateway;

// =============================================================================
// Wire types
// =============================================================================

/// A daily consumption row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyConsumption {
    /// Device the row belongs to.
    #[serde(rename = "deviceId")]
    pub device_id: i64,
    /// Calendar day in the backend's timezone.
    pub date: NaiveDate,
    /// Consumption for the day, in the backend's unit.
    pub consumption: f64,
}

// =============================================================================
// Operations
// =============================================================================

impl Gateway {
    /// Fetches the daily consumption series for a device up to a date.
    ///
    /// Returns an empty vector when the device has no rows yet.
    pub async fn daily_consumption(
        &self,
        device_id: i64,
        date: NaiveDate,
    ) -> ClientResult<Vec<DailyConsumption>> {
        let url = format!(
            "{}/monitoring/devices/{}/daily?date={}",
            self.config().services.monitoring_base_url,
            device_id,
            date.format("%Y-%m-%d")
        );
        self.get_json_or_empty(&url).await
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_consumption_decodes() {
        let rows: Vec<DailyConsumption> = serde_json::from_str(
            r#"[{ "deviceId": 1, "date": "2026-08-01", "consumption": 12.5 }]"#,
        )
        .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2026, 8, 1).unwrap());
        assert_eq!(rows[0].consumption, 12.5);
    }
}
