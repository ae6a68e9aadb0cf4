//! Request types for the accrual engine API.
//!
//! This module defines the JSON request structures for the recalculation
//! endpoints.

use serde::{Deserialize, Serialize};

/// Request body for the `/recalculate` endpoint.
///
/// Triggers a full recalculation of one employee's payroll items for a
/// calendar year.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculateRequest {
    /// The employee whose items should be refreshed.
    pub employee_id: String,
    /// The calendar year to recalculate.
    pub year: i32,
}

/// Request body for the `/recalculate-all` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculateAllRequest {
    /// The calendar year to recalculate across all employees.
    pub year: i32,
}
