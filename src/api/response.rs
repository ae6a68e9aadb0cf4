//! Response types for the accrual engine API.
//!
//! This module defines the JSON response structures and error handling
//! for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::AccrualBasis;
use crate::error::EngineError;
use crate::models::{
    AguinaldoRecord, DayBalance, UnusedLeavePayoutRecord, VacationPayRecord,
};
use crate::orchestrator::EmployeeRecalculation;

/// Response body for the `/recalculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecalculateResponse {
    /// The employee that was recalculated.
    pub employee_id: String,
    /// The calendar year that was recalculated.
    pub year: i32,
    /// True when every step completed without error.
    pub clean: bool,
    /// The refreshed first-semester aguinaldo record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_semester_aguinaldo: Option<AguinaldoRecord>,
    /// The refreshed second-semester aguinaldo record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub second_semester_aguinaldo: Option<AguinaldoRecord>,
    /// The refreshed vacation-pay record (active employees).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacation_pay: Option<VacationPayRecord>,
    /// The refreshed unused-leave payout (terminated employees).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_leave: Option<UnusedLeavePayoutRecord>,
    /// Messages from steps that failed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl From<EmployeeRecalculation> for RecalculateResponse {
    fn from(outcome: EmployeeRecalculation) -> Self {
        let clean = outcome.is_clean();
        RecalculateResponse {
            employee_id: outcome.employee_id,
            year: outcome.year,
            clean,
            first_semester_aguinaldo: outcome.first_semester_aguinaldo,
            second_semester_aguinaldo: outcome.second_semester_aguinaldo,
            vacation_pay: outcome.vacation_pay,
            unused_leave: outcome.unused_leave,
            errors: outcome.errors.iter().map(ToString::to_string).collect(),
        }
    }
}

/// One semester's state in an accrual summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterSummary {
    /// The computed aguinaldo amount for the semester.
    pub amount: Decimal,
    /// True when a settlement date has been recorded.
    pub paid: bool,
}

/// Response body for the `GET /accruals/:employee_id/:year` endpoint.
///
/// A read-only view: nothing is persisted when this is computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccrualSummaryResponse {
    /// The employee summarized.
    pub employee_id: String,
    /// The calendar year summarized.
    pub year: i32,
    /// True when the employee has an end date on file.
    pub terminated: bool,
    /// How the day accrual was derived.
    pub basis: AccrualBasis,
    /// Months of the year with recognized work.
    pub months_worked: u32,
    /// The vacation-day balance for the year.
    pub balance: DayBalance,
    /// Mean taxable monthly total across the year's salary records.
    pub average_monthly_salary: Decimal,
    /// First-semester aguinaldo state.
    pub first_semester: SemesterSummary,
    /// Second-semester aguinaldo state.
    pub second_semester: SemesterSummary,
    /// What the remaining days would pay an active employee.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vacation_pay_estimate: Option<Decimal>,
    /// What the remaining days pay out at termination.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unused_leave_payout: Option<Decimal>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code) = match &error {
            EngineError::InvalidInput { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            EngineError::EmployeeNotFound { .. } => (StatusCode::NOT_FOUND, "EMPLOYEE_NOT_FOUND"),
            EngineError::RecordNotFound { .. } => (StatusCode::NOT_FOUND, "RECORD_NOT_FOUND"),
            EngineError::StoreUnavailable { .. } => {
                (StatusCode::SERVICE_UNAVAILABLE, "STORE_UNAVAILABLE")
            }
            EngineError::RulesNotFound { .. } | EngineError::RulesParseError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "RULES_ERROR")
            }
            EngineError::CalculationError { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CALCULATION_ERROR")
            }
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_maps_to_bad_request() {
        let response: ApiErrorResponse = EngineError::InvalidInput {
            field: "year".to_string(),
            message: "0 is not a valid year".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error.code, "VALIDATION_ERROR");
    }

    #[test]
    fn test_store_unavailable_maps_to_service_unavailable() {
        let response: ApiErrorResponse = EngineError::StoreUnavailable {
            collection: "salaries".to_string(),
            message: "timeout".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_record_not_found_maps_to_not_found() {
        let response: ApiErrorResponse = EngineError::RecordNotFound {
            collection: "aguinaldo".to_string(),
            id: "rec_1".to_string(),
        }
        .into();
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
}
