//! Taken-leave records ("licencia tomada").

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Vacation days actually taken by an employee.
///
/// `year` is the year the days were **earned**, not necessarily the year
/// they were enjoyed; leave is always charged against the balance of the
/// year that generated it and never borrowed from a future year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee who took the leave.
    pub employee_id: String,
    /// The year whose balance the days are charged against.
    pub year: i32,
    /// Calendar month the leave was entered under, when known.
    #[serde(default)]
    pub month: Option<u32>,
    /// Number of days taken. Must be positive; half days are allowed.
    pub days_taken: Decimal,
    /// First calendar day of the leave, when recorded.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last calendar day of the leave, when recorded.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Free-text notes entered by the user.
    #[serde(default)]
    pub notes: Option<String>,
}

impl LicenseRecord {
    /// Validates the invariants the engine relies on before a record is
    /// persisted: positive `days_taken` and a non-empty employee reference.
    pub fn validate(&self) -> EngineResult<()> {
        if self.employee_id.is_empty() {
            return Err(EngineError::InvalidInput {
                field: "employeeId".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.days_taken <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "daysTaken".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
