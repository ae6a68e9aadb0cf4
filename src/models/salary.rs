//! Monthly salary records.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a salary was entered: as a daily wage or as a monthly amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryType {
    /// Entered as a daily wage; `base_salary_30_days = daily_wage × 30`.
    Daily,
    /// Entered as a monthly salary; `base_salary_30_days = monthly_salary`.
    Monthly,
}

/// One month of salary for one employee.
///
/// At most one record exists per (employee, year, month); the payroll-entry
/// UI enforces this before the engine ever sees the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalaryRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee this salary belongs to.
    pub employee_id: String,
    /// Calendar year the salary was earned in.
    pub year: i32,
    /// Calendar month (1–12).
    pub month: u32,
    /// How the salary was entered.
    pub salary_type: SalaryType,
    /// Daily wage, present for daily-type records.
    #[serde(default)]
    pub daily_wage: Option<Decimal>,
    /// Monthly salary, present for monthly-type records.
    #[serde(default)]
    pub monthly_salary: Option<Decimal>,
    /// The normalized monthly taxable base: daily wage × 30, or the
    /// monthly salary as entered.
    pub base_salary_30_days: Decimal,
    /// Additional taxable compensation for the month.
    #[serde(default)]
    pub extras: Decimal,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl SalaryRecord {
    /// The taxable earnings of the month ("haberes gravados"): normalized
    /// base plus extras. This is the basis for every monetary calculation.
    pub fn taxable_total(&self) -> Decimal {
        self.base_salary_30_days + self.extras
    }
}
