//! Derived records owned by the calculation engine.
//!
//! The engine is the sole writer of computed fields on these records, but it
//! must never overwrite externally-set `paid_date`/`notes` during routine
//! recalculation; those only change through explicit payment actions.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The six-month window an aguinaldo installment covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Semester {
    /// December of the previous year through May ("1er semestre"),
    /// payable in June.
    First,
    /// June through November ("2do semestre"), payable in December.
    Second,
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Semester::First => write!(f, "1er semestre"),
            Semester::Second => write!(f, "2do semestre"),
        }
    }
}

/// Day-balance fields shared by vacation-pay and unused-leave records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DayBalance {
    /// Vacation days accrued for the year.
    pub days_accumulated: Decimal,
    /// Days taken against the year's balance.
    pub days_taken: Decimal,
    /// Remaining balance; never negative.
    pub days_remaining: Decimal,
}

impl DayBalance {
    /// Builds a balance, clamping the remainder at zero.
    pub fn new(days_accumulated: Decimal, days_taken: Decimal) -> Self {
        let days_remaining = (days_accumulated - days_taken).max(Decimal::ZERO);
        Self {
            days_accumulated,
            days_taken,
            days_remaining,
        }
    }
}

/// Vacation pay ("salario vacacional") computed for an active employee.
///
/// One record per (employee, year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VacationPayRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The accrual year.
    pub year: i32,
    /// Vacation pay owed for the days being enjoyed, rounded to 2 decimals.
    pub amount: Decimal,
    /// The day balance backing the amount.
    #[serde(flatten)]
    pub balance: DayBalance,
    /// Settlement date, set externally. A non-null value means the payout
    /// has been settled; recalculation never clears it.
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    /// Free-text notes, set externally and preserved across recalculation.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the record was first created.
    pub created_at: DateTime<Utc>,
    /// When computed fields were last rewritten.
    pub updated_at: DateTime<Utc>,
}

/// Unused-leave payout ("licencia no gozada") computed at termination.
///
/// One record per (employee, year); written only for employees with an
/// end date, never alongside a vacation-pay amount for the same period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnusedLeavePayoutRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The accrual year.
    pub year: i32,
    /// Payout for the remaining balance, rounded to 2 decimals.
    pub amount: Decimal,
    /// The day balance backing the amount.
    #[serde(flatten)]
    pub balance: DayBalance,
    /// Settlement date, set externally and preserved across recalculation.
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    /// Free-text notes, set externally and preserved across recalculation.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the record was first created.
    pub created_at: DateTime<Utc>,
    /// When computed fields were last rewritten.
    pub updated_at: DateTime<Utc>,
}

/// One semester's aguinaldo for one employee.
///
/// One record per (employee, year, semester); the semester is an explicit
/// field rather than a marker embedded in the notes text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AguinaldoRecord {
    /// Unique identifier for the record.
    pub id: String,
    /// The employee the record belongs to.
    pub employee_id: String,
    /// The year the installment is payable in.
    pub year: i32,
    /// Which half-year window the installment covers.
    pub semester: Semester,
    /// Total taxable earnings of the window divided by twelve, rounded to
    /// 2 decimals.
    pub amount: Decimal,
    /// Settlement date, set externally. Paid semesters contribute zero to
    /// outstanding balances; the amount stays computable for audit.
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    /// Free-text notes, set externally and preserved across recalculation.
    #[serde(default)]
    pub notes: Option<String>,
    /// When the record was first created.
    pub created_at: DateTime<Utc>,
    /// When computed fields were last rewritten.
    pub updated_at: DateTime<Utc>,
}
